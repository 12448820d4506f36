// ==========================================
// 化工设备监测分析系统 - 设备排名领域模型
// ==========================================
// 不变量: 排名集只反映最近一次导入批次，每次导入整体替换（无部分更新）
// ==========================================

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

// ==========================================
// EquipmentRanking - 设备排名
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquipmentRanking {
    pub id: i64,                    // 排名ID（入库前为 0）
    pub equipment_name: String,     // 设备名称
    pub equipment_type: String,     // 设备类型
    pub overall_score: f64,         // 综合评分（= 健康评分）
    pub efficiency_rank: i32,       // 效率排名（按综合评分）
    pub reliability_rank: i32,      // 可靠性排名（按压力/温度子分均值）
    pub performance_rank: i32,      // 性能排名（按流量子分）
    pub calculated_at: NaiveDateTime, // 计算时间
}

// ==========================================
// RankedEquipment - 排名查询视图
// ==========================================
// 用途: 排名查询输出，rank 为综合评分降序下的位置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedEquipment {
    pub rank: i32,
    pub equipment_name: String,
    pub equipment_type: String,
    pub overall_score: f64,
    pub efficiency_rank: i32,
    pub reliability_rank: i32,
    pub performance_rank: i32,
}
