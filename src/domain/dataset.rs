// ==========================================
// 化工设备监测分析系统 - 批次与读数领域模型
// ==========================================
// 不变量: 每条 EquipmentRecord 属于且仅属于一个 Dataset;
//         Dataset 的平均值等于其记录对应字段的算术平均（浮点容差内）
// ==========================================

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

// ==========================================
// SensorReading - 已验证的单行读数（瞬态）
// ==========================================
// 用途: 批次校验之后、落库之前的类型化行
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    pub equipment_name: String, // 设备名称
    pub equipment_type: String, // 设备类型
    pub flowrate: f64,          // 流量 (L/min)
    pub pressure: f64,          // 压力 (bar)
    pub temperature: f64,       // 温度 (°C)
}

// ==========================================
// Dataset - 批次汇总
// ==========================================
// 每次成功导入创建一条，创建后不再修改（仅随记录级联删除）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    pub id: i64,                   // 数据集ID
    pub uploaded_at: NaiveDateTime, // 上传时间
    pub total_records: i64,        // 记录总数
    pub avg_flowrate: f64,         // 平均流量
    pub avg_pressure: f64,         // 平均压力
    pub avg_temperature: f64,      // 平均温度
    pub file_name: Option<String>, // 来源文件名
    pub notes: Option<String>,     // 备注
}

// ==========================================
// EquipmentRecord - 持久化的设备读数
// ==========================================
// 原始读数 + 派生字段，写入后不可变
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquipmentRecord {
    pub id: i64,                    // 记录ID
    pub dataset_id: i64,            // 所属数据集
    pub equipment_name: String,     // 设备名称
    pub equipment_type: String,     // 设备类型
    pub flowrate: f64,              // 流量
    pub pressure: f64,              // 压力
    pub temperature: f64,           // 温度
    pub health_score: f64,          // 健康评分 [0,100]
    pub efficiency_index: f64,      // 效率指数（单条记录上等同健康评分）
    pub recorded_at: NaiveDateTime, // 记录时间
}
