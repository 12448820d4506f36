// ==========================================
// 化工设备监测分析系统 - 告警领域模型
// ==========================================
// 不变量: resolved 只能单向翻转为 true（resolve 操作不可逆）
// 来源: 告警生成器（绝对阈值）或趋势预测器（PREDICTIVE）
// ==========================================

use crate::domain::types::{AlertType, Parameter};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

// ==========================================
// EquipmentAlert - 设备告警
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquipmentAlert {
    pub id: i64,                    // 告警ID（入库前为 0）
    pub equipment_name: String,     // 设备名称
    pub alert_type: AlertType,      // 告警类型
    pub parameter: Parameter,       // 触发参数
    pub value: f64,                 // 观测值/预测值
    pub threshold: f64,             // 被突破的阈值
    pub message: String,            // 固定可读消息
    pub recommendation: Option<String>, // 处置建议
    pub created_at: NaiveDateTime,  // 创建时间

    // ===== 处置状态 =====
    pub resolved: bool,                    // 是否已处置
    pub resolved_at: Option<NaiveDateTime>, // 处置时间

    // ===== 预测性告警字段 =====
    pub predicted_failure_date: Option<NaiveDate>, // 预测失效日期
    pub confidence_score: Option<f64>,             // 预测置信度 [0,95]
}

impl EquipmentAlert {
    /// 构造一条未入库的新告警（id=0，未处置）
    pub fn new(
        equipment_name: impl Into<String>,
        alert_type: AlertType,
        parameter: Parameter,
        value: f64,
        threshold: f64,
        message: impl Into<String>,
        recommendation: impl Into<String>,
        created_at: NaiveDateTime,
    ) -> Self {
        Self {
            id: 0,
            equipment_name: equipment_name.into(),
            alert_type,
            parameter,
            value,
            threshold,
            message: message.into(),
            recommendation: Some(recommendation.into()),
            created_at,
            resolved: false,
            resolved_at: None,
            predicted_failure_date: None,
            confidence_score: None,
        }
    }
}
