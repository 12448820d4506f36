// ==========================================
// 化工设备监测分析系统 - 分析结果载荷
// ==========================================
// 用途: 导入管线的结构化输出（仅报告，不落库）
// 红线: 数据不足时统计量为 None（序列化为 null），调用方不得当作 0
// ==========================================

use crate::domain::alert::EquipmentAlert;
use crate::domain::types::{AnomalySeverity, Parameter};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ==========================================
// HealthBreakdown - 单条记录的评分明细
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HealthBreakdown {
    pub flowrate_score: f64,    // 流量子分 [0,100]
    pub pressure_score: f64,    // 压力子分 [0,100]
    pub temperature_score: f64, // 温度子分 [0,100]
    pub health_score: f64,      // 加权综合分 [0,100]
}

// ==========================================
// ParameterStats - 单参数描述统计
// ==========================================
// std_dev 在 n<2 时为 None（样本标准差未定义）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParameterStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub std_dev: Option<f64>,
    pub median: f64,
}

// ==========================================
// BatchStatistics - 批次统计
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BatchStatistics {
    pub flowrate: ParameterStats,
    pub pressure: ParameterStats,
    pub temperature: ParameterStats,
}

impl BatchStatistics {
    /// 取指定参数的统计量
    pub fn for_parameter(&self, parameter: Parameter) -> &ParameterStats {
        match parameter {
            Parameter::Flowrate => &self.flowrate,
            Parameter::Pressure => &self.pressure,
            Parameter::Temperature => &self.temperature,
        }
    }
}

// ==========================================
// CorrelationSet - 参数两两 Pearson 相关
// ==========================================
// n<2 或零方差时为 None
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CorrelationSet {
    pub flowrate_pressure: Option<f64>,
    pub flowrate_temperature: Option<f64>,
    pub pressure_temperature: Option<f64>,
}

// ==========================================
// Anomaly - 批内统计异常
// ==========================================
// 相对于批次自身 μ±2σ 的偏离，与绝对安全阈值无关
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Anomaly {
    pub equipment_name: String,
    pub parameter: Parameter,
    pub value: f64,              // 观测值
    pub expected_min: f64,       // μ - 2σ
    pub expected_max: f64,       // μ + 2σ
    pub severity: AnomalySeverity,
}

// ==========================================
// HealthScoreEntry - 单设备评分条目
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthScoreEntry {
    pub equipment_name: String,
    pub equipment_type: String,
    #[serde(flatten)]
    pub breakdown: HealthBreakdown,
}

// ==========================================
// TypeEfficiency - 按设备类型的效率指标
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeEfficiency {
    pub equipment_type: String,
    pub record_count: i64,
    pub avg_efficiency_index: f64, // 该类型效率指数均值
    pub category: String,          // 规则分类: Excellent/Good/Fair/Poor
}

// ==========================================
// AdvancedAnalytics - 批次分析汇总
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvancedAnalytics {
    pub statistics: BatchStatistics,
    pub health_scores: Vec<HealthScoreEntry>,
    pub anomalies: Vec<Anomaly>,
    pub efficiency_metrics: Vec<TypeEfficiency>,
    pub correlations: CorrelationSet,
}

// ==========================================
// IngestSummary - 导入操作输出
// ==========================================
// type_distribution 使用 BTreeMap 保证输出顺序确定
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestSummary {
    pub dataset_id: i64,
    pub total_records: i64,
    pub avg_flowrate: f64,
    pub avg_pressure: f64,
    pub avg_temperature: f64,
    pub type_distribution: BTreeMap<String, i64>,
    pub advanced_analytics: AdvancedAnalytics,
    pub alerts: Vec<EquipmentAlert>,
}
