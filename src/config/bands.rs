// ==========================================
// 化工设备监测分析系统 - 参数区间配置
// ==========================================
// 职责: 集中定义三个参数的评分带/告警带，供评分器、告警生成器、
//       趋势预测器共用，消除散落字面量导致的阈值漂移
// 红线: CRITICAL 带严格位于 WARNING 带之外（互不歧义）
// ==========================================

use crate::domain::types::Parameter;
use serde::{Deserialize, Serialize};

// ==========================================
// ParameterBand - 单参数区间
// ==========================================
/// 单个参数的评分带与告警带
///
/// # 字段语义
/// - [hard_min, hard_max]: 评分归一化的硬边界，子分在边界外落到 0
/// - [optimal_min, optimal_max]: 最优带，带内子分恒为 100
/// - critical_high/critical_low: 绝对安全带（CRITICAL 告警 + 趋势预测）
/// - warning_high/warning_low: 警戒带（WARNING 告警）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParameterBand {
    pub hard_min: f64,
    pub hard_max: f64,
    pub optimal_min: f64,
    pub optimal_max: f64,
    pub critical_high: Option<f64>,
    pub critical_low: Option<f64>,
    pub warning_high: Option<f64>,
    pub warning_low: Option<f64>,
}

// ==========================================
// ScoreWeights - 健康评分权重
// ==========================================
// 统一口径: 全系统只使用这一组权重（0.4/0.3/0.3）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub flowrate: f64,
    pub pressure: f64,
    pub temperature: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            flowrate: 0.4,
            pressure: 0.3,
            temperature: 0.3,
        }
    }
}

// ==========================================
// BandConfig - 全量区间配置
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandConfig {
    pub flowrate: ParameterBand,
    pub pressure: ParameterBand,
    pub temperature: ParameterBand,
    pub weights: ScoreWeights,
}

impl Default for BandConfig {
    /// 系统默认区间
    ///
    /// # 规则
    /// - 流量: 硬边界 50–150, 最优 100–130, 严重 >150 / <50
    /// - 压力: 硬边界 3–9, 最优 4–8, 严重 >8.5 / <3.5
    /// - 温度: 硬边界 90–150, 最优 100–135, 警告 >140 / <95（无严重带）
    fn default() -> Self {
        Self {
            flowrate: ParameterBand {
                hard_min: 50.0,
                hard_max: 150.0,
                optimal_min: 100.0,
                optimal_max: 130.0,
                critical_high: Some(150.0),
                critical_low: Some(50.0),
                warning_high: None,
                warning_low: None,
            },
            pressure: ParameterBand {
                hard_min: 3.0,
                hard_max: 9.0,
                optimal_min: 4.0,
                optimal_max: 8.0,
                critical_high: Some(8.5),
                critical_low: Some(3.5),
                warning_high: None,
                warning_low: None,
            },
            temperature: ParameterBand {
                hard_min: 90.0,
                hard_max: 150.0,
                optimal_min: 100.0,
                optimal_max: 135.0,
                critical_high: None,
                critical_low: None,
                warning_high: Some(140.0),
                warning_low: Some(95.0),
            },
            weights: ScoreWeights::default(),
        }
    }
}

impl BandConfig {
    /// 取指定参数的区间
    pub fn band(&self, parameter: Parameter) -> &ParameterBand {
        match parameter {
            Parameter::Flowrate => &self.flowrate,
            Parameter::Pressure => &self.pressure,
            Parameter::Temperature => &self.temperature,
        }
    }
}
