// ==========================================
// 化工设备监测分析系统 - 健康评分器
// ==========================================
// 职责: 分段线性归一化 + 加权综合健康评分
// 红线: 无状态、无副作用、无 I/O，同一输入必得同一输出
// 统一口径: 全系统只使用加权公式 0.4/0.3/0.3（不复刻旧系统的两套口径）
// ==========================================

use crate::config::bands::{BandConfig, ParameterBand};
use crate::domain::analytics::HealthBreakdown;
use crate::domain::SensorReading;

// ==========================================
// HealthScorer - 纯函数评分器
// ==========================================
pub struct HealthScorer;

impl HealthScorer {
    /// 单参数分段线性归一化
    ///
    /// # 规则
    /// - optimal_min ≤ value ≤ optimal_max → 100
    /// - value < optimal_min → max(0, 100 − (optimal_min − value)/(optimal_min − hard_min) × 100)
    /// - value > optimal_max → max(0, 100 − (value − optimal_max)/(hard_max − optimal_max) × 100)
    ///
    /// # 边界
    /// - 硬边界与最优带重合（分母为 0）时带外直接记 0
    /// - 结果恒落在 [0,100]
    pub fn normalize(value: f64, band: &ParameterBand) -> f64 {
        if value >= band.optimal_min && value <= band.optimal_max {
            return 100.0;
        }

        let score = if value < band.optimal_min {
            let span = band.optimal_min - band.hard_min;
            if span <= 0.0 {
                0.0
            } else {
                100.0 - (band.optimal_min - value) / span * 100.0
            }
        } else {
            let span = band.hard_max - band.optimal_max;
            if span <= 0.0 {
                0.0
            } else {
                100.0 - (value - band.optimal_max) / span * 100.0
            }
        };

        score.clamp(0.0, 100.0)
    }

    /// 计算单条读数的评分明细
    ///
    /// # 参数
    /// - reading: 类型化读数
    /// - config: 区间配置（含权重）
    ///
    /// # 返回
    /// - HealthBreakdown: 三个子分 + 加权综合分，均在 [0,100]
    pub fn score(reading: &SensorReading, config: &BandConfig) -> HealthBreakdown {
        let flowrate_score = Self::normalize(reading.flowrate, &config.flowrate);
        let pressure_score = Self::normalize(reading.pressure, &config.pressure);
        let temperature_score = Self::normalize(reading.temperature, &config.temperature);

        let w = &config.weights;
        let health_score = (flowrate_score * w.flowrate
            + pressure_score * w.pressure
            + temperature_score * w.temperature)
            .clamp(0.0, 100.0);

        HealthBreakdown {
            flowrate_score,
            pressure_score,
            temperature_score,
            health_score,
        }
    }
}
