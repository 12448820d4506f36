// ==========================================
// 化工设备监测分析系统 - 异常检测器
// ==========================================
// 职责: 基于批次自身 μ/σ 的相对异常检测（z-score）
// 规则: 超出 [μ−2σ, μ+2σ] 记异常；偏离超过 3σ 为 High，否则 Medium
// 说明: 与告警生成器的绝对阈值完全无关，两者可同时触发
// ==========================================

use crate::domain::analytics::{Anomaly, BatchStatistics};
use crate::domain::types::{AnomalySeverity, Parameter};
use crate::domain::SensorReading;

// ==========================================
// AnomalyDetector - 异常检测器
// ==========================================
pub struct AnomalyDetector;

impl AnomalyDetector {
    /// 检测批次内的统计异常
    ///
    /// # 参数
    /// - readings: 批次读数
    /// - stats: 已计算的批次统计
    ///
    /// # 返回
    /// - Vec<Anomaly>: 异常列表（σ 为 None 或 0 的参数直接跳过——数据不足）
    pub fn detect(readings: &[SensorReading], stats: &BatchStatistics) -> Vec<Anomaly> {
        let mut anomalies = Vec::new();

        for parameter in Parameter::all() {
            let ps = stats.for_parameter(parameter);
            let std_dev = match ps.std_dev {
                Some(s) if s > 0.0 => s,
                _ => continue,
            };

            let expected_min = ps.mean - 2.0 * std_dev;
            let expected_max = ps.mean + 2.0 * std_dev;

            for reading in readings {
                let value = Self::value_of(reading, parameter);
                if value < expected_min || value > expected_max {
                    let deviation = (value - ps.mean).abs();
                    let severity = if deviation > 3.0 * std_dev {
                        AnomalySeverity::High
                    } else {
                        AnomalySeverity::Medium
                    };

                    anomalies.push(Anomaly {
                        equipment_name: reading.equipment_name.clone(),
                        parameter,
                        value,
                        expected_min,
                        expected_max,
                        severity,
                    });
                }
            }
        }

        anomalies
    }

    fn value_of(reading: &SensorReading, parameter: Parameter) -> f64 {
        match parameter {
            Parameter::Flowrate => reading.flowrate,
            Parameter::Pressure => reading.pressure,
            Parameter::Temperature => reading.temperature,
        }
    }
}
