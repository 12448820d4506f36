// ==========================================
// 化工设备监测分析系统 - 告警生成器
// ==========================================
// 职责: 固定绝对安全带告警（与批次统计无关，与健康评分无关）
// 规则: 每次越界生成且仅生成一条告警，消息与建议按 (参数, 方向) 固定;
//       同一记录同时越多条界则生成多条独立告警; 不与历史未处置告警去重
// ==========================================

use crate::config::bands::{BandConfig, ParameterBand};
use crate::domain::alert::EquipmentAlert;
use crate::domain::types::{AlertType, Parameter};
use crate::domain::SensorReading;
use chrono::NaiveDateTime;

// ==========================================
// AlertGenerator - 告警生成器
// ==========================================
pub struct AlertGenerator;

impl AlertGenerator {
    /// 对整个批次生成阈值告警
    ///
    /// # 参数
    /// - readings: 批次读数
    /// - config: 区间配置（绝对阈值来源）
    /// - created_at: 告警创建时间（由调用方注入，便于测试）
    pub fn generate(
        readings: &[SensorReading],
        config: &BandConfig,
        created_at: NaiveDateTime,
    ) -> Vec<EquipmentAlert> {
        let mut alerts = Vec::new();

        for reading in readings {
            for parameter in Parameter::all() {
                let band = config.band(parameter);
                let value = match parameter {
                    Parameter::Flowrate => reading.flowrate,
                    Parameter::Pressure => reading.pressure,
                    Parameter::Temperature => reading.temperature,
                };

                Self::check_value(
                    &mut alerts,
                    &reading.equipment_name,
                    parameter,
                    value,
                    band,
                    created_at,
                );
            }
        }

        alerts
    }

    /// 检查单个值对单参数区间的越界情况
    ///
    /// # 规则
    /// - 先查 CRITICAL 带（严格位于 WARNING 带之外），再查 WARNING 带
    /// - 高低两侧独立判断，一次越界产出一条告警
    fn check_value(
        alerts: &mut Vec<EquipmentAlert>,
        equipment_name: &str,
        parameter: Parameter,
        value: f64,
        band: &ParameterBand,
        created_at: NaiveDateTime,
    ) {
        if let Some(high) = band.critical_high {
            if value > high {
                alerts.push(Self::build(
                    equipment_name,
                    AlertType::Critical,
                    parameter,
                    value,
                    high,
                    true,
                    created_at,
                ));
                return;
            }
        }
        if let Some(low) = band.critical_low {
            if value < low {
                alerts.push(Self::build(
                    equipment_name,
                    AlertType::Critical,
                    parameter,
                    value,
                    low,
                    false,
                    created_at,
                ));
                return;
            }
        }
        if let Some(high) = band.warning_high {
            if value > high {
                alerts.push(Self::build(
                    equipment_name,
                    AlertType::Warning,
                    parameter,
                    value,
                    high,
                    true,
                    created_at,
                ));
                return;
            }
        }
        if let Some(low) = band.warning_low {
            if value < low {
                alerts.push(Self::build(
                    equipment_name,
                    AlertType::Warning,
                    parameter,
                    value,
                    low,
                    false,
                    created_at,
                ));
            }
        }
    }

    /// 构造一条告警（固定消息 + 固定建议）
    fn build(
        equipment_name: &str,
        alert_type: AlertType,
        parameter: Parameter,
        value: f64,
        threshold: f64,
        is_high: bool,
        created_at: NaiveDateTime,
    ) -> EquipmentAlert {
        let (message, recommendation) = Self::message_for(parameter, alert_type, value, threshold, is_high);
        EquipmentAlert::new(
            equipment_name,
            alert_type,
            parameter,
            value,
            threshold,
            message,
            recommendation,
            created_at,
        )
    }

    /// 按 (参数, 方向) 固定的消息与建议文案
    fn message_for(
        parameter: Parameter,
        alert_type: AlertType,
        value: f64,
        threshold: f64,
        is_high: bool,
    ) -> (String, &'static str) {
        let severity = match alert_type {
            AlertType::Critical => "critically",
            _ => "abnormally",
        };
        let direction = if is_high { "high" } else { "low" };

        let message = match parameter {
            Parameter::Flowrate => format!(
                "Flowrate {} {}: {:.1} L/min (threshold {:.1} L/min)",
                severity, direction, value, threshold
            ),
            Parameter::Pressure => format!(
                "Pressure {} {}: {:.2} bar (threshold {:.2} bar)",
                severity, direction, value, threshold
            ),
            Parameter::Temperature => format!(
                "Temperature {} {}: {:.1} °C (threshold {:.1} °C)",
                severity, direction, value, threshold
            ),
        };

        let recommendation = match (parameter, is_high) {
            (Parameter::Flowrate, true) => {
                "Throttle the feed pump and inspect downstream flow control valves."
            }
            (Parameter::Flowrate, false) => {
                "Check the suction line for blockages and verify pump operation."
            }
            (Parameter::Pressure, true) => {
                "Open the relief valve and inspect for downstream blockage."
            }
            (Parameter::Pressure, false) => {
                "Check for leaks and verify compressor output."
            }
            (Parameter::Temperature, true) => {
                "Increase cooling water flow and inspect the heat exchanger."
            }
            (Parameter::Temperature, false) => {
                "Check the heating circuit and confirm sensor calibration."
            }
        };

        (message, recommendation)
    }
}
