// ==========================================
// 化工设备监测分析系统 - 趋势预测器
// ==========================================
// 职责: 对单台设备的历史流量做 OLS 线性拟合，逐日外推 30 步，
//       首个越出绝对安全带的投影点产出一条预测性告警
// 规则: 历史记录不足 5 条不预测（数据充分性门槛，不是错误）;
//       每台设备只报告最早的一次预测失效
// ==========================================

use crate::config::bands::BandConfig;
use crate::domain::alert::EquipmentAlert;
use crate::domain::types::{AlertType, Parameter, TrendDirection};
use chrono::{Duration, NaiveDate, NaiveDateTime};

/// 最少历史记录数
pub const MIN_HISTORY: usize = 5;

/// 外推步数（天）
pub const FORECAST_HORIZON_DAYS: usize = 30;

// ==========================================
// TrendForecast - 预测结果
// ==========================================
#[derive(Debug, Clone)]
pub struct TrendForecast {
    pub equipment_name: String,
    pub parameter: Parameter,
    pub projected_value: f64,          // 越界点的投影值
    pub threshold: f64,                // 被穿越的阈值
    pub direction: TrendDirection,     // 越界方向
    pub predicted_failure_date: NaiveDate,
    pub confidence_score: f64,         // min(95, 70 + 2·历史长度)
}

// ==========================================
// TrendForecaster - 趋势预测器
// ==========================================
pub struct TrendForecaster;

impl TrendForecaster {
    /// 对一台设备的流量历史做预测
    ///
    /// # 参数
    /// - equipment_name: 设备名称
    /// - history: 按记录时间升序的历史流量值（跨全部历史批次）
    /// - config: 区间配置（严重带来源）
    /// - today: 当前日期（显式传入，测试无需真实时钟）
    ///
    /// # 返回
    /// - Some(TrendForecast): 外推窗口内出现越界
    /// - None: 历史不足 5 条、无严重带或窗口内无越界
    pub fn forecast(
        equipment_name: &str,
        history: &[f64],
        config: &BandConfig,
        today: NaiveDate,
    ) -> Option<TrendForecast> {
        if history.len() < MIN_HISTORY {
            return None;
        }

        let band = &config.flowrate;
        let critical_high = band.critical_high?;
        let critical_low = band.critical_low?;

        let (slope, intercept) = Self::ols_fit(history)?;
        let n = history.len() as f64;

        // 逐日外推，首个越界点即停（只报告最早的预测失效）
        for step in 1..=FORECAST_HORIZON_DAYS {
            let x = n - 1.0 + step as f64;
            let projected = intercept + slope * x;

            let direction = if projected > critical_high {
                Some((TrendDirection::Up, critical_high))
            } else if projected < critical_low {
                Some((TrendDirection::Down, critical_low))
            } else {
                None
            };

            if let Some((direction, threshold)) = direction {
                let confidence = (70.0 + 2.0 * history.len() as f64).min(95.0);
                return Some(TrendForecast {
                    equipment_name: equipment_name.to_string(),
                    parameter: Parameter::Flowrate,
                    projected_value: projected,
                    threshold,
                    direction,
                    predicted_failure_date: today + Duration::days(step as i64),
                    confidence_score: confidence,
                });
            }
        }

        None
    }

    /// 普通最小二乘拟合: value = intercept + slope · index
    ///
    /// # 参数
    /// - values: 样本值，自变量为顺序下标 0..n−1
    ///
    /// # 返回
    /// - Some((slope, intercept))
    /// - None: n<2（无法拟合）
    pub fn ols_fit(values: &[f64]) -> Option<(f64, f64)> {
        let n = values.len();
        if n < 2 {
            return None;
        }

        let n_f = n as f64;
        let mean_x = (n_f - 1.0) / 2.0;
        let mean_y = values.iter().sum::<f64>() / n_f;

        let mut sxy = 0.0;
        let mut sxx = 0.0;
        for (i, &y) in values.iter().enumerate() {
            let dx = i as f64 - mean_x;
            sxy += dx * (y - mean_y);
            sxx += dx * dx;
        }

        if sxx <= 0.0 {
            return None;
        }

        let slope = sxy / sxx;
        let intercept = mean_y - slope * mean_x;
        Some((slope, intercept))
    }

    /// 将预测结果转换为 PREDICTIVE 告警
    pub fn to_alert(forecast: &TrendForecast, created_at: NaiveDateTime) -> EquipmentAlert {
        let message = format!(
            "Flowrate trending {} toward critical threshold {:.1} L/min, projected breach on {}",
            forecast.direction, forecast.threshold, forecast.predicted_failure_date
        );
        let recommendation = format!(
            "Schedule preventive maintenance before {}.",
            forecast.predicted_failure_date
        );

        let mut alert = EquipmentAlert::new(
            forecast.equipment_name.clone(),
            AlertType::Predictive,
            forecast.parameter,
            forecast.projected_value,
            forecast.threshold,
            message,
            recommendation,
            created_at,
        );
        alert.predicted_failure_date = Some(forecast.predicted_failure_date);
        alert.confidence_score = Some(forecast.confidence_score);
        alert
    }
}
