// ==========================================
// 化工设备监测分析系统 - 统计聚合器
// ==========================================
// 职责: 批次级描述统计（min/max/均值/样本标准差/中位数）
//       + 参数两两 Pearson 相关
// 红线: n<2 的标准差/相关系数返回 None，绝不返回 0、绝不 panic
// ==========================================

use crate::domain::analytics::{BatchStatistics, CorrelationSet, ParameterStats};
use crate::domain::SensorReading;

// ==========================================
// StatsAggregator - 统计聚合器
// ==========================================
pub struct StatsAggregator;

impl StatsAggregator {
    /// 计算批次统计
    ///
    /// # 参数
    /// - readings: 批次读数（非空）
    ///
    /// # 返回
    /// - Some(BatchStatistics): 批次非空
    /// - None: 空批次（调用方应在校验阶段拦截）
    pub fn compute(readings: &[SensorReading]) -> Option<BatchStatistics> {
        if readings.is_empty() {
            return None;
        }

        let flowrates: Vec<f64> = readings.iter().map(|r| r.flowrate).collect();
        let pressures: Vec<f64> = readings.iter().map(|r| r.pressure).collect();
        let temperatures: Vec<f64> = readings.iter().map(|r| r.temperature).collect();

        Some(BatchStatistics {
            flowrate: Self::parameter_stats(&flowrates),
            pressure: Self::parameter_stats(&pressures),
            temperature: Self::parameter_stats(&temperatures),
        })
    }

    /// 计算三个参数对的 Pearson 相关
    pub fn correlations(readings: &[SensorReading]) -> CorrelationSet {
        let flowrates: Vec<f64> = readings.iter().map(|r| r.flowrate).collect();
        let pressures: Vec<f64> = readings.iter().map(|r| r.pressure).collect();
        let temperatures: Vec<f64> = readings.iter().map(|r| r.temperature).collect();

        CorrelationSet {
            flowrate_pressure: Self::pearson(&flowrates, &pressures),
            flowrate_temperature: Self::pearson(&flowrates, &temperatures),
            pressure_temperature: Self::pearson(&pressures, &temperatures),
        }
    }

    /// 单参数描述统计
    fn parameter_stats(values: &[f64]) -> ParameterStats {
        let n = values.len();
        let mean = values.iter().sum::<f64>() / n as f64;

        let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

        ParameterStats {
            min,
            max,
            mean,
            std_dev: Self::sample_std_dev(values, mean),
            median: Self::median(values),
        }
    }

    /// 样本标准差（n-1 分母）
    ///
    /// # 返回
    /// - None: n < 2（未定义，数据不足）
    pub fn sample_std_dev(values: &[f64], mean: f64) -> Option<f64> {
        let n = values.len();
        if n < 2 {
            return None;
        }

        let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
        Some(var.sqrt())
    }

    /// 中位数（偶数长度取中间两数均值）
    pub fn median(values: &[f64]) -> f64 {
        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let n = sorted.len();
        if n % 2 == 1 {
            sorted[n / 2]
        } else {
            (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
        }
    }

    /// Pearson 相关系数
    ///
    /// # 规则
    /// - r = Σ(xᵢ−x̄)(yᵢ−ȳ) / √(Σ(xᵢ−x̄)² · Σ(yᵢ−ȳ)²)
    ///
    /// # 返回
    /// - None: n<2、长度不一致或任一变量零方差（未定义）
    pub fn pearson(x: &[f64], y: &[f64]) -> Option<f64> {
        let n = x.len();
        if n < 2 || y.len() != n {
            return None;
        }

        let mean_x = x.iter().sum::<f64>() / n as f64;
        let mean_y = y.iter().sum::<f64>() / n as f64;

        let mut cov = 0.0;
        let mut var_x = 0.0;
        let mut var_y = 0.0;
        for i in 0..n {
            let dx = x[i] - mean_x;
            let dy = y[i] - mean_y;
            cov += dx * dy;
            var_x += dx * dx;
            var_y += dy * dy;
        }

        if var_x <= 0.0 || var_y <= 0.0 {
            return None;
        }

        Some(cov / (var_x * var_y).sqrt())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn median_handles_even_and_odd_lengths() {
        assert_eq!(StatsAggregator::median(&[3.0, 1.0, 2.0]), 2.0);
        assert_eq!(StatsAggregator::median(&[4.0, 1.0, 3.0, 2.0]), 2.5);
    }

    #[test]
    fn pearson_perfect_positive() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let y = [2.0, 4.0, 6.0, 8.0];
        let r = StatsAggregator::pearson(&x, &y).unwrap();
        assert!((r - 1.0).abs() < 1e-12);
    }

    #[test]
    fn pearson_zero_variance_is_none() {
        let x = [5.0, 5.0, 5.0];
        let y = [1.0, 2.0, 3.0];
        assert!(StatsAggregator::pearson(&x, &y).is_none());
    }
}
