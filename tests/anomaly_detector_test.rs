// ==========================================
// AnomalyDetector 单元测试
// ==========================================
// 说明: 检测基于批次自身 μ±2σ，与绝对告警阈值无关。
// 测试批次的压力/温度保持恒定（σ=0 被跳过），只观察流量维度。
// ==========================================


use equip_monitor::domain::types::{AnomalySeverity, Parameter};
use equip_monitor::domain::SensorReading;
use equip_monitor::engine::{AnomalyDetector, StatsAggregator};
use test_helpers::reading;

/// 由流量序列构造批次（压力/温度恒定）
fn batch_with_flowrates(flowrates: &[f64]) -> Vec<SensorReading> {
    flowrates
        .iter()
        .enumerate()
        .map(|(i, &f)| reading(&format!("P{:02}", i + 1), "Pump", f, 6.0, 120.0))
        .collect()
}

#[test]
fn test_tight_batch_has_no_anomalies() {
    let readings = batch_with_flowrates(&[100.0, 101.0, 99.0, 100.0, 100.0]);
    let stats = StatsAggregator::compute(&readings).unwrap();

    let anomalies = AnomalyDetector::detect(&readings, &stats);
    assert!(anomalies.is_empty());
}

#[test]
fn test_symmetric_outliers_flagged_medium() {
    // 10 条 100 加上对称离群点 160/40:
    // μ=100, σ=√(7200/11)≈25.58 → 带宽 [48.8, 151.2]，偏离 60 < 3σ≈76.8
    let mut flowrates = vec![100.0; 10];
    flowrates.push(160.0);
    flowrates.push(40.0);

    let readings = batch_with_flowrates(&flowrates);
    let stats = StatsAggregator::compute(&readings).unwrap();
    let anomalies = AnomalyDetector::detect(&readings, &stats);

    assert_eq!(anomalies.len(), 2);
    for anomaly in &anomalies {
        assert_eq!(anomaly.parameter, Parameter::Flowrate);
        assert_eq!(anomaly.severity, AnomalySeverity::Medium);
        assert!(anomaly.value < anomaly.expected_min || anomaly.value > anomaly.expected_max);
    }

    let values: Vec<f64> = anomalies.iter().map(|a| a.value).collect();
    assert!(values.contains(&160.0));
    assert!(values.contains(&40.0));
}

#[test]
fn test_extreme_outlier_flagged_high() {
    // 12 条 100 加上 250: μ≈111.5, σ≈41.6 → 偏离 138.5 > 3σ≈124.8
    let mut flowrates = vec![100.0; 12];
    flowrates.push(250.0);

    let readings = batch_with_flowrates(&flowrates);
    let stats = StatsAggregator::compute(&readings).unwrap();
    let anomalies = AnomalyDetector::detect(&readings, &stats);

    assert_eq!(anomalies.len(), 1);
    assert_eq!(anomalies[0].severity, AnomalySeverity::High);
    assert_eq!(anomalies[0].value, 250.0);
    assert_eq!(anomalies[0].equipment_name, "P13");
}

#[test]
fn test_zero_variance_parameter_skipped() {
    // 全部参数恒定 → σ=0，不产出异常也不 panic
    let readings = batch_with_flowrates(&[100.0, 100.0, 100.0, 100.0]);
    let stats = StatsAggregator::compute(&readings).unwrap();

    let anomalies = AnomalyDetector::detect(&readings, &stats);
    assert!(anomalies.is_empty());
}

#[test]
fn test_single_record_batch_skipped() {
    // n=1 → σ 为 None，整个参数维度跳过
    let readings = batch_with_flowrates(&[100.0]);
    let stats = StatsAggregator::compute(&readings).unwrap();

    let anomalies = AnomalyDetector::detect(&readings, &stats);
    assert!(anomalies.is_empty());
}

#[test]
fn test_anomaly_band_matches_statistics() {
    let mut flowrates = vec![100.0; 10];
    flowrates.push(160.0);
    flowrates.push(40.0);

    let readings = batch_with_flowrates(&flowrates);
    let stats = StatsAggregator::compute(&readings).unwrap();
    let anomalies = AnomalyDetector::detect(&readings, &stats);

    let f = stats.flowrate;
    let sigma = f.std_dev.unwrap();
    for anomaly in &anomalies {
        assert!((anomaly.expected_min - (f.mean - 2.0 * sigma)).abs() < 1e-9);
        assert!((anomaly.expected_max - (f.mean + 2.0 * sigma)).abs() < 1e-9);
    }
}
