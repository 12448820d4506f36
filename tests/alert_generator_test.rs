// ==========================================
// AlertGenerator 单元测试
// ==========================================
// 说明: 固定绝对安全带告警，与批次统计完全无关
// ==========================================


use equip_monitor::config::BandConfig;
use equip_monitor::domain::types::{AlertType, Parameter};
use equip_monitor::engine::AlertGenerator;
use test_helpers::{reading, ts};

#[test]
fn test_reference_batch_yields_two_critical_flow_alerts() {
    // 流量 [120, 95, 160, 45, 110]，压力/温度正常:
    // 仅 160 (>150) 与 45 (<50) 越出绝对安全带
    let cfg = BandConfig::default();
    let now = ts("2026-01-10 08:00:00");
    let readings = vec![
        reading("P1", "Pump", 120.0, 6.0, 120.0),
        reading("P2", "Pump", 95.0, 6.0, 120.0),
        reading("P3", "Pump", 160.0, 6.0, 120.0),
        reading("P4", "Pump", 45.0, 6.0, 120.0),
        reading("P5", "Pump", 110.0, 6.0, 120.0),
    ];

    let alerts = AlertGenerator::generate(&readings, &cfg, now);

    assert_eq!(alerts.len(), 2);
    for alert in &alerts {
        assert_eq!(alert.alert_type, AlertType::Critical);
        assert_eq!(alert.parameter, Parameter::Flowrate);
    }

    let high = alerts.iter().find(|a| a.equipment_name == "P3").unwrap();
    assert_eq!(high.value, 160.0);
    assert_eq!(high.threshold, 150.0);
    assert!(high.message.contains("critically high"));

    let low = alerts.iter().find(|a| a.equipment_name == "P4").unwrap();
    assert_eq!(low.value, 45.0);
    assert_eq!(low.threshold, 50.0);
    assert!(low.message.contains("critically low"));
}

#[test]
fn test_temperature_breaches_warning_band() {
    let cfg = BandConfig::default();
    let now = ts("2026-01-10 08:00:00");
    let readings = vec![
        reading("H1", "HeatExchanger", 110.0, 6.0, 145.0),
        reading("H2", "HeatExchanger", 110.0, 6.0, 92.0),
    ];

    let alerts = AlertGenerator::generate(&readings, &cfg, now);

    assert_eq!(alerts.len(), 2);
    for alert in &alerts {
        assert_eq!(alert.alert_type, AlertType::Warning);
        assert_eq!(alert.parameter, Parameter::Temperature);
        assert!(alert.message.contains("abnormally"));
    }
    assert_eq!(alerts[0].threshold, 140.0);
    assert_eq!(alerts[1].threshold, 95.0);
}

#[test]
fn test_in_band_batch_yields_no_alerts() {
    let cfg = BandConfig::default();
    let readings = vec![reading("P1", "Pump", 115.0, 6.0, 120.0)];

    let alerts = AlertGenerator::generate(&readings, &cfg, ts("2026-01-10 08:00:00"));
    assert!(alerts.is_empty());
}

#[test]
fn test_boundary_values_are_not_breaches() {
    // 阈值判定是严格不等: 恰好等于阈值不产生告警
    let cfg = BandConfig::default();
    let readings = vec![reading("P1", "Pump", 150.0, 8.5, 140.0)];

    let alerts = AlertGenerator::generate(&readings, &cfg, ts("2026-01-10 08:00:00"));
    assert!(alerts.is_empty());
}

#[test]
fn test_multiple_breaches_in_one_record() {
    // 同一记录三个参数同时越界 → 三条独立告警
    let cfg = BandConfig::default();
    let readings = vec![reading("C1", "Compressor", 200.0, 9.5, 145.0)];

    let alerts = AlertGenerator::generate(&readings, &cfg, ts("2026-01-10 08:00:00"));

    assert_eq!(alerts.len(), 3);
    let parameters: Vec<Parameter> = alerts.iter().map(|a| a.parameter).collect();
    assert!(parameters.contains(&Parameter::Flowrate));
    assert!(parameters.contains(&Parameter::Pressure));
    assert!(parameters.contains(&Parameter::Temperature));

    // 流量/压力越严重带，温度只有警戒带
    let temp = alerts
        .iter()
        .find(|a| a.parameter == Parameter::Temperature)
        .unwrap();
    assert_eq!(temp.alert_type, AlertType::Warning);
    let flow = alerts
        .iter()
        .find(|a| a.parameter == Parameter::Flowrate)
        .unwrap();
    assert_eq!(flow.alert_type, AlertType::Critical);
}

#[test]
fn test_new_alert_fields() {
    let cfg = BandConfig::default();
    let now = ts("2026-01-10 08:00:00");
    let readings = vec![reading("P1", "Pump", 160.0, 6.0, 120.0)];

    let alerts = AlertGenerator::generate(&readings, &cfg, now);
    let alert = &alerts[0];

    assert_eq!(alert.id, 0); // 入库前 id 为 0
    assert_eq!(alert.created_at, now);
    assert!(!alert.resolved);
    assert!(alert.resolved_at.is_none());
    assert!(alert.recommendation.is_some());
    assert!(alert.predicted_failure_date.is_none());
    assert!(alert.confidence_score.is_none());
}
