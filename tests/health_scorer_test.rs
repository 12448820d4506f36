// ==========================================
// HealthScorer 单元测试
// ==========================================


use equip_monitor::config::{BandConfig, ParameterBand};
use equip_monitor::engine::HealthScorer;
use test_helpers::reading;

const EPS: f64 = 1e-9;

#[test]
fn test_optimal_band_scores_100() {
    let cfg = BandConfig::default();

    // 最优带内（含两端）恒为 100
    assert!((HealthScorer::normalize(100.0, &cfg.flowrate) - 100.0).abs() < EPS);
    assert!((HealthScorer::normalize(115.0, &cfg.flowrate) - 100.0).abs() < EPS);
    assert!((HealthScorer::normalize(130.0, &cfg.flowrate) - 100.0).abs() < EPS);
}

#[test]
fn test_linear_decay_below_optimal() {
    let cfg = BandConfig::default();

    // 流量 75: 最优带下界 100、硬下界 50 → 正好衰减一半
    assert!((HealthScorer::normalize(75.0, &cfg.flowrate) - 50.0).abs() < EPS);
}

#[test]
fn test_linear_decay_above_optimal() {
    let cfg = BandConfig::default();

    // 流量 140: 最优带上界 130、硬上界 150 → 正好衰减一半
    assert!((HealthScorer::normalize(140.0, &cfg.flowrate) - 50.0).abs() < EPS);
}

#[test]
fn test_hard_bounds_score_zero() {
    let cfg = BandConfig::default();

    assert!((HealthScorer::normalize(50.0, &cfg.flowrate)).abs() < EPS);
    assert!((HealthScorer::normalize(150.0, &cfg.flowrate)).abs() < EPS);
    // 硬边界之外不会出现负分
    assert!((HealthScorer::normalize(10.0, &cfg.flowrate)).abs() < EPS);
    assert!((HealthScorer::normalize(500.0, &cfg.flowrate)).abs() < EPS);
}

#[test]
fn test_degenerate_band_scores_zero_outside() {
    // 最优带下界与硬下界重合（分母为 0），带外直接记 0
    let band = ParameterBand {
        hard_min: 4.0,
        hard_max: 9.0,
        optimal_min: 4.0,
        optimal_max: 8.0,
        critical_high: None,
        critical_low: None,
        warning_high: None,
        warning_low: None,
    };

    assert!((HealthScorer::normalize(3.0, &band)).abs() < EPS);
    assert!((HealthScorer::normalize(4.0, &band) - 100.0).abs() < EPS);
}

#[test]
fn test_weighted_overall_score() {
    let cfg = BandConfig::default();

    // 流量 115 → 100 分; 压力 8.5 → 50 分; 温度 120 → 100 分
    // 综合 = 0.4×100 + 0.3×50 + 0.3×100 = 85
    let r = reading("P-101", "Pump", 115.0, 8.5, 120.0);
    let breakdown = HealthScorer::score(&r, &cfg);

    assert!((breakdown.flowrate_score - 100.0).abs() < EPS);
    assert!((breakdown.pressure_score - 50.0).abs() < EPS);
    assert!((breakdown.temperature_score - 100.0).abs() < EPS);
    assert!((breakdown.health_score - 85.0).abs() < EPS);
}

#[test]
fn test_scores_always_in_range() {
    let cfg = BandConfig::default();

    let extremes = [
        reading("E1", "Pump", -1000.0, -50.0, -273.0),
        reading("E2", "Pump", 1e9, 1e9, 1e9),
        reading("E3", "Pump", 115.0, 6.0, 120.0),
    ];

    for r in &extremes {
        let b = HealthScorer::score(r, &cfg);
        assert!((0.0..=100.0).contains(&b.flowrate_score));
        assert!((0.0..=100.0).contains(&b.pressure_score));
        assert!((0.0..=100.0).contains(&b.temperature_score));
        assert!((0.0..=100.0).contains(&b.health_score));
    }
}

#[test]
fn test_scoring_is_deterministic() {
    let cfg = BandConfig::default();
    let r = reading("P-101", "Pump", 87.3, 5.21, 133.9);

    let first = HealthScorer::score(&r, &cfg);
    let second = HealthScorer::score(&r, &cfg);
    assert_eq!(first, second);
}
