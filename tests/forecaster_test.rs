// ==========================================
// TrendForecaster 单元测试
// ==========================================

use chrono::NaiveDate;
use equip_monitor::config::BandConfig;
use equip_monitor::domain::types::{AlertType, Parameter, TrendDirection};
use equip_monitor::engine::TrendForecaster;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 10).unwrap()
}

#[test]
fn test_insufficient_history_returns_none() {
    let cfg = BandConfig::default();
    let history = [100.0, 110.0, 120.0, 130.0];

    assert!(TrendForecaster::forecast("P1", &history, &cfg, today()).is_none());
}

#[test]
fn test_rising_trend_predicts_high_breach() {
    // 斜率 +10/步: 第 1 步投影 150（未越界，判定严格），第 2 步 160 越界
    let cfg = BandConfig::default();
    let history = [100.0, 110.0, 120.0, 130.0, 140.0];

    let forecast = TrendForecaster::forecast("P1", &history, &cfg, today()).unwrap();

    assert_eq!(forecast.parameter, Parameter::Flowrate);
    assert_eq!(forecast.direction, TrendDirection::Up);
    assert_eq!(forecast.threshold, 150.0);
    assert!((forecast.projected_value - 160.0).abs() < 1e-9);
    assert_eq!(
        forecast.predicted_failure_date,
        NaiveDate::from_ymd_opt(2026, 1, 12).unwrap()
    );
    // 置信度 = 70 + 2×5 = 80
    assert!((forecast.confidence_score - 80.0).abs() < 1e-9);
}

#[test]
fn test_falling_trend_predicts_low_breach() {
    let cfg = BandConfig::default();
    let history = [100.0, 90.0, 80.0, 70.0, 60.0];

    let forecast = TrendForecaster::forecast("P1", &history, &cfg, today()).unwrap();

    assert_eq!(forecast.direction, TrendDirection::Down);
    assert_eq!(forecast.threshold, 50.0);
    assert!((forecast.projected_value - 40.0).abs() < 1e-9);
    assert_eq!(
        forecast.predicted_failure_date,
        NaiveDate::from_ymd_opt(2026, 1, 12).unwrap()
    );
}

#[test]
fn test_flat_history_no_breach() {
    let cfg = BandConfig::default();
    let history = [110.0; 8];

    assert!(TrendForecaster::forecast("P1", &history, &cfg, today()).is_none());
}

#[test]
fn test_slow_trend_outside_horizon_returns_none() {
    // 斜率 +0.1/步，30 步内到不了 150
    let cfg = BandConfig::default();
    let history: Vec<f64> = (0..10).map(|i| 110.0 + 0.1 * i as f64).collect();

    assert!(TrendForecaster::forecast("P1", &history, &cfg, today()).is_none());
}

#[test]
fn test_confidence_capped_at_95() {
    // 20 条历史: 置信度 min(95, 70+40) = 95
    // 值 100,102,...,138, 斜率 +2: 第 7 步投影 152 越界
    let cfg = BandConfig::default();
    let history: Vec<f64> = (0..20).map(|i| 100.0 + 2.0 * i as f64).collect();

    let forecast = TrendForecaster::forecast("P1", &history, &cfg, today()).unwrap();

    assert!((forecast.confidence_score - 95.0).abs() < 1e-9);
    assert_eq!(
        forecast.predicted_failure_date,
        NaiveDate::from_ymd_opt(2026, 1, 17).unwrap()
    );
}

#[test]
fn test_ols_fit_exact_line() {
    let (slope, intercept) = TrendForecaster::ols_fit(&[1.0, 3.0, 5.0, 7.0]).unwrap();
    assert!((slope - 2.0).abs() < 1e-12);
    assert!((intercept - 1.0).abs() < 1e-12);
}

#[test]
fn test_ols_fit_requires_two_points() {
    assert!(TrendForecaster::ols_fit(&[42.0]).is_none());
    assert!(TrendForecaster::ols_fit(&[]).is_none());
}

#[test]
fn test_to_alert_builds_predictive_alert() {
    let cfg = BandConfig::default();
    let history = [100.0, 110.0, 120.0, 130.0, 140.0];
    let forecast = TrendForecaster::forecast("P1", &history, &cfg, today()).unwrap();

    let created_at = today().and_hms_opt(8, 0, 0).unwrap();
    let alert = TrendForecaster::to_alert(&forecast, created_at);

    assert_eq!(alert.alert_type, AlertType::Predictive);
    assert_eq!(alert.parameter, Parameter::Flowrate);
    assert_eq!(alert.equipment_name, "P1");
    assert!(!alert.resolved);
    assert_eq!(
        alert.predicted_failure_date,
        Some(NaiveDate::from_ymd_opt(2026, 1, 12).unwrap())
    );
    assert_eq!(alert.confidence_score, Some(80.0));
    assert!(alert.message.contains("trending up"));
}
