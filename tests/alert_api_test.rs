// ==========================================
// AlertApi 集成测试
// ==========================================
// 测试目标: 告警查询（过滤/固定页大小/降序）与幂等处置
// ==========================================


use chrono::Duration;
use equip_monitor::api::{AlertApi, ApiError};
use equip_monitor::domain::alert::EquipmentAlert;
use equip_monitor::domain::types::{AlertType, Parameter};
use equip_monitor::repository::AlertRepository;
use std::sync::Arc;
use test_helpers::{create_test_db, shared_connection, ts};

/// 构造一条未入库的测试告警
fn test_alert(name: &str, created_at: chrono::NaiveDateTime) -> EquipmentAlert {
    EquipmentAlert::new(
        name,
        AlertType::Critical,
        Parameter::Flowrate,
        160.0,
        150.0,
        "Flowrate critically high: 160.0 L/min (threshold 150.0 L/min)",
        "Throttle the feed pump and inspect downstream flow control valves.",
        created_at,
    )
}

fn setup(db_path: &str) -> (Arc<AlertRepository>, AlertApi) {
    let conn = shared_connection(db_path);
    let repo = Arc::new(AlertRepository::from_connection(conn));
    let api = AlertApi::new(Arc::clone(&repo));
    (repo, api)
}

#[test]
fn test_resolve_marks_alert() {
    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");
    let (repo, api) = setup(&db_path);

    repo.insert_batch(&[test_alert("P1", ts("2026-01-10 08:00:00"))])
        .unwrap();
    let alert_id = api.list_alerts(None).unwrap()[0].id;

    let resolved_at = ts("2026-01-10 09:30:00");
    let flipped = api.resolve_alert_at(alert_id, resolved_at).unwrap();
    assert!(flipped);

    let stored = repo.find_by_id(alert_id).unwrap().unwrap();
    assert!(stored.resolved);
    assert_eq!(stored.resolved_at, Some(resolved_at));
}

#[test]
fn test_resolve_is_idempotent() {
    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");
    let (repo, api) = setup(&db_path);

    repo.insert_batch(&[test_alert("P1", ts("2026-01-10 08:00:00"))])
        .unwrap();
    let alert_id = api.list_alerts(None).unwrap()[0].id;

    let first_at = ts("2026-01-10 09:00:00");
    assert!(api.resolve_alert_at(alert_id, first_at).unwrap());

    // 二次处置: 无操作，首次处置时间不被覆盖
    let second = api
        .resolve_alert_at(alert_id, ts("2026-01-10 10:00:00"))
        .unwrap();
    assert!(!second);

    let stored = repo.find_by_id(alert_id).unwrap().unwrap();
    assert_eq!(stored.resolved_at, Some(first_at));
}

#[test]
fn test_resolve_missing_alert_is_not_found() {
    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");
    let (_repo, api) = setup(&db_path);

    let err = api
        .resolve_alert_at(9999, ts("2026-01-10 09:00:00"))
        .unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));
}

#[test]
fn test_list_filters_by_resolved_state() {
    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");
    let (repo, api) = setup(&db_path);

    let base = ts("2026-01-10 08:00:00");
    repo.insert_batch(&[
        test_alert("P1", base),
        test_alert("P2", base + Duration::minutes(1)),
        test_alert("P3", base + Duration::minutes(2)),
    ])
    .unwrap();

    let all = api.list_alerts(None).unwrap();
    assert_eq!(all.len(), 3);

    // 处置其中一条
    api.resolve_alert_at(all[0].id, base + Duration::hours(1))
        .unwrap();

    assert_eq!(api.list_alerts(Some(false)).unwrap().len(), 2);
    let resolved = api.list_alerts(Some(true)).unwrap();
    assert_eq!(resolved.len(), 1);
    assert_eq!(resolved[0].id, all[0].id);
    assert_eq!(api.list_alerts(None).unwrap().len(), 3);
}

#[test]
fn test_list_caps_at_page_size_newest_first() {
    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");
    let (repo, api) = setup(&db_path);

    // 插入 60 条，创建时间递增
    let base = ts("2026-01-10 00:00:00");
    let alerts: Vec<EquipmentAlert> = (0..60)
        .map(|i| test_alert(&format!("P{:02}", i), base + Duration::minutes(i)))
        .collect();
    repo.insert_batch(&alerts).unwrap();

    let listed = api.list_alerts(None).unwrap();

    // 固定上限 50 条，最新在前
    assert_eq!(listed.len(), 50);
    assert_eq!(listed[0].created_at, base + Duration::minutes(59));
    assert_eq!(listed[49].created_at, base + Duration::minutes(10));
    for window in listed.windows(2) {
        assert!(window[0].created_at >= window[1].created_at);
    }
}

#[test]
fn test_alert_roundtrip_preserves_fields() {
    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");
    let (repo, api) = setup(&db_path);

    let mut alert = test_alert("P1", ts("2026-01-10 08:00:00"));
    alert.alert_type = AlertType::Predictive;
    alert.predicted_failure_date = chrono::NaiveDate::from_ymd_opt(2026, 1, 20);
    alert.confidence_score = Some(84.0);
    repo.insert_batch(&[alert]).unwrap();

    let stored = &api.list_alerts(None).unwrap()[0];
    assert_eq!(stored.alert_type, AlertType::Predictive);
    assert_eq!(stored.parameter, Parameter::Flowrate);
    assert_eq!(
        stored.predicted_failure_date,
        chrono::NaiveDate::from_ymd_opt(2026, 1, 20)
    );
    assert_eq!(stored.confidence_score, Some(84.0));
    assert!(stored.recommendation.is_some());
}
