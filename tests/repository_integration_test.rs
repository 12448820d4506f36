// ==========================================
// Repository 层集成测试
// ==========================================
// 测试目标: 批次/记录的事务写入与级联删除、历史排序、排名整体替换
// ==========================================


use equip_monitor::domain::ranking::EquipmentRanking;
use equip_monitor::repository::{DatasetRepository, RankingRepository};
use test_helpers::{create_test_db, dataset, record, shared_connection, ts};

#[test]
fn test_create_with_records_roundtrip() {
    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");
    let repo = DatasetRepository::from_connection(shared_connection(&db_path));

    let uploaded_at = ts("2026-01-10 08:00:00");
    let records = vec![
        record("P1", "Pump", 120.0, uploaded_at),
        record("P2", "Pump", 110.0, uploaded_at),
    ];

    let dataset_id = repo
        .create_with_records(&dataset(uploaded_at, 2), &records)
        .unwrap();
    assert!(dataset_id > 0);

    let stored = repo.find_by_id(dataset_id).unwrap().expect("dataset exists");
    assert_eq!(stored.id, dataset_id);
    assert_eq!(stored.total_records, 2);
    assert_eq!(stored.uploaded_at, uploaded_at);
    assert_eq!(stored.file_name.as_deref(), Some("test_batch.csv"));

    // 记录按原始行序返回，dataset_id 已回填
    let stored_records = repo.find_records_by_dataset(dataset_id).unwrap();
    assert_eq!(stored_records.len(), 2);
    assert_eq!(stored_records[0].equipment_name, "P1");
    assert_eq!(stored_records[1].equipment_name, "P2");
    assert!(stored_records.iter().all(|r| r.dataset_id == dataset_id));
}

#[test]
fn test_find_by_id_missing_returns_none() {
    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");
    let repo = DatasetRepository::from_connection(shared_connection(&db_path));

    assert!(repo.find_by_id(12345).unwrap().is_none());
}

#[test]
fn test_cascade_delete_removes_records() {
    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");
    let repo = DatasetRepository::from_connection(shared_connection(&db_path));

    let uploaded_at = ts("2026-01-10 08:00:00");
    let dataset_id = repo
        .create_with_records(
            &dataset(uploaded_at, 1),
            &[record("P1", "Pump", 120.0, uploaded_at)],
        )
        .unwrap();

    assert!(repo.delete(dataset_id).unwrap());
    assert!(repo.find_by_id(dataset_id).unwrap().is_none());
    // 外键级联: 记录随批次一起消失
    assert!(repo.find_records_by_dataset(dataset_id).unwrap().is_empty());
    assert!(repo.find_history_by_equipment("P1").unwrap().is_empty());

    // 重复删除返回 false
    assert!(!repo.delete(dataset_id).unwrap());
}

#[test]
fn test_find_recent_orders_newest_first() {
    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");
    let repo = DatasetRepository::from_connection(shared_connection(&db_path));

    for day in 1..=3 {
        let uploaded_at = ts(&format!("2026-01-{:02} 08:00:00", day));
        repo.create_with_records(
            &dataset(uploaded_at, 1),
            &[record("P1", "Pump", 100.0 + day as f64, uploaded_at)],
        )
        .unwrap();
    }

    let recent = repo.find_recent(2).unwrap();
    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].uploaded_at, ts("2026-01-03 08:00:00"));
    assert_eq!(recent[1].uploaded_at, ts("2026-01-02 08:00:00"));
}

#[test]
fn test_equipment_history_ordered_across_batches() {
    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");
    let repo = DatasetRepository::from_connection(shared_connection(&db_path));

    // 故意乱序写入两个批次
    let later = ts("2026-01-05 08:00:00");
    repo.create_with_records(&dataset(later, 1), &[record("P1", "Pump", 130.0, later)])
        .unwrap();
    let earlier = ts("2026-01-03 08:00:00");
    repo.create_with_records(&dataset(earlier, 1), &[record("P1", "Pump", 110.0, earlier)])
        .unwrap();

    // 历史按记录时间升序（预测器的输入约定）
    let history = repo.find_history_by_equipment("P1").unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].flowrate, 110.0);
    assert_eq!(history[1].flowrate, 130.0);

    // 其它设备不受影响
    assert!(repo.find_history_by_equipment("P2").unwrap().is_empty());
}

#[test]
fn test_ranking_replace_all_is_total() {
    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");
    let repo = RankingRepository::from_connection(shared_connection(&db_path));

    let calculated_at = ts("2026-01-10 08:00:00");
    let make = |name: &str, rank: i32| EquipmentRanking {
        id: 0,
        equipment_name: name.to_string(),
        equipment_type: "Pump".to_string(),
        overall_score: 100.0 - rank as f64,
        efficiency_rank: rank,
        reliability_rank: rank,
        performance_rank: rank,
        calculated_at,
    };

    repo.replace_all(&[make("P1", 1), make("P2", 2)]).unwrap();
    assert_eq!(repo.find_all().unwrap().len(), 2);

    // 替换是整体的: 旧集合完全消失
    repo.replace_all(&[make("P9", 1)]).unwrap();
    let rankings = repo.find_all().unwrap();
    assert_eq!(rankings.len(), 1);
    assert_eq!(rankings[0].equipment_name, "P9");
    assert_eq!(rankings[0].efficiency_rank, 1);
}

#[test]
fn test_ranking_find_all_sorted_by_efficiency_rank() {
    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");
    let repo = RankingRepository::from_connection(shared_connection(&db_path));

    let calculated_at = ts("2026-01-10 08:00:00");
    let make = |name: &str, rank: i32| EquipmentRanking {
        id: 0,
        equipment_name: name.to_string(),
        equipment_type: "Pump".to_string(),
        overall_score: 100.0 - rank as f64,
        efficiency_rank: rank,
        reliability_rank: rank,
        performance_rank: rank,
        calculated_at,
    };

    // 乱序插入
    repo.replace_all(&[make("C", 3), make("A", 1), make("B", 2)])
        .unwrap();

    let names: Vec<String> = repo
        .find_all()
        .unwrap()
        .into_iter()
        .map(|r| r.equipment_name)
        .collect();
    assert_eq!(names, vec!["A", "B", "C"]);
}
