// ==========================================
// 化工设备监测分析系统 - SQLite 连接初始化
// ==========================================
// 目标:
// - 统一所有 Connection::open 的 PRAGMA 行为，避免"部分模块外键开启/部分不开启"
// - 统一 busy_timeout，减少并发写入时的偶发 busy 错误
// - 集中建表语句，测试与 CLI 共用同一份 schema
// ==========================================

use rusqlite::Connection;
use rusqlite::OptionalExtension;
use std::time::Duration;

/// 默认 busy_timeout（毫秒）
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// 当前代码所期望的 schema_version
pub const CURRENT_SCHEMA_VERSION: i64 = 1;

/// 配置 SQLite 连接的统一 PRAGMA
///
/// 说明：
/// - foreign_keys 需要"每个连接"单独开启（级联删除依赖它）
/// - busy_timeout 需要"每个连接"单独配置
pub fn configure_sqlite_connection(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(Duration::from_millis(DEFAULT_BUSY_TIMEOUT_MS))?;
    Ok(())
}

/// 打开 SQLite 连接并应用统一配置
pub fn open_sqlite_connection(db_path: &str) -> rusqlite::Result<Connection> {
    let conn = Connection::open(db_path)?;
    configure_sqlite_connection(&conn)?;
    Ok(conn)
}

/// 初始化数据库 schema（幂等）
///
/// # 表
/// - dataset: 批次汇总
/// - equipment_record: 单条设备读数（属于且仅属于一个 dataset，级联删除）
/// - equipment_alert: 告警（含预测性告警字段）
/// - equipment_ranking: 设备排名（每次导入整体替换）
/// - maintenance_schedule: 维护计划
/// - schema_version: schema 版本记录
pub fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE TABLE IF NOT EXISTS dataset (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            uploaded_at TEXT NOT NULL,
            total_records INTEGER NOT NULL,
            avg_flowrate REAL NOT NULL,
            avg_pressure REAL NOT NULL,
            avg_temperature REAL NOT NULL,
            file_name TEXT,
            notes TEXT
        );

        CREATE TABLE IF NOT EXISTS equipment_record (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            dataset_id INTEGER NOT NULL REFERENCES dataset(id) ON DELETE CASCADE,
            equipment_name TEXT NOT NULL,
            equipment_type TEXT NOT NULL,
            flowrate REAL NOT NULL,
            pressure REAL NOT NULL,
            temperature REAL NOT NULL,
            health_score REAL NOT NULL,
            efficiency_index REAL NOT NULL,
            recorded_at TEXT NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_record_dataset
            ON equipment_record(dataset_id);
        CREATE INDEX IF NOT EXISTS idx_record_equipment_time
            ON equipment_record(equipment_name, recorded_at);

        CREATE TABLE IF NOT EXISTS equipment_alert (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            equipment_name TEXT NOT NULL,
            alert_type TEXT NOT NULL,
            parameter TEXT NOT NULL,
            value REAL NOT NULL,
            threshold REAL NOT NULL,
            message TEXT NOT NULL,
            recommendation TEXT,
            created_at TEXT NOT NULL,
            resolved INTEGER NOT NULL DEFAULT 0,
            resolved_at TEXT,
            predicted_failure_date TEXT,
            confidence_score REAL
        );
        CREATE INDEX IF NOT EXISTS idx_alert_resolved_created
            ON equipment_alert(resolved, created_at);

        CREATE TABLE IF NOT EXISTS equipment_ranking (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            equipment_name TEXT NOT NULL,
            equipment_type TEXT NOT NULL,
            overall_score REAL NOT NULL,
            efficiency_rank INTEGER NOT NULL,
            reliability_rank INTEGER NOT NULL,
            performance_rank INTEGER NOT NULL,
            calculated_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS maintenance_schedule (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            equipment_name TEXT NOT NULL,
            equipment_type TEXT NOT NULL,
            scheduled_date TEXT NOT NULL,
            priority TEXT NOT NULL,
            status TEXT NOT NULL DEFAULT 'SCHEDULED',
            estimated_hours REAL NOT NULL,
            description TEXT NOT NULL,
            created_at TEXT NOT NULL,
            completed_at TEXT,
            notes TEXT
        );
        "#,
    )?;

    conn.execute(
        "INSERT OR IGNORE INTO schema_version (version) VALUES (?1)",
        [CURRENT_SCHEMA_VERSION],
    )?;

    Ok(())
}

/// 读取 schema_version（若表不存在则返回 None）
pub fn read_schema_version(conn: &Connection) -> rusqlite::Result<Option<i64>> {
    let has_table: bool = conn
        .query_row(
            "SELECT 1 FROM sqlite_master WHERE type='table' AND name='schema_version' LIMIT 1",
            [],
            |_row| Ok(true),
        )
        .optional()?
        .unwrap_or(false);

    if !has_table {
        return Ok(None);
    }

    let v: Option<i64> =
        conn.query_row("SELECT MAX(version) FROM schema_version", [], |row| row.get(0))?;
    Ok(v)
}
