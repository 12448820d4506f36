// ==========================================
// 化工设备监测分析系统 - 告警数据仓储
// ==========================================
// 职责: 管理 equipment_alert 表的数据访问
// 红线: Repository 不含业务逻辑
// 说明: 告警只追加，处置（resolve）是唯一的更新操作且幂等
// ==========================================

use crate::db::open_sqlite_connection;
use crate::domain::alert::EquipmentAlert;
use crate::domain::types::{AlertType, Parameter};
use crate::repository::error::{RepositoryError, RepositoryResult};
use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::{params, Connection, Result as SqliteResult, Row};
use std::sync::{Arc, Mutex};

/// 时间戳存储格式
const TS_FMT: &str = "%Y-%m-%d %H:%M:%S";

/// 告警查询固定页大小
pub const ALERT_PAGE_SIZE: usize = 50;

// ==========================================
// AlertRepository - 告警仓储
// ==========================================
pub struct AlertRepository {
    conn: Arc<Mutex<Connection>>,
}

impl AlertRepository {
    /// 创建新的 AlertRepository 实例
    pub fn new(db_path: &str) -> RepositoryResult<Self> {
        let conn = open_sqlite_connection(db_path)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// 从已有连接创建仓储实例
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// 批量插入告警（单事务）
    ///
    /// # 返回
    /// - Ok(usize): 插入条数
    pub fn insert_batch(&self, alerts: &[EquipmentAlert]) -> RepositoryResult<usize> {
        let conn = self.get_conn()?;
        let tx = conn.unchecked_transaction()?;

        let mut count = 0;
        for alert in alerts {
            tx.execute(
                r#"
                INSERT INTO equipment_alert (
                    equipment_name, alert_type, parameter,
                    value, threshold, message, recommendation,
                    created_at, resolved, resolved_at,
                    predicted_failure_date, confidence_score
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)
                "#,
                params![
                    alert.equipment_name,
                    alert.alert_type.as_str(),
                    alert.parameter.as_str(),
                    alert.value,
                    alert.threshold,
                    alert.message,
                    alert.recommendation,
                    alert.created_at.format(TS_FMT).to_string(),
                    alert.resolved as i64,
                    alert.resolved_at.map(|t| t.format(TS_FMT).to_string()),
                    alert.predicted_failure_date.map(|d| d.to_string()),
                    alert.confidence_score,
                ],
            )?;
            count += 1;
        }

        tx.commit()?;
        Ok(count)
    }

    /// 按ID查询告警
    pub fn find_by_id(&self, alert_id: i64) -> RepositoryResult<Option<EquipmentAlert>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(&format!(
            "{} WHERE id = ?1",
            SELECT_ALERT
        ))?;

        let result = stmt.query_row(params![alert_id], map_alert_row);
        match result {
            Ok(alert) => Ok(Some(alert)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// 查询告警（可按处置状态过滤）
    ///
    /// # 参数
    /// - resolved: Some(true/false) 按状态过滤，None 返回全部
    ///
    /// # 返回
    /// - Vec<EquipmentAlert>: 按创建时间降序，固定上限 50 条
    pub fn find_filtered(&self, resolved: Option<bool>) -> RepositoryResult<Vec<EquipmentAlert>> {
        let conn = self.get_conn()?;

        let alerts = match resolved {
            Some(flag) => {
                let mut stmt = conn.prepare(&format!(
                    "{} WHERE resolved = ?1 ORDER BY created_at DESC, id DESC LIMIT ?2",
                    SELECT_ALERT
                ))?;
                let rows = stmt
                    .query_map(params![flag as i64, ALERT_PAGE_SIZE as i64], map_alert_row)?
                    .collect::<SqliteResult<Vec<_>>>()?;
                rows
            }
            None => {
                let mut stmt = conn.prepare(&format!(
                    "{} ORDER BY created_at DESC, id DESC LIMIT ?1",
                    SELECT_ALERT
                ))?;
                let rows = stmt
                    .query_map(params![ALERT_PAGE_SIZE as i64], map_alert_row)?
                    .collect::<SqliteResult<Vec<_>>>()?;
                rows
            }
        };

        Ok(alerts)
    }

    /// 处置告警（幂等）
    ///
    /// # 参数
    /// - alert_id: 告警ID
    /// - resolved_at: 处置时间
    ///
    /// # 返回
    /// - Ok(true): 本次调用完成了处置
    /// - Ok(false): 告警此前已处置（无操作，状态不变）
    /// - Err(NotFound): 告警不存在
    pub fn resolve(&self, alert_id: i64, resolved_at: NaiveDateTime) -> RepositoryResult<bool> {
        let conn = self.get_conn()?;

        // 只翻转未处置的告警，保证 resolved_at 不被二次覆盖
        let updated = conn.execute(
            "UPDATE equipment_alert SET resolved = 1, resolved_at = ?2 WHERE id = ?1 AND resolved = 0",
            params![alert_id, resolved_at.format(TS_FMT).to_string()],
        )?;

        if updated > 0 {
            return Ok(true);
        }

        // 区分"已处置"与"不存在"
        let exists: bool = conn
            .query_row(
                "SELECT 1 FROM equipment_alert WHERE id = ?1 LIMIT 1",
                params![alert_id],
                |_row| Ok(true),
            )
            .unwrap_or(false);

        if exists {
            Ok(false)
        } else {
            Err(RepositoryError::NotFound {
                entity: "EquipmentAlert".to_string(),
                id: alert_id.to_string(),
            })
        }
    }
}

// ==========================================
// 行映射辅助函数
// ==========================================

const SELECT_ALERT: &str = r#"
    SELECT id, equipment_name, alert_type, parameter,
           value, threshold, message, recommendation,
           created_at, resolved, resolved_at,
           predicted_failure_date, confidence_score
    FROM equipment_alert
"#;

fn map_alert_row(row: &Row<'_>) -> SqliteResult<EquipmentAlert> {
    let alert_type: String = row.get(2)?;
    let parameter: String = row.get(3)?;

    Ok(EquipmentAlert {
        id: row.get(0)?,
        equipment_name: row.get(1)?,
        alert_type: AlertType::parse(&alert_type),
        parameter: parse_parameter(&parameter),
        value: row.get(4)?,
        threshold: row.get(5)?,
        message: row.get(6)?,
        recommendation: row.get(7)?,
        created_at: parse_ts(&row.get::<_, String>(8)?),
        resolved: row.get::<_, i64>(9)? != 0,
        resolved_at: row
            .get::<_, Option<String>>(10)?
            .map(|s| parse_ts(&s)),
        predicted_failure_date: row
            .get::<_, Option<String>>(11)?
            .and_then(|s| NaiveDate::parse_from_str(&s, "%Y-%m-%d").ok()),
        confidence_score: row.get(12)?,
    })
}

/// 解析参数名字符串
fn parse_parameter(s: &str) -> Parameter {
    match s {
        "Pressure" => Parameter::Pressure,
        "Temperature" => Parameter::Temperature,
        _ => Parameter::Flowrate,
    }
}

fn parse_ts(raw: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(raw, TS_FMT).unwrap_or_else(|_| NaiveDateTime::default())
}
