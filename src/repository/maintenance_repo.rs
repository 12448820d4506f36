// ==========================================
// 化工设备监测分析系统 - 维护计划数据仓储
// ==========================================
// 职责: 管理 maintenance_schedule 表的数据访问
// 红线: Repository 不含业务逻辑; "未找到"是独立错误结果
// ==========================================

use crate::db::open_sqlite_connection;
use crate::domain::maintenance::MaintenanceSchedule;
use crate::domain::types::{MaintenancePriority, MaintenanceStatus};
use crate::repository::error::{RepositoryError, RepositoryResult};
use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::{params, Connection, Result as SqliteResult, Row};
use std::sync::{Arc, Mutex};

/// 时间戳存储格式
const TS_FMT: &str = "%Y-%m-%d %H:%M:%S";

// ==========================================
// MaintenanceRepository - 维护计划仓储
// ==========================================
pub struct MaintenanceRepository {
    conn: Arc<Mutex<Connection>>,
}

impl MaintenanceRepository {
    /// 创建新的 MaintenanceRepository 实例
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

    /// 创建维护计划
    ///
    /// # 返回
    /// - Ok(i64): 新计划ID
    pub fn create(&self, schedule: &MaintenanceSchedule) -> RepositoryResult<i64> {
        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT INTO maintenance_schedule (
                equipment_name, equipment_type, scheduled_date,
                priority, status, estimated_hours, description,
                created_at, completed_at, notes
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
            "#,
            params![
                schedule.equipment_name,
                schedule.equipment_type,
                schedule.scheduled_date.to_string(),
                schedule.priority.as_str(),
                schedule.status.as_str(),
                schedule.estimated_hours,
                schedule.description,
                schedule.created_at.format(TS_FMT).to_string(),
                schedule.completed_at.map(|t| t.format(TS_FMT).to_string()),
                schedule.notes,
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// 查询全部维护计划（按计划日期升序、优先级降序）
    pub fn find_all(&self) -> RepositoryResult<Vec<MaintenanceSchedule>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT id, equipment_name, equipment_type, scheduled_date,
                   priority, status, estimated_hours, description,
                   created_at, completed_at, notes
            FROM maintenance_schedule
            ORDER BY scheduled_date ASC,
                CASE priority
                    WHEN 'CRITICAL' THEN 0
                    WHEN 'HIGH' THEN 1
                    WHEN 'MEDIUM' THEN 2
                    ELSE 3
                END ASC
            "#,
        )?;

        let schedules = stmt
            .query_map([], map_schedule_row)?
            .collect::<SqliteResult<Vec<_>>>()?;
        Ok(schedules)
    }

    /// 按ID查询维护计划
    pub fn find_by_id(&self, schedule_id: i64) -> RepositoryResult<Option<MaintenanceSchedule>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT id, equipment_name, equipment_type, scheduled_date,
                   priority, status, estimated_hours, description,
                   created_at, completed_at, notes
            FROM maintenance_schedule
            WHERE id = ?1
            "#,
        )?;

        let result = stmt.query_row(params![schedule_id], map_schedule_row);
        match result {
            Ok(schedule) => Ok(Some(schedule)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// 更新计划状态
    ///
    /// # 参数
    /// - schedule_id: 计划ID
    /// - status: 新状态
    /// - completed_at: 完成时间（COMPLETED 时由调用方传入）
    ///
    /// # 返回
    /// - Ok(()): 更新成功
    /// - Err(NotFound): 计划不存在
    pub fn update_status(
        &self,
        schedule_id: i64,
        status: MaintenanceStatus,
        completed_at: Option<NaiveDateTime>,
    ) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        let updated = conn.execute(
            "UPDATE maintenance_schedule SET status = ?2, completed_at = ?3 WHERE id = ?1",
            params![
                schedule_id,
                status.as_str(),
                completed_at.map(|t| t.format(TS_FMT).to_string()),
            ],
        )?;

        if updated == 0 {
            return Err(RepositoryError::NotFound {
                entity: "MaintenanceSchedule".to_string(),
                id: schedule_id.to_string(),
            });
        }
        Ok(())
    }
}

// ==========================================
// 行映射辅助函数
// ==========================================

fn map_schedule_row(row: &Row<'_>) -> SqliteResult<MaintenanceSchedule> {
    let priority: String = row.get(4)?;
    let status: String = row.get(5)?;

    Ok(MaintenanceSchedule {
        id: row.get(0)?,
        equipment_name: row.get(1)?,
        equipment_type: row.get(2)?,
        scheduled_date: NaiveDate::parse_from_str(&row.get::<_, String>(3)?, "%Y-%m-%d")
            .unwrap_or_else(|_| NaiveDate::from_ymd_opt(1970, 1, 1).unwrap()),
        priority: MaintenancePriority::parse(&priority),
        status: MaintenanceStatus::parse(&status),
        estimated_hours: row.get(6)?,
        description: row.get(7)?,
        created_at: NaiveDateTime::parse_from_str(&row.get::<_, String>(8)?, TS_FMT)
            .unwrap_or_else(|_| NaiveDateTime::default()),
        completed_at: row
            .get::<_, Option<String>>(9)?
            .and_then(|s| NaiveDateTime::parse_from_str(&s, TS_FMT).ok()),
        notes: row.get(10)?,
    })
}
