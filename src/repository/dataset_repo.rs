// ==========================================
// 化工设备监测分析系统 - 批次数据仓储
// ==========================================
// 职责: 管理 dataset / equipment_record 表的数据访问
// 红线: Repository 不含业务逻辑
// 说明: 批次 + 记录在同一事务内写入（全有或全无）
// ==========================================

use crate::db::open_sqlite_connection;
use crate::domain::dataset::{Dataset, EquipmentRecord};
use crate::repository::error::{RepositoryError, RepositoryResult};
use chrono::NaiveDateTime;
use rusqlite::{params, Connection, Result as SqliteResult, Row};
use std::sync::{Arc, Mutex};

/// 时间戳存储格式
const TS_FMT: &str = "%Y-%m-%d %H:%M:%S";

// ==========================================
// DatasetRepository - 批次仓储
// ==========================================
pub struct DatasetRepository {
    conn: Arc<Mutex<Connection>>,
}

impl DatasetRepository {
    /// 创建新的 DatasetRepository 实例
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

    /// 获取数据库连接
    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// 创建批次及其全部记录（单事务）
    ///
    /// # 参数
    /// - dataset: 批次汇总（id 字段被忽略）
    /// - records: 批次记录（id / dataset_id 字段被忽略）
    ///
    /// # 返回
    /// - Ok(i64): 新批次ID
    /// - Err: 数据库错误（事务整体回滚）
    pub fn create_with_records(
        &self,
        dataset: &Dataset,
        records: &[EquipmentRecord],
    ) -> RepositoryResult<i64> {
        let conn = self.get_conn()?;
        let tx = conn.unchecked_transaction()?;

        tx.execute(
            r#"
            INSERT INTO dataset (
                uploaded_at, total_records,
                avg_flowrate, avg_pressure, avg_temperature,
                file_name, notes
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
            params![
                dataset.uploaded_at.format(TS_FMT).to_string(),
                dataset.total_records,
                dataset.avg_flowrate,
                dataset.avg_pressure,
                dataset.avg_temperature,
                dataset.file_name,
                dataset.notes,
            ],
        )?;
        let dataset_id = tx.last_insert_rowid();

        for record in records {
            tx.execute(
                r#"
                INSERT INTO equipment_record (
                    dataset_id, equipment_name, equipment_type,
                    flowrate, pressure, temperature,
                    health_score, efficiency_index, recorded_at
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
                "#,
                params![
                    dataset_id,
                    record.equipment_name,
                    record.equipment_type,
                    record.flowrate,
                    record.pressure,
                    record.temperature,
                    record.health_score,
                    record.efficiency_index,
                    record.recorded_at.format(TS_FMT).to_string(),
                ],
            )?;
        }

        tx.commit()?;
        Ok(dataset_id)
    }

    /// 按ID查询批次
    pub fn find_by_id(&self, dataset_id: i64) -> RepositoryResult<Option<Dataset>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT id, uploaded_at, total_records,
                   avg_flowrate, avg_pressure, avg_temperature,
                   file_name, notes
            FROM dataset
            WHERE id = ?1
            "#,
        )?;

        let result = stmt.query_row(params![dataset_id], map_dataset_row);
        match result {
            Ok(dataset) => Ok(Some(dataset)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// 查询最近的批次（按上传时间降序）
    ///
    /// # 参数
    /// - limit: 返回条数上限
    pub fn find_recent(&self, limit: usize) -> RepositoryResult<Vec<Dataset>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT id, uploaded_at, total_records,
                   avg_flowrate, avg_pressure, avg_temperature,
                   file_name, notes
            FROM dataset
            ORDER BY uploaded_at DESC, id DESC
            LIMIT ?1
            "#,
        )?;

        let datasets = stmt
            .query_map(params![limit as i64], map_dataset_row)?
            .collect::<SqliteResult<Vec<_>>>()?;
        Ok(datasets)
    }

    /// 查询某批次的全部记录（按ID升序 = 原始行序）
    pub fn find_records_by_dataset(
        &self,
        dataset_id: i64,
    ) -> RepositoryResult<Vec<EquipmentRecord>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT id, dataset_id, equipment_name, equipment_type,
                   flowrate, pressure, temperature,
                   health_score, efficiency_index, recorded_at
            FROM equipment_record
            WHERE dataset_id = ?1
            ORDER BY id ASC
            "#,
        )?;

        let records = stmt
            .query_map(params![dataset_id], map_record_row)?
            .collect::<SqliteResult<Vec<_>>>()?;
        Ok(records)
    }

    /// 查询设备的全部历史记录（跨批次，按记录时间升序）
    ///
    /// # 用途
    /// - 趋势预测器的历史输入
    pub fn find_history_by_equipment(
        &self,
        equipment_name: &str,
    ) -> RepositoryResult<Vec<EquipmentRecord>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT id, dataset_id, equipment_name, equipment_type,
                   flowrate, pressure, temperature,
                   health_score, efficiency_index, recorded_at
            FROM equipment_record
            WHERE equipment_name = ?1
            ORDER BY recorded_at ASC, id ASC
            "#,
        )?;

        let records = stmt
            .query_map(params![equipment_name], map_record_row)?
            .collect::<SqliteResult<Vec<_>>>()?;
        Ok(records)
    }

    /// 删除批次（记录级联删除）
    ///
    /// # 返回
    /// - Ok(true): 已删除
    /// - Ok(false): 批次不存在
    pub fn delete(&self, dataset_id: i64) -> RepositoryResult<bool> {
        let conn = self.get_conn()?;
        let count = conn.execute("DELETE FROM dataset WHERE id = ?1", params![dataset_id])?;
        Ok(count > 0)
    }
}

// ==========================================
// 行映射辅助函数
// ==========================================

fn map_dataset_row(row: &Row<'_>) -> SqliteResult<Dataset> {
    Ok(Dataset {
        id: row.get(0)?,
        uploaded_at: parse_ts(&row.get::<_, String>(1)?),
        total_records: row.get(2)?,
        avg_flowrate: row.get(3)?,
        avg_pressure: row.get(4)?,
        avg_temperature: row.get(5)?,
        file_name: row.get(6)?,
        notes: row.get(7)?,
    })
}

fn map_record_row(row: &Row<'_>) -> SqliteResult<EquipmentRecord> {
    Ok(EquipmentRecord {
        id: row.get(0)?,
        dataset_id: row.get(1)?,
        equipment_name: row.get(2)?,
        equipment_type: row.get(3)?,
        flowrate: row.get(4)?,
        pressure: row.get(5)?,
        temperature: row.get(6)?,
        health_score: row.get(7)?,
        efficiency_index: row.get(8)?,
        recorded_at: parse_ts(&row.get::<_, String>(9)?),
    })
}

/// 解析存储时间戳（失败回落到纪元零点）
fn parse_ts(raw: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(raw, TS_FMT).unwrap_or_else(|_| NaiveDateTime::default())
}
