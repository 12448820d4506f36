// ==========================================
// 化工设备监测分析系统 - 排名数据仓储
// ==========================================
// 职责: 管理 equipment_ranking 表的数据访问
// 红线: Repository 不含业务逻辑
// 说明: 替换采用单事务 删除全部+插入，外部不可见空窗期;
//       并发导入经由连接锁 + 事务串行化，互不交错
// ==========================================

use crate::db::open_sqlite_connection;
use crate::domain::ranking::EquipmentRanking;
use crate::repository::error::{RepositoryError, RepositoryResult};
use chrono::NaiveDateTime;
use rusqlite::{params, Connection, Result as SqliteResult, Row};
use std::sync::{Arc, Mutex};

/// 时间戳存储格式
const TS_FMT: &str = "%Y-%m-%d %H:%M:%S";

// ==========================================
// RankingRepository - 排名仓储
// ==========================================
pub struct RankingRepository {
    conn: Arc<Mutex<Connection>>,
}

impl RankingRepository {
    /// 创建新的 RankingRepository 实例
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

    /// 整体替换排名集（单事务: 删除全部 + 插入新集）
    ///
    /// # 参数
    /// - rankings: 新排名集（内存中已完整计算）
    ///
    /// # 返回
    /// - Ok(usize): 插入条数
    ///
    /// # 说明
    /// 事务保证两个批次的替换不会交错——一个批次的删除
    /// 不可能清掉另一个批次刚插入的行
    pub fn replace_all(&self, rankings: &[EquipmentRanking]) -> RepositoryResult<usize> {
        let conn = self.get_conn()?;
        let tx = conn.unchecked_transaction()?;

        tx.execute("DELETE FROM equipment_ranking", [])?;

        let mut count = 0;
        for ranking in rankings {
            tx.execute(
                r#"
                INSERT INTO equipment_ranking (
                    equipment_name, equipment_type, overall_score,
                    efficiency_rank, reliability_rank, performance_rank,
                    calculated_at
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
                "#,
                params![
                    ranking.equipment_name,
                    ranking.equipment_type,
                    ranking.overall_score,
                    ranking.efficiency_rank,
                    ranking.reliability_rank,
                    ranking.performance_rank,
                    ranking.calculated_at.format(TS_FMT).to_string(),
                ],
            )?;
            count += 1;
        }

        tx.commit()?;
        Ok(count)
    }

    /// 查询当前排名集（综合评分降序）
    pub fn find_all(&self) -> RepositoryResult<Vec<EquipmentRanking>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT id, equipment_name, equipment_type, overall_score,
                   efficiency_rank, reliability_rank, performance_rank,
                   calculated_at
            FROM equipment_ranking
            ORDER BY efficiency_rank ASC
            "#,
        )?;

        let rankings = stmt
            .query_map([], map_ranking_row)?
            .collect::<SqliteResult<Vec<_>>>()?;
        Ok(rankings)
    }
}

// ==========================================
// 行映射辅助函数
// ==========================================

fn map_ranking_row(row: &Row<'_>) -> SqliteResult<EquipmentRanking> {
    Ok(EquipmentRanking {
        id: row.get(0)?,
        equipment_name: row.get(1)?,
        equipment_type: row.get(2)?,
        overall_score: row.get(3)?,
        efficiency_rank: row.get(4)?,
        reliability_rank: row.get(5)?,
        performance_rank: row.get(6)?,
        calculated_at: NaiveDateTime::parse_from_str(&row.get::<_, String>(7)?, TS_FMT)
            .unwrap_or_else(|_| NaiveDateTime::default()),
    })
}
