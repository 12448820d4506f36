// ==========================================
// 化工设备监测分析系统 - 维护计划API
// ==========================================
// 职责: 维护排期的创建/查询/状态更新（无分析逻辑）
// 红线: 更新不存在的计划返回"未找到"，不得与校验错误混同
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::domain::maintenance::MaintenanceSchedule;
use crate::domain::types::{MaintenancePriority, MaintenanceStatus};
use crate::repository::error::RepositoryError;
use crate::repository::maintenance_repo::MaintenanceRepository;
use chrono::{NaiveDate, NaiveDateTime, Utc};
use std::sync::Arc;

// ==========================================
// MaintenanceApi - 维护计划API
// ==========================================
pub struct MaintenanceApi {
    maintenance_repo: Arc<MaintenanceRepository>,
}

impl MaintenanceApi {
    /// 创建新的 MaintenanceApi 实例
    pub fn new(maintenance_repo: Arc<MaintenanceRepository>) -> Self {
        Self { maintenance_repo }
    }

    /// 创建维护计划
    ///
    /// # 返回
    /// - Ok(i64): 新计划ID
    /// - Err(InvalidInput): 设备名/描述为空或预计工时非正数
    pub fn create_schedule(
        &self,
        equipment_name: &str,
        equipment_type: &str,
        scheduled_date: NaiveDate,
        priority: MaintenancePriority,
        estimated_hours: f64,
        description: &str,
    ) -> ApiResult<i64> {
        if equipment_name.trim().is_empty() {
            return Err(ApiError::InvalidInput("设备名称不能为空".to_string()));
        }
        if description.trim().is_empty() {
            return Err(ApiError::InvalidInput("工作描述不能为空".to_string()));
        }
        if estimated_hours <= 0.0 {
            return Err(ApiError::InvalidInput(format!(
                "预计工时必须为正数: {}",
                estimated_hours
            )));
        }

        let schedule = MaintenanceSchedule {
            id: 0,
            equipment_name: equipment_name.trim().to_string(),
            equipment_type: equipment_type.trim().to_string(),
            scheduled_date,
            priority,
            status: MaintenanceStatus::Scheduled,
            estimated_hours,
            description: description.trim().to_string(),
            created_at: Utc::now().naive_utc(),
            completed_at: None,
            notes: None,
        };

        let id = self.maintenance_repo.create(&schedule)?;
        tracing::info!(schedule_id = id, equipment = %schedule.equipment_name, "维护计划已创建");
        Ok(id)
    }

    /// 查询全部维护计划
    pub fn list_schedules(&self) -> ApiResult<Vec<MaintenanceSchedule>> {
        Ok(self.maintenance_repo.find_all()?)
    }

    /// 更新计划状态
    ///
    /// # 说明
    /// 状态变更为 COMPLETED 时写入完成时间
    pub fn update_status(&self, schedule_id: i64, status: MaintenanceStatus) -> ApiResult<()> {
        self.update_status_at(schedule_id, status, Utc::now().naive_utc())
    }

    /// 更新计划状态（显式时间，测试入口）
    pub fn update_status_at(
        &self,
        schedule_id: i64,
        status: MaintenanceStatus,
        now: NaiveDateTime,
    ) -> ApiResult<()> {
        let completed_at = match status {
            MaintenanceStatus::Completed => Some(now),
            _ => None,
        };

        match self.maintenance_repo.update_status(schedule_id, status, completed_at) {
            Ok(()) => Ok(()),
            Err(RepositoryError::NotFound { .. }) => {
                Err(ApiError::NotFound(format!("维护计划 id={}", schedule_id)))
            }
            Err(e) => Err(e.into()),
        }
    }
}
