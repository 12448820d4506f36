// ==========================================
// 化工设备监测分析系统 - 告警API
// ==========================================
// 职责: 告警查询（可过滤，固定页大小）与处置
// 规则: 处置是幂等的单条更新，互相之间无顺序依赖
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::domain::alert::EquipmentAlert;
use crate::repository::alert_repo::AlertRepository;
use crate::repository::error::RepositoryError;
use chrono::{NaiveDateTime, Utc};
use std::sync::Arc;

// ==========================================
// AlertApi - 告警API
// ==========================================
pub struct AlertApi {
    alert_repo: Arc<AlertRepository>,
}

impl AlertApi {
    /// 创建新的 AlertApi 实例
    pub fn new(alert_repo: Arc<AlertRepository>) -> Self {
        Self { alert_repo }
    }

    /// 查询告警
    ///
    /// # 参数
    /// - resolved: Some(true/false) 按处置状态过滤，None 返回全部
    ///
    /// # 返回
    /// - Vec<EquipmentAlert>: 按创建时间降序，最多 50 条
    pub fn list_alerts(&self, resolved: Option<bool>) -> ApiResult<Vec<EquipmentAlert>> {
        Ok(self.alert_repo.find_filtered(resolved)?)
    }

    /// 处置一条告警（幂等）
    ///
    /// # 参数
    /// - alert_id: 告警ID
    ///
    /// # 返回
    /// - Ok(true): 本次调用完成处置，resolved_at 已写入
    /// - Ok(false): 此前已处置，本次无操作（状态不变）
    /// - Err(NotFound): 告警不存在
    pub fn resolve_alert(&self, alert_id: i64) -> ApiResult<bool> {
        self.resolve_alert_at(alert_id, Utc::now().naive_utc())
    }

    /// 处置一条告警（显式时间，测试入口）
    pub fn resolve_alert_at(&self, alert_id: i64, resolved_at: NaiveDateTime) -> ApiResult<bool> {
        match self.alert_repo.resolve(alert_id, resolved_at) {
            Ok(flipped) => {
                if flipped {
                    tracing::info!(alert_id, "告警已处置");
                }
                Ok(flipped)
            }
            Err(RepositoryError::NotFound { .. }) => {
                Err(ApiError::NotFound(format!("告警 id={}", alert_id)))
            }
            Err(e) => Err(e.into()),
        }
    }
}
