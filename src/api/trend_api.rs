// ==========================================
// 化工设备监测分析系统 - 历史与对比API
// ==========================================
// 职责: 批次历史查询、设备历史读数、批内设备对比
// 说明: 对比操作以显式 dataset_id 为准，不做隐式"最新批次"查询
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::domain::dataset::{Dataset, EquipmentRecord};
use crate::repository::dataset_repo::DatasetRepository;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// 历史查询默认条数
pub const DEFAULT_HISTORY_LIMIT: usize = 5;

// ==========================================
// EquipmentComparison - 设备对比视图
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquipmentComparison {
    pub equipment_name: String,
    pub equipment_type: String,
    pub flowrate: f64,
    pub pressure: f64,
    pub temperature: f64,
    pub health_score: f64,
}

// ==========================================
// TrendApi - 历史与对比API
// ==========================================
pub struct TrendApi {
    dataset_repo: Arc<DatasetRepository>,
}

impl TrendApi {
    /// 创建新的 TrendApi 实例
    pub fn new(dataset_repo: Arc<DatasetRepository>) -> Self {
        Self { dataset_repo }
    }

    /// 查询最近的批次汇总（按上传时间降序）
    pub fn recent_datasets(&self, limit: usize) -> ApiResult<Vec<Dataset>> {
        Ok(self.dataset_repo.find_recent(limit)?)
    }

    /// 查询单台设备的历史读数（跨批次，按记录时间升序）
    pub fn equipment_history(&self, equipment_name: &str) -> ApiResult<Vec<EquipmentRecord>> {
        Ok(self.dataset_repo.find_history_by_equipment(equipment_name)?)
    }

    /// 对比指定批次内的若干设备
    ///
    /// # 参数
    /// - dataset_id: 批次ID（显式传入）
    /// - equipment_names: 待对比设备名，空切片表示对比批内全部设备
    ///
    /// # 返回
    /// - Ok(Vec<EquipmentComparison>): 按批内原始行序
    /// - Err(NotFound): 批次不存在
    pub fn compare_equipment(
        &self,
        dataset_id: i64,
        equipment_names: &[String],
    ) -> ApiResult<Vec<EquipmentComparison>> {
        if self.dataset_repo.find_by_id(dataset_id)?.is_none() {
            return Err(ApiError::NotFound(format!("批次 id={}", dataset_id)));
        }

        let records = self.dataset_repo.find_records_by_dataset(dataset_id)?;

        Ok(records
            .into_iter()
            .filter(|r| {
                equipment_names.is_empty()
                    || equipment_names.iter().any(|n| n == &r.equipment_name)
            })
            .map(|r| EquipmentComparison {
                equipment_name: r.equipment_name,
                equipment_type: r.equipment_type,
                flowrate: r.flowrate,
                pressure: r.pressure,
                temperature: r.temperature,
                health_score: r.health_score,
            })
            .collect())
    }
}
