// ==========================================
// 化工设备监测分析系统 - 排名API
// ==========================================
// 职责: 当前排名集查询（只反映最近一次导入批次）
// ==========================================

use crate::api::error::ApiResult;
use crate::domain::ranking::RankedEquipment;
use crate::repository::ranking_repo::RankingRepository;
use std::sync::Arc;

// ==========================================
// RankingApi - 排名API
// ==========================================
pub struct RankingApi {
    ranking_repo: Arc<RankingRepository>,
}

impl RankingApi {
    /// 创建新的 RankingApi 实例
    pub fn new(ranking_repo: Arc<RankingRepository>) -> Self {
        Self { ranking_repo }
    }

    /// 查询当前排名（综合评分降序，rank 为 1..n 无间隙）
    pub fn current_rankings(&self) -> ApiResult<Vec<RankedEquipment>> {
        let rankings = self.ranking_repo.find_all()?;

        Ok(rankings
            .into_iter()
            .enumerate()
            .map(|(idx, r)| RankedEquipment {
                rank: (idx + 1) as i32,
                equipment_name: r.equipment_name,
                equipment_type: r.equipment_type,
                overall_score: r.overall_score,
                efficiency_rank: r.efficiency_rank,
                reliability_rank: r.reliability_rank,
                performance_rank: r.performance_rank,
            })
            .collect())
    }
}
