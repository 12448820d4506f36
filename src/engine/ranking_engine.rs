// ==========================================
// 化工设备监测分析系统 - 排名引擎
// ==========================================
// 职责: 对当前批次全部记录按健康评分排名
// 规则: 综合评分降序，同分按原始行序（稳定排序），名次 1..n 无间隙
// 红线: 排名集每次导入整体替换，不跨批次累积
// ==========================================

use crate::domain::analytics::HealthScoreEntry;
use crate::domain::ranking::EquipmentRanking;
use chrono::NaiveDateTime;

// ==========================================
// RankingEngine - 排名引擎
// ==========================================
pub struct RankingEngine;

impl RankingEngine {
    /// 计算批次排名
    ///
    /// # 参数
    /// - entries: 批次评分条目（原始行序）
    /// - calculated_at: 计算时间
    ///
    /// # 返回
    /// - Vec<EquipmentRanking>: 按综合评分降序排列
    ///
    /// # 口径
    /// - efficiency_rank: 按综合评分（健康评分）
    /// - performance_rank: 按流量子分
    /// - reliability_rank: 按压力/温度子分均值
    pub fn rank(entries: &[HealthScoreEntry], calculated_at: NaiveDateTime) -> Vec<EquipmentRanking> {
        let efficiency_order = Self::dense_ranks(entries, |e| e.breakdown.health_score);
        let performance_order = Self::dense_ranks(entries, |e| e.breakdown.flowrate_score);
        let reliability_order = Self::dense_ranks(entries, |e| {
            (e.breakdown.pressure_score + e.breakdown.temperature_score) / 2.0
        });

        let mut rankings: Vec<EquipmentRanking> = entries
            .iter()
            .enumerate()
            .map(|(idx, entry)| EquipmentRanking {
                id: 0,
                equipment_name: entry.equipment_name.clone(),
                equipment_type: entry.equipment_type.clone(),
                overall_score: entry.breakdown.health_score,
                efficiency_rank: efficiency_order[idx],
                reliability_rank: reliability_order[idx],
                performance_rank: performance_order[idx],
                calculated_at,
            })
            .collect();

        // 输出按综合评分降序（同分保持原始行序）
        rankings.sort_by(|a, b| a.efficiency_rank.cmp(&b.efficiency_rank));
        rankings
    }

    /// 按给定指标计算每个条目的名次（1..n，同分按原始行序）
    fn dense_ranks<F>(entries: &[HealthScoreEntry], key: F) -> Vec<i32>
    where
        F: Fn(&HealthScoreEntry) -> f64,
    {
        let mut order: Vec<usize> = (0..entries.len()).collect();
        // 稳定排序: 同分保持原始行序
        order.sort_by(|&a, &b| {
            key(&entries[b])
                .partial_cmp(&key(&entries[a]))
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let mut ranks = vec![0i32; entries.len()];
        for (rank_idx, &entry_idx) in order.iter().enumerate() {
            ranks[entry_idx] = (rank_idx + 1) as i32;
        }
        ranks
    }
}
