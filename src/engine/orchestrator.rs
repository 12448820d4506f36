// ==========================================
// 化工设备监测分析系统 - 导入管线编排器
// ==========================================
// 职责: 串联 校验 → 评分 → 落库 → 统计/异常 → 告警 → 排名替换 → 趋势预测
// 红线: 编排器是唯一接触仓储的分析组件; 校验失败时不得有任何持久化
// ==========================================

use crate::config::bands::BandConfig;
use crate::domain::alert::EquipmentAlert;
use crate::domain::analytics::{
    AdvancedAnalytics, HealthScoreEntry, IngestSummary, TypeEfficiency,
};
use crate::domain::dataset::{Dataset, EquipmentRecord};
use crate::domain::SensorReading;
use crate::engine::alert_generator::AlertGenerator;
use crate::engine::anomaly_detector::AnomalyDetector;
use crate::engine::batch_validator::BatchValidator;
use crate::engine::error::EngineError;
use crate::engine::forecaster::TrendForecaster;
use crate::engine::health_scorer::HealthScorer;
use crate::engine::ranking_engine::RankingEngine;
use crate::engine::stats_aggregator::StatsAggregator;
use crate::repository::error::RepositoryError;
use crate::repository::{AlertRepository, DatasetRepository, RankingRepository};
use chrono::NaiveDateTime;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

// ==========================================
// PipelineError - 管线错误
// ==========================================
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

pub type PipelineResult<T> = Result<T, PipelineError>;

// ==========================================
// PipelineOrchestrator - 管线编排器
// ==========================================
pub struct PipelineOrchestrator {
    dataset_repo: Arc<DatasetRepository>,
    alert_repo: Arc<AlertRepository>,
    ranking_repo: Arc<RankingRepository>,
    config: BandConfig,
}

impl PipelineOrchestrator {
    /// 创建新的 PipelineOrchestrator 实例
    pub fn new(
        dataset_repo: Arc<DatasetRepository>,
        alert_repo: Arc<AlertRepository>,
        ranking_repo: Arc<RankingRepository>,
        config: BandConfig,
    ) -> Self {
        Self {
            dataset_repo,
            alert_repo,
            ranking_repo,
            config,
        }
    }

    /// 导入一个批次并产出分析结果
    ///
    /// # 参数
    /// - headers: 批次表头
    /// - rows: 原始字符串行
    /// - file_name: 来源文件名（可选，记入 Dataset）
    /// - now: 导入时刻（显式传入，测试无需真实时钟；预测基准日取 now.date()）
    ///
    /// # 返回
    /// - Ok(IngestSummary): 批次汇总 + 结构化分析载荷
    /// - Err(Engine): 校验/解析失败（此时保证无任何持久化）
    /// - Err(Repository): 数据库错误
    ///
    /// # 顺序
    /// 校验 → 评分 → 落库(批次+记录, 单事务) → 统计/异常(仅报告) →
    /// 阈值告警落库 → 排名事务替换 → 按设备趋势预测(预测告警落库)
    pub fn ingest(
        &self,
        headers: &[String],
        rows: &[HashMap<String, String>],
        file_name: Option<String>,
        now: NaiveDateTime,
    ) -> PipelineResult<IngestSummary> {
        let run_id = Uuid::new_v4();
        tracing::info!(%run_id, rows = rows.len(), "开始导入批次");

        // ===== 阶段 1: 校验（快速失败，此前无持久化）=====
        let readings = BatchValidator::validate(headers, rows)?;

        // ===== 阶段 2: 评分 =====
        let entries: Vec<HealthScoreEntry> = readings
            .iter()
            .map(|r| HealthScoreEntry {
                equipment_name: r.equipment_name.clone(),
                equipment_type: r.equipment_type.clone(),
                breakdown: HealthScorer::score(r, &self.config),
            })
            .collect();

        // ===== 阶段 3: 落库（批次 + 记录，单事务）=====
        let total = readings.len() as i64;
        let avg_flowrate = readings.iter().map(|r| r.flowrate).sum::<f64>() / total as f64;
        let avg_pressure = readings.iter().map(|r| r.pressure).sum::<f64>() / total as f64;
        let avg_temperature = readings.iter().map(|r| r.temperature).sum::<f64>() / total as f64;

        let dataset = Dataset {
            id: 0,
            uploaded_at: now,
            total_records: total,
            avg_flowrate,
            avg_pressure,
            avg_temperature,
            file_name,
            notes: None,
        };
        let records: Vec<EquipmentRecord> = readings
            .iter()
            .zip(entries.iter())
            .map(|(r, e)| EquipmentRecord {
                id: 0,
                dataset_id: 0,
                equipment_name: r.equipment_name.clone(),
                equipment_type: r.equipment_type.clone(),
                flowrate: r.flowrate,
                pressure: r.pressure,
                temperature: r.temperature,
                health_score: e.breakdown.health_score,
                // 单条记录上效率指数等同健康评分
                efficiency_index: e.breakdown.health_score,
                recorded_at: now,
            })
            .collect();

        let dataset_id = self.dataset_repo.create_with_records(&dataset, &records)?;
        tracing::info!(%run_id, dataset_id, "批次落库完成");

        // ===== 阶段 4: 统计与异常（仅报告，不落库）=====
        // 批次已通过非空校验，统计必然存在
        let statistics = StatsAggregator::compute(&readings).ok_or(EngineError::EmptyBatch)?;
        let correlations = StatsAggregator::correlations(&readings);
        let anomalies = AnomalyDetector::detect(&readings, &statistics);

        // ===== 阶段 5: 阈值告警 =====
        let mut alerts = AlertGenerator::generate(&readings, &self.config, now);
        if !alerts.is_empty() {
            self.alert_repo.insert_batch(&alerts)?;
            tracing::info!(%run_id, count = alerts.len(), "阈值告警已落库");
        }

        // ===== 阶段 6: 排名整体替换（单事务，无空窗期）=====
        let rankings = RankingEngine::rank(&entries, now);
        self.ranking_repo.replace_all(&rankings)?;

        // ===== 阶段 7: 趋势预测（按批内去重后的设备名）=====
        let predictive = self.run_forecasts(&readings, now)?;
        if !predictive.is_empty() {
            self.alert_repo.insert_batch(&predictive)?;
            tracing::info!(%run_id, count = predictive.len(), "预测告警已落库");
        }
        alerts.extend(predictive);

        // ===== 汇总输出 =====
        let summary = IngestSummary {
            dataset_id,
            total_records: total,
            avg_flowrate,
            avg_pressure,
            avg_temperature,
            type_distribution: Self::type_distribution(&readings),
            advanced_analytics: AdvancedAnalytics {
                statistics,
                health_scores: entries.clone(),
                anomalies,
                efficiency_metrics: Self::efficiency_metrics(&entries),
                correlations,
            },
            alerts,
        };

        tracing::info!(%run_id, dataset_id, "导入批次完成");
        Ok(summary)
    }

    /// 对批内每台设备运行趋势预测
    ///
    /// # 说明
    /// 历史含本次刚落库的记录; 不足 5 条的设备直接跳过（非错误）
    fn run_forecasts(
        &self,
        readings: &[SensorReading],
        now: NaiveDateTime,
    ) -> PipelineResult<Vec<EquipmentAlert>> {
        let mut seen = std::collections::HashSet::new();
        let mut alerts = Vec::new();

        for reading in readings {
            if !seen.insert(reading.equipment_name.clone()) {
                continue;
            }

            let history: Vec<f64> = self
                .dataset_repo
                .find_history_by_equipment(&reading.equipment_name)?
                .iter()
                .map(|r| r.flowrate)
                .collect();

            if let Some(forecast) = TrendForecaster::forecast(
                &reading.equipment_name,
                &history,
                &self.config,
                now.date(),
            ) {
                tracing::warn!(
                    equipment = %forecast.equipment_name,
                    date = %forecast.predicted_failure_date,
                    confidence = forecast.confidence_score,
                    "预测到未来阈值突破"
                );
                alerts.push(TrendForecaster::to_alert(&forecast, now));
            }
        }

        Ok(alerts)
    }

    /// 设备类型分布
    fn type_distribution(readings: &[SensorReading]) -> BTreeMap<String, i64> {
        let mut distribution = BTreeMap::new();
        for reading in readings {
            *distribution.entry(reading.equipment_type.clone()).or_insert(0) += 1;
        }
        distribution
    }

    /// 按设备类型聚合效率指标
    ///
    /// # 规则
    /// - 类型效率 = 该类型效率指数均值
    /// - 分类: ≥90 Excellent / ≥75 Good / ≥50 Fair / 其余 Poor
    fn efficiency_metrics(entries: &[HealthScoreEntry]) -> Vec<TypeEfficiency> {
        let mut grouped: BTreeMap<String, (i64, f64)> = BTreeMap::new();
        for entry in entries {
            let slot = grouped.entry(entry.equipment_type.clone()).or_insert((0, 0.0));
            slot.0 += 1;
            slot.1 += entry.breakdown.health_score;
        }

        grouped
            .into_iter()
            .map(|(equipment_type, (count, sum))| {
                let avg = sum / count as f64;
                TypeEfficiency {
                    equipment_type,
                    record_count: count,
                    avg_efficiency_index: avg,
                    category: Self::efficiency_category(avg).to_string(),
                }
            })
            .collect()
    }

    /// 效率规则分类
    fn efficiency_category(avg: f64) -> &'static str {
        if avg >= 90.0 {
            "Excellent"
        } else if avg >= 75.0 {
            "Good"
        } else if avg >= 50.0 {
            "Fair"
        } else {
            "Poor"
        }
    }
}
