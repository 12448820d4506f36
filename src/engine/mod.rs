// ==========================================
// 化工设备监测分析系统 - 引擎层
// ==========================================
// 红线: 除编排器外所有引擎均为纯函数 - 无状态、无副作用、无 I/O
// ==========================================

pub mod alert_generator;
pub mod anomaly_detector;
pub mod batch_validator;
pub mod error;
pub mod forecaster;
pub mod health_scorer;
pub mod orchestrator;
pub mod ranking_engine;
pub mod stats_aggregator;

pub use alert_generator::AlertGenerator;
pub use anomaly_detector::AnomalyDetector;
pub use batch_validator::{BatchValidator, REQUIRED_COLUMNS};
pub use error::{EngineError, EngineResult};
pub use forecaster::{TrendForecast, TrendForecaster, FORECAST_HORIZON_DAYS, MIN_HISTORY};
pub use health_scorer::HealthScorer;
pub use orchestrator::{PipelineError, PipelineOrchestrator, PipelineResult};
pub use ranking_engine::RankingEngine;
pub use stats_aggregator::StatsAggregator;
