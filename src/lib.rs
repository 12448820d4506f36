// ==========================================
// 化工设备监测分析系统 - 核心库
// ==========================================
// 技术栈: Rust + SQLite
// 系统定位: 设备传感器批次分析管线 (健康评分/统计/异常/告警/排名/预测)
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 配置层 - 参数区间配置
pub mod config;

// 引擎层 - 分析算法
pub mod engine;

// 数据仓储层 - 数据访问
pub mod repository;

// 导入层 - 外部数据
pub mod importer;

// API 层 - 业务接口
pub mod api;

// 数据库基础设施（连接初始化/PRAGMA 统一/建表）
pub mod db;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{AlertType, AnomalySeverity, MaintenancePriority, MaintenanceStatus, Parameter};

// 领域实体
pub use domain::{
    Dataset, EquipmentAlert, EquipmentRanking, EquipmentRecord, MaintenanceSchedule, SensorReading,
};

// 分析结果
pub use domain::analytics::{
    AdvancedAnalytics, Anomaly, BatchStatistics, CorrelationSet, HealthBreakdown, IngestSummary,
    ParameterStats, TypeEfficiency,
};

// 配置
pub use config::bands::{BandConfig, ParameterBand, ScoreWeights};

// 引擎
pub use engine::{
    AlertGenerator, AnomalyDetector, BatchValidator, HealthScorer, PipelineOrchestrator,
    RankingEngine, StatsAggregator, TrendForecaster,
};

// API
pub use api::{AlertApi, IngestApi, MaintenanceApi, RankingApi, TrendApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "化工设备监测分析系统";

// 数据库版本
pub const DB_VERSION: &str = "v0.1";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
