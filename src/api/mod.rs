// ==========================================
// 化工设备监测分析系统 - API层
// ==========================================
// 职责: 面向传输层/GUI 的业务接口，持有仓储与引擎实例
// ==========================================

pub mod alert_api;
pub mod error;
pub mod ingest_api;
pub mod maintenance_api;
pub mod ranking_api;
pub mod trend_api;

pub use alert_api::AlertApi;
pub use error::{ApiError, ApiResult};
pub use ingest_api::IngestApi;
pub use maintenance_api::MaintenanceApi;
pub use ranking_api::RankingApi;
pub use trend_api::{EquipmentComparison, TrendApi, DEFAULT_HISTORY_LIMIT};
