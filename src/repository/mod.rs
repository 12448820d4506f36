// ==========================================
// 化工设备监测分析系统 - 数据仓储层
// ==========================================
// 红线: Repository 不含业务逻辑，只负责数据访问
// ==========================================

pub mod alert_repo;
pub mod dataset_repo;
pub mod error;
pub mod maintenance_repo;
pub mod ranking_repo;

pub use alert_repo::{AlertRepository, ALERT_PAGE_SIZE};
pub use dataset_repo::DatasetRepository;
pub use error::{RepositoryError, RepositoryResult};
pub use maintenance_repo::MaintenanceRepository;
pub use ranking_repo::RankingRepository;
