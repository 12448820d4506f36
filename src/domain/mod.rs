// ==========================================
// 化工设备监测分析系统 - 领域层
// ==========================================

pub mod alert;
pub mod analytics;
pub mod dataset;
pub mod maintenance;
pub mod ranking;
pub mod types;

pub use alert::EquipmentAlert;
pub use dataset::{Dataset, EquipmentRecord, SensorReading};
pub use maintenance::MaintenanceSchedule;
pub use ranking::{EquipmentRanking, RankedEquipment};
