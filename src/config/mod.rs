// ==========================================
// 化工设备监测分析系统 - 配置层
// ==========================================

pub mod bands;

pub use bands::{BandConfig, ParameterBand, ScoreWeights};
