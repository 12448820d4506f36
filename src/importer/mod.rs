// ==========================================
// 化工设备监测分析系统 - 导入层
// ==========================================

pub mod csv_parser;
pub mod error;

pub use csv_parser::{CsvParser, ParsedBatch};
pub use error::{ImportError, ImportResult};
