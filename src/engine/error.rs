// ==========================================
// 化工设备监测分析系统 - 引擎层错误类型
// ==========================================
// 工具: thiserror 派生宏
// 红线: 缺失列必须全部列出，不允许只报第一个
// ==========================================

use thiserror::Error;

/// 引擎层错误类型
#[derive(Error, Debug)]
pub enum EngineError {
    // ===== 输入校验错误 =====
    #[error("缺失必需列: {}", missing_columns.join(", "))]
    MissingColumns { missing_columns: Vec<String> },

    #[error("空批次: 没有任何数据行")]
    EmptyBatch,

    // ===== 数据处理错误 =====
    #[error("字段值无法解析 (row={row}, field={field}): {raw}")]
    MalformedValue {
        row: usize,
        field: String,
        raw: String,
    },
}

/// Result 类型别名
pub type EngineResult<T> = Result<T, EngineError>;
