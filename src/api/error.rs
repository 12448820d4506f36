// ==========================================
// 化工设备监测分析系统 - API层错误类型
// ==========================================
// 职责: 把引擎/仓储错误转换为面向调用方的错误分类
// 红线: 校验错误必须带全部缺失字段; "未找到"与校验错误不得混同;
//       意外处理失败对外只给通用结果，细节进日志
// ==========================================

use crate::engine::error::EngineError;
use crate::engine::orchestrator::PipelineError;
use crate::importer::error::ImportError;
use crate::repository::error::RepositoryError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ===== 输入校验错误 =====
    #[error("数据验证失败: 缺失必需列 [{}]", missing_columns.join(", "))]
    MissingColumns { missing_columns: Vec<String> },

    #[error("数据验证失败: 批次不含任何数据行")]
    EmptyBatch,

    #[error("无效输入: {0}")]
    InvalidInput(String),

    // ===== 资源错误 =====
    #[error("资源未找到: {0}")]
    NotFound(String),

    // ===== 处理错误 =====
    #[error("批次处理失败（详情见服务日志）")]
    ProcessingError,

    #[error("数据库错误: {0}")]
    DatabaseError(String),

    #[error("文件导入失败: {0}")]
    ImportError(String),
}

impl From<PipelineError> for ApiError {
    fn from(err: PipelineError) -> Self {
        match err {
            PipelineError::Engine(e) => e.into(),
            PipelineError::Repository(e) => e.into(),
        }
    }
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::MissingColumns { missing_columns } => {
                ApiError::MissingColumns { missing_columns }
            }
            EngineError::EmptyBatch => ApiError::EmptyBatch,
            EngineError::MalformedValue { .. } => {
                // 内部细节只进日志，不外泄
                tracing::error!(error = %err, "批次处理出现意外失败");
                ApiError::ProcessingError
            }
        }
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { entity, id } => {
                ApiError::NotFound(format!("{} id={}", entity, id))
            }
            other => ApiError::DatabaseError(other.to_string()),
        }
    }
}

impl From<ImportError> for ApiError {
    fn from(err: ImportError) -> Self {
        ApiError::ImportError(err.to_string())
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
