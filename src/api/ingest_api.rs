// ==========================================
// 化工设备监测分析系统 - 批次导入API
// ==========================================
// 职责: 文件解析 + 管线编排的对外入口
// ==========================================

use crate::api::error::ApiResult;
use crate::domain::analytics::IngestSummary;
use crate::engine::orchestrator::PipelineOrchestrator;
use crate::importer::csv_parser::CsvParser;
use chrono::{NaiveDateTime, Utc};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

// ==========================================
// IngestApi - 批次导入API
// ==========================================
pub struct IngestApi {
    orchestrator: Arc<PipelineOrchestrator>,
}

impl IngestApi {
    /// 创建新的 IngestApi 实例
    pub fn new(orchestrator: Arc<PipelineOrchestrator>) -> Self {
        Self { orchestrator }
    }

    /// 从 CSV 文件导入一个批次
    ///
    /// # 参数
    /// - file_path: CSV 文件路径
    ///
    /// # 返回
    /// - Ok(IngestSummary): 批次汇总 + 分析载荷
    /// - Err: 解析/校验/处理失败（校验失败时无任何持久化）
    pub fn ingest_csv(&self, file_path: &Path) -> ApiResult<IngestSummary> {
        let batch = CsvParser::parse(file_path)?;
        let file_name = file_path
            .file_name()
            .map(|n| n.to_string_lossy().to_string());

        let summary = self.orchestrator.ingest(
            &batch.headers,
            &batch.rows,
            file_name,
            Utc::now().naive_utc(),
        )?;
        Ok(summary)
    }

    /// 直接导入已解析的行（传输层/测试入口）
    ///
    /// # 参数
    /// - headers: 批次表头
    /// - rows: 原始字符串行
    /// - file_name: 来源文件名（可选）
    /// - now: 导入时刻（显式传入）
    pub fn ingest_rows(
        &self,
        headers: &[String],
        rows: &[HashMap<String, String>],
        file_name: Option<String>,
        now: NaiveDateTime,
    ) -> ApiResult<IngestSummary> {
        let summary = self.orchestrator.ingest(headers, rows, file_name, now)?;
        Ok(summary)
    }
}
