// ==========================================
// 化工设备监测分析系统 - CSV 文件解析器
// ==========================================
// 职责: 把 CSV 文件读成 表头 + 字符串行，列校验交给批次校验器
// 支持: CSV (.csv)
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use csv::ReaderBuilder;
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

// ==========================================
// ParsedBatch - 解析结果
// ==========================================
/// 一次文件解析的原始输出（未做任何业务校验）
#[derive(Debug, Clone)]
pub struct ParsedBatch {
    pub headers: Vec<String>,                // 表头（去除首尾空白）
    pub rows: Vec<HashMap<String, String>>,  // 数据行（列名 → 值）
}

// ==========================================
// CsvParser - CSV 解析器
// ==========================================
pub struct CsvParser;

impl CsvParser {
    /// 解析 CSV 文件
    ///
    /// # 参数
    /// - file_path: 文件路径（扩展名必须为 .csv）
    ///
    /// # 返回
    /// - Ok(ParsedBatch): 表头 + 数据行（完全空白的行被跳过）
    /// - Err: 文件不存在/格式不支持/解析失败
    pub fn parse(file_path: &Path) -> ImportResult<ParsedBatch> {
        if !file_path.exists() {
            return Err(ImportError::FileNotFound(file_path.display().to_string()));
        }

        if let Some(ext) = file_path.extension() {
            if ext != "csv" {
                return Err(ImportError::UnsupportedFormat(
                    ext.to_string_lossy().to_string(),
                ));
            }
        }

        let file = File::open(file_path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // 允许行长度不一致
            .from_reader(file);

        // 读取表头
        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| ImportError::CsvParseError(e.to_string()))?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        // 读取所有行
        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result.map_err(|e| ImportError::CsvParseError(e.to_string()))?;
            let mut row_map = HashMap::new();

            for (col_idx, value) in record.iter().enumerate() {
                if let Some(header) = headers.get(col_idx) {
                    row_map.insert(header.clone(), value.trim().to_string());
                }
            }

            // 跳过完全空白的行
            if row_map.values().all(|v| v.is_empty()) {
                continue;
            }

            rows.push(row_map);
        }

        Ok(ParsedBatch { headers, rows })
    }
}
