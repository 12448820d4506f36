// ==========================================
// 化工设备监测分析系统 - 批次校验器
// ==========================================
// 职责: 导入前的快速失败门 - 检查必需列齐全、批次非空，
//       并把字符串行转换为类型化读数
// 红线: 校验失败前不得发生任何部分处理或持久化
// ==========================================

use crate::domain::SensorReading;
use crate::engine::error::{EngineError, EngineResult};
use std::collections::HashMap;

/// 必需列（大小写与拼写精确匹配）
pub const REQUIRED_COLUMNS: [&str; 5] =
    ["Equipment Name", "Type", "Flowrate", "Pressure", "Temperature"];

// ==========================================
// BatchValidator - 批次校验器
// ==========================================
pub struct BatchValidator;

impl BatchValidator {
    /// 校验表头列集合
    ///
    /// # 参数
    /// - headers: 批次表头
    ///
    /// # 返回
    /// - Ok(()): 必需列齐全
    /// - Err(MissingColumns): 列出全部缺失列（不只第一个）
    pub fn validate_columns(headers: &[String]) -> EngineResult<()> {
        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|col| !headers.iter().any(|h| h == *col))
            .map(|col| col.to_string())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(EngineError::MissingColumns {
                missing_columns: missing,
            })
        }
    }

    /// 校验并转换整个批次
    ///
    /// # 参数
    /// - headers: 批次表头
    /// - rows: 原始字符串行（列名 → 值）
    ///
    /// # 返回
    /// - Ok(Vec<SensorReading>): 类型化读数，保持原始行序
    /// - Err(MissingColumns): 缺列
    /// - Err(EmptyBatch): 无数据行
    /// - Err(MalformedValue): 数值字段无法解析（行号从 1 起）
    pub fn validate(
        headers: &[String],
        rows: &[HashMap<String, String>],
    ) -> EngineResult<Vec<SensorReading>> {
        Self::validate_columns(headers)?;

        if rows.is_empty() {
            return Err(EngineError::EmptyBatch);
        }

        let mut readings = Vec::with_capacity(rows.len());
        for (idx, row) in rows.iter().enumerate() {
            readings.push(Self::parse_row(idx + 1, row)?);
        }

        Ok(readings)
    }

    /// 转换单行
    fn parse_row(row_number: usize, row: &HashMap<String, String>) -> EngineResult<SensorReading> {
        let equipment_name = Self::field(row_number, row, "Equipment Name")?;
        let equipment_type = Self::field(row_number, row, "Type")?;
        let flowrate = Self::numeric_field(row_number, row, "Flowrate")?;
        let pressure = Self::numeric_field(row_number, row, "Pressure")?;
        let temperature = Self::numeric_field(row_number, row, "Temperature")?;

        Ok(SensorReading {
            equipment_name,
            equipment_type,
            flowrate,
            pressure,
            temperature,
        })
    }

    /// 取文本字段（缺失视为解析失败）
    fn field(
        row_number: usize,
        row: &HashMap<String, String>,
        name: &str,
    ) -> EngineResult<String> {
        match row.get(name) {
            Some(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
            other => Err(EngineError::MalformedValue {
                row: row_number,
                field: name.to_string(),
                raw: other.cloned().unwrap_or_default(),
            }),
        }
    }

    /// 取数值字段
    fn numeric_field(
        row_number: usize,
        row: &HashMap<String, String>,
        name: &str,
    ) -> EngineResult<f64> {
        let raw = Self::field(row_number, row, name)?;
        raw.parse::<f64>().map_err(|_| EngineError::MalformedValue {
            row: row_number,
            field: name.to_string(),
            raw,
        })
    }
}
