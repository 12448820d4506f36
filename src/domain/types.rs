// ==========================================
// 化工设备监测分析系统 - 领域类型定义
// ==========================================
// 红线: 告警阈值带互不歧义 (CRITICAL 严格位于 WARNING 带之外)
// 序列化格式: SCREAMING_SNAKE_CASE (与数据库一致)
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 告警类型 (Alert Type)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertType {
    Critical,   // 严重: 超出绝对安全带
    Warning,    // 警告: 超出警戒带
    Info,       // 提示
    Predictive, // 预测性: 趋势外推得到的未来风险
}

impl AlertType {
    /// 转换为字符串（用于数据库存储）
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertType::Critical => "CRITICAL",
            AlertType::Warning => "WARNING",
            AlertType::Info => "INFO",
            AlertType::Predictive => "PREDICTIVE",
        }
    }

    /// 从数据库字符串解析
    pub fn parse(s: &str) -> Self {
        match s {
            "CRITICAL" => AlertType::Critical,
            "WARNING" => AlertType::Warning,
            "PREDICTIVE" => AlertType::Predictive,
            _ => AlertType::Info,
        }
    }
}

impl fmt::Display for AlertType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// 监测参数 (Parameter)
// ==========================================
// 三个传感器参数，贯穿评分/统计/告警/预测
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Parameter {
    Flowrate,    // 流量 (L/min)
    Pressure,    // 压力 (bar)
    Temperature, // 温度 (°C)
}

impl Parameter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Parameter::Flowrate => "Flowrate",
            Parameter::Pressure => "Pressure",
            Parameter::Temperature => "Temperature",
        }
    }

    /// 所有监测参数（迭代用）
    pub fn all() -> [Parameter; 3] {
        [Parameter::Flowrate, Parameter::Pressure, Parameter::Temperature]
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// 异常严重程度 (Anomaly Severity)
// ==========================================
// 相对于批次自身统计的偏离程度，与绝对阈值无关
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AnomalySeverity {
    Medium, // 超出 2σ
    High,   // 超出 3σ
}

impl fmt::Display for AnomalySeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnomalySeverity::Medium => write!(f, "Medium"),
            AnomalySeverity::High => write!(f, "High"),
        }
    }
}

// ==========================================
// 维护优先级 (Maintenance Priority)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MaintenancePriority {
    Low,
    Medium,
    High,
    Critical,
}

impl MaintenancePriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            MaintenancePriority::Low => "LOW",
            MaintenancePriority::Medium => "MEDIUM",
            MaintenancePriority::High => "HIGH",
            MaintenancePriority::Critical => "CRITICAL",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "CRITICAL" => MaintenancePriority::Critical,
            "HIGH" => MaintenancePriority::High,
            "MEDIUM" => MaintenancePriority::Medium,
            _ => MaintenancePriority::Low,
        }
    }
}

impl fmt::Display for MaintenancePriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// 维护状态 (Maintenance Status)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MaintenanceStatus {
    Scheduled,  // 已排期
    InProgress, // 进行中
    Completed,  // 已完成
    Cancelled,  // 已取消
}

impl MaintenanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MaintenanceStatus::Scheduled => "SCHEDULED",
            MaintenanceStatus::InProgress => "IN_PROGRESS",
            MaintenanceStatus::Completed => "COMPLETED",
            MaintenanceStatus::Cancelled => "CANCELLED",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "IN_PROGRESS" => MaintenanceStatus::InProgress,
            "COMPLETED" => MaintenanceStatus::Completed,
            "CANCELLED" => MaintenanceStatus::Cancelled,
            _ => MaintenanceStatus::Scheduled,
        }
    }
}

impl fmt::Display for MaintenanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// 趋势方向 (Trend Direction)
// ==========================================
// 预测性告警中参数越界的方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,   // 向上穿越 critical_high
    Down, // 向下穿越 critical_low
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrendDirection::Up => write!(f, "up"),
            TrendDirection::Down => write!(f, "down"),
        }
    }
}
