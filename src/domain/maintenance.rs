// ==========================================
// 化工设备监测分析系统 - 维护计划领域模型
// ==========================================
// 用途: 维护排期 CRUD（无分析逻辑），状态更新需区分"未找到"结果
// ==========================================

use crate::domain::types::{MaintenancePriority, MaintenanceStatus};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

// ==========================================
// MaintenanceSchedule - 维护计划
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaintenanceSchedule {
    pub id: i64,                        // 计划ID（入库前为 0）
    pub equipment_name: String,         // 设备名称
    pub equipment_type: String,         // 设备类型
    pub scheduled_date: NaiveDate,      // 计划日期
    pub priority: MaintenancePriority,  // 优先级
    pub status: MaintenanceStatus,      // 状态
    pub estimated_hours: f64,           // 预计工时
    pub description: String,            // 工作描述
    pub created_at: NaiveDateTime,      // 创建时间
    pub completed_at: Option<NaiveDateTime>, // 完成时间
    pub notes: Option<String>,          // 备注
}
