// ==========================================
// 化工设备监测分析系统 - CLI 主入口
// ==========================================
// 用法: equip-monitor <batch.csv> [db_path]
// 职责: 导入一个 CSV 批次并以 JSON 输出分析汇总
// ==========================================

use anyhow::{bail, Context};
use equip_monitor::api::IngestApi;
use equip_monitor::config::BandConfig;
use equip_monitor::engine::PipelineOrchestrator;
use equip_monitor::repository::{AlertRepository, DatasetRepository, RankingRepository};
use equip_monitor::{db, logging};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

fn main() -> anyhow::Result<()> {
    // 初始化日志系统
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", equip_monitor::APP_NAME);
    tracing::info!("系统版本: {}", equip_monitor::VERSION);
    tracing::info!("==================================================");

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        bail!("用法: equip-monitor <batch.csv> [db_path]");
    }

    let csv_path = PathBuf::from(&args[1]);
    let db_path = args
        .get(2)
        .map(PathBuf::from)
        .unwrap_or_else(get_default_db_path);
    tracing::info!("使用数据库: {}", db_path.display());

    // 打开连接并初始化 schema（幂等）
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("无法创建数据库目录: {}", parent.display()))?;
    }
    let db_path_str = db_path.to_string_lossy().to_string();
    let conn = db::open_sqlite_connection(&db_path_str)
        .with_context(|| format!("无法打开数据库: {}", db_path.display()))?;
    db::init_schema(&conn).context("schema 初始化失败")?;
    let conn = Arc::new(Mutex::new(conn));

    // 组装仓储与管线（共享连接）
    let dataset_repo = Arc::new(DatasetRepository::from_connection(Arc::clone(&conn)));
    let alert_repo = Arc::new(AlertRepository::from_connection(Arc::clone(&conn)));
    let ranking_repo = Arc::new(RankingRepository::from_connection(Arc::clone(&conn)));

    let orchestrator = Arc::new(PipelineOrchestrator::new(
        dataset_repo,
        alert_repo,
        ranking_repo,
        BandConfig::default(),
    ));
    let ingest_api = IngestApi::new(orchestrator);

    // 导入并输出汇总
    let summary = ingest_api
        .ingest_csv(&csv_path)
        .with_context(|| format!("导入失败: {}", csv_path.display()))?;

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

/// 默认数据库路径（用户数据目录下）
fn get_default_db_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("equip-monitor")
        .join("equip_monitor.db")
}
