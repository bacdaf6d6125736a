//! 日志工具模块
//!
//! 提供日志初始化和输出的辅助函数

use crate::config::Config;
use crate::models::BatchReport;
use crate::workflow::SubmitCtx;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 初始化日志
///
/// 优先使用 `RUST_LOG`，否则按 `verbose` 选择 debug / info。
/// 重复调用是安全的（测试中会多次初始化）。
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// 记录程序启动信息
pub fn log_startup(config: &Config, ctx: &SubmitCtx) {
    info!("{}", "=".repeat(60));
    info!("🚀 Seashell 添加文件 {}", ctx);
    info!("📁 项目根目录: {}", config.project_root);
    info!("📊 最大并发数: {}", config.max_concurrent_uploads);
    info!("{}", "=".repeat(60));
}

/// 记录批次开始信息
///
/// # 参数
/// - `ctx`: 提交上下文
/// - `pending`: 新建文件名（如果有）
/// - `uploads`: 上传文件数量
pub fn log_batch_start(ctx: &SubmitCtx, pending: Option<&str>, uploads: usize) {
    info!("{}", "─".repeat(60));
    match pending {
        Some(name) => info!("📦 {} 开始提交: 新建 {} + 上传 {} 个文件", ctx, name, uploads),
        None => info!("📦 {} 开始提交: 上传 {} 个文件", ctx, uploads),
    }
}

/// 记录批次完成信息
pub fn log_batch_complete(ctx: &SubmitCtx, report: &BatchReport) {
    info!(
        "✓ {} 批次完成: 成功 {}/{}",
        ctx,
        report.created.len(),
        report.total()
    );
    info!("{}", "─".repeat(60));
}
