//! 命令行应用 - 编排层
//!
//! ## 职责
//!
//! 用命令行参数模拟一次对话框会话：
//!
//! 1. **应用初始化**：创建本地项目存储、错误日志、宿主
//! 2. **填写表单**：输入文件名并失焦、选择上传文件
//! 3. **提交**：有文件名时按回车，否则点击"添加"
//! 4. **输出结果**：日志统计，可选 JSON 报告

use crate::config::Config;
use crate::infrastructure::{FormHost, LocalProjectStore};
use crate::models::BatchReport;
use crate::orchestrator::dialog::{AddFileDialog, SubmitOutcome};
use crate::services::ErrorLogWriter;
use crate::utils::logging::log_startup;
use crate::workflow::SubmitCtx;
use anyhow::{Context, Result};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tracing::{error, info, warn};

/// 一次命令行调用要添加的文件
#[derive(Debug, Clone, Default)]
pub struct AddFileRequest {
    pub project: String,
    pub question: String,
    /// 新建文件名
    pub name: Option<String>,
    /// 要上传的本地文件
    pub uploads: Vec<PathBuf>,
    /// 以 JSON 输出批次报告
    pub json: bool,
}

/// 命令行宿主：关闭即标记完成，错误写入日志
pub struct CliHost {
    ctx: SubmitCtx,
    error_log: ErrorLogWriter,
    closed: AtomicBool,
    errors: Mutex<Vec<String>>,
}

impl CliHost {
    pub fn new(ctx: SubmitCtx, error_log: ErrorLogWriter) -> Self {
        Self {
            ctx,
            error_log,
            closed: AtomicBool::new(false),
            errors: Mutex::new(Vec::new()),
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    /// 已报告的错误信息
    pub fn errors(&self) -> Vec<String> {
        self.errors
            .lock()
            .map(|errors| errors.clone())
            .unwrap_or_default()
    }
}

impl FormHost for CliHost {
    fn close_form(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }

    fn report_error(&self, message: &str) {
        error!("{} {}", self.ctx, message);
        if let Err(e) = self
            .error_log
            .write(&self.ctx.project_id, &self.ctx.question, message)
        {
            warn!("⚠️ 无法写入错误日志 {}: {}", self.error_log.path(), e);
        }
        if let Ok(mut errors) = self.errors.lock() {
            errors.push(message.to_string());
        }
    }
}

/// 应用主结构
pub struct App {
    config: Config,
    request: AddFileRequest,
    host: Arc<CliHost>,
    dialog: AddFileDialog,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config, request: AddFileRequest) -> Result<Self> {
        let ctx = SubmitCtx::from_app_state(
            Some(request.project.as_str()),
            Some(request.question.as_str()),
        )
        .context("无法确定目标项目")?;

        log_startup(&config, &ctx);

        let store = Arc::new(LocalProjectStore::new(&config.project_root));
        let host = Arc::new(CliHost::new(
            ctx.clone(),
            ErrorLogWriter::with_path(config.error_log_file.clone()),
        ));
        let dialog = AddFileDialog::new(ctx, store, host.clone())
            .with_max_concurrent(config.max_concurrent_uploads);

        Ok(Self {
            config,
            request,
            host,
            dialog,
        })
    }

    /// 运行应用主逻辑，返回批次是否全部成功
    pub async fn run(&self) -> Result<bool> {
        if let Some(name) = &self.request.name {
            self.dialog.on_name_change(name.as_str());
            self.dialog.on_name_blur();
            if self.dialog.state().file.is_empty() {
                warn!("⚠️ 文件名 '{}' 非法，已忽略", name);
            }
        }

        if !self.request.uploads.is_empty() {
            self.dialog.on_files_selected(Some(self.request.uploads.clone()));
        }

        if !self.dialog.can_submit() {
            warn!("⚠️ 没有需要添加的文件，程序结束");
            return Ok(false);
        }

        let outcome = if self.request.name.is_some() {
            self.dialog.on_key_press("Enter").await
        } else {
            self.dialog.submit().await
        };

        let report = match outcome {
            SubmitOutcome::Completed(report) => report,
            SubmitOutcome::Busy | SubmitOutcome::Nothing => return Ok(false),
        };

        if self.request.json {
            println!("{}", report_json(&report)?);
        }

        print_final_stats(&report, &self.config, self.host.is_closed());
        Ok(self.host.is_closed())
    }
}

/// `--json` 输出的批次报告
pub fn report_json(report: &BatchReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// 进程退出码：批次全部成功为 0，否则为 1
pub fn exit_status(success: bool) -> u8 {
    if success {
        0
    } else {
        1
    }
}

fn print_final_stats(report: &BatchReport, config: &Config, closed: bool) {
    info!("{}", "=".repeat(60));
    info!("📊 添加完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("✅ 成功: {}/{}", report.created.len(), report.total());
    info!("❌ 失败: {}", report.failures.len());
    info!("{}", "=".repeat(60));
    if !closed {
        info!("错误已记录至: {}", config.error_log_file);
    }
}
