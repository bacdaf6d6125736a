//! 添加文件对话框 - 编排层
//!
//! ## 状态机
//!
//! ```text
//! Idle ──submit()──▶ Submitting ──全部任务结束──▶ Idle
//! ```
//!
//! - 进入 Submitting 时锁定表单（`fields_disabled = true`）
//! - 全部成功：调用一次 `close_form`
//! - 有失败：调用一次 `report_error`，表单保持打开以便重试
//! - 无论结果如何最后解锁；锁定期间再次提交不会产生任何存储调用
//!
//! 表单状态通过 `tokio::sync::watch` 发布，每次转换产生一个新快照。

use crate::config::Config;
use crate::infrastructure::{FileStore, FormHost};
use crate::models::{is_valid_file_name, BatchReport, FormState, SubmissionBatch};
use crate::orchestrator::coordinator::run_batch;
use crate::services::files_to_candidates;
use crate::workflow::SubmitCtx;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, error, info};

/// 一次提交动作的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// 已有批次在进行中，本次提交被忽略
    Busy,
    /// 没有可提交的文件
    Nothing,
    /// 批次已执行完毕
    Completed(BatchReport),
}

/// 添加文件对话框
pub struct AddFileDialog {
    ctx: SubmitCtx,
    store: Arc<dyn FileStore>,
    host: Arc<dyn FormHost>,
    max_concurrent: usize,
    state: watch::Sender<FormState>,
}

/// 离开 Submitting 时解锁表单，出现 panic 或 future 被丢弃时同样生效
struct UnlockGuard<'a> {
    state: &'a watch::Sender<FormState>,
}

impl Drop for UnlockGuard<'_> {
    fn drop(&mut self) {
        self.state.send_modify(|state| state.fields_disabled = false);
    }
}

/// 批次能否开始
enum Start {
    Busy,
    Nothing,
    Batch(SubmissionBatch),
}

impl AddFileDialog {
    pub fn new(ctx: SubmitCtx, store: Arc<dyn FileStore>, host: Arc<dyn FormHost>) -> Self {
        let (state, _) = watch::channel(FormState::default());
        Self {
            ctx,
            store,
            host,
            max_concurrent: Config::default().max_concurrent_uploads,
            state,
        }
    }

    /// 设置单个批次内的并发任务数量
    pub fn with_max_concurrent(mut self, max_concurrent: usize) -> Self {
        self.max_concurrent = max_concurrent;
        self
    }

    /// 订阅表单状态快照
    pub fn subscribe(&self) -> watch::Receiver<FormState> {
        self.state.subscribe()
    }

    /// 当前表单状态的拷贝
    pub fn state(&self) -> FormState {
        self.state.borrow().clone()
    }

    pub fn fields_disabled(&self) -> bool {
        self.state.borrow().fields_disabled
    }

    /// 文件名输入框内容变化
    pub fn on_name_change(&self, value: impl Into<String>) {
        let value = value.into();
        self.state.send_if_modified(|state| {
            if state.fields_disabled || state.file == value {
                return false;
            }
            state.file = value;
            true
        });
    }

    /// 文件名输入框失焦：非法名称恢复为上一个合法值
    pub fn on_name_blur(&self) {
        self.state.send_if_modified(|state| {
            if is_valid_file_name(&state.file) {
                if state.prev_file == state.file {
                    return false;
                }
                state.prev_file = state.file.clone();
            } else {
                if state.file == state.prev_file {
                    return false;
                }
                debug!("{} 文件名 '{}' 非法，恢复为 '{}'", self.ctx, state.file, state.prev_file);
                state.file = state.prev_file.clone();
            }
            true
        });
    }

    /// 上传控件选择变化，替换全部候选文件
    pub fn on_files_selected<I>(&self, selection: Option<I>)
    where
        I: IntoIterator<Item = PathBuf>,
    {
        let candidates = files_to_candidates(selection);
        self.state.send_if_modified(|state| {
            if state.fields_disabled {
                return false;
            }
            state.upload_files = candidates;
            true
        });
    }

    /// "添加"按钮是否可用
    pub fn can_submit(&self) -> bool {
        let state = self.state.borrow();
        !state.fields_disabled
            && (is_valid_file_name(&state.file) || !state.upload_files.is_empty())
    }

    /// 文件名输入框中的按键，回车触发提交
    pub async fn on_key_press(&self, key: &str) -> SubmitOutcome {
        if key == "Enter" {
            self.submit().await
        } else {
            SubmitOutcome::Nothing
        }
    }

    /// 取消：直接关闭对话框
    pub fn cancel(&self) {
        self.host.close_form();
    }

    /// 提交当前表单中的全部文件
    pub async fn submit(&self) -> SubmitOutcome {
        let mut start = Start::Nothing;

        // Idle → Submitting：检查与加锁在同一次修改内完成
        self.state.send_if_modified(|state| {
            if state.fields_disabled {
                start = Start::Busy;
                return false;
            }
            match SubmissionBatch::from_form(state) {
                Some(batch) => {
                    start = Start::Batch(batch);
                    state.fields_disabled = true;
                    true
                }
                None => false,
            }
        });

        let batch = match start {
            Start::Busy => {
                debug!("{} 批次进行中，忽略重复提交", self.ctx);
                return SubmitOutcome::Busy;
            }
            Start::Nothing => {
                debug!("{} 没有可提交的文件", self.ctx);
                return SubmitOutcome::Nothing;
            }
            Start::Batch(batch) => batch,
        };

        let _unlock = UnlockGuard { state: &self.state };

        let report = run_batch(self.store.as_ref(), &self.ctx, batch, self.max_concurrent).await;

        match report.error_message() {
            None => {
                info!("{} ✅ 全部 {} 个文件已添加", self.ctx, report.created.len());
                self.host.close_form();
            }
            Some(message) => {
                error!("{} ❌ {}", self.ctx, message);
                self.host.report_error(&message);
            }
        }

        SubmitOutcome::Completed(report)
    }
}
