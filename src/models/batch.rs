//! 批次相关的数据类型

use crate::models::file::{PendingFile, UploadCandidate};
use crate::models::form::FormState;
use serde::Serialize;
use std::fmt;

/// 一次提交（点击或回车）对应的全部文件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionBatch {
    /// 文件名输入框中的新文件（非法名称时为空）
    pub pending: Option<PendingFile>,
    /// 上传候选文件，保持选择顺序
    pub uploads: Vec<UploadCandidate>,
}

impl SubmissionBatch {
    /// 从表单快照构造批次，没有任何可提交内容时返回 `None`
    pub fn from_form(state: &FormState) -> Option<Self> {
        let pending = PendingFile::parse(&state.file);
        if pending.is_none() && state.upload_files.is_empty() {
            return None;
        }
        Some(Self {
            pending,
            uploads: state.upload_files.clone(),
        })
    }

    /// 批次中的任务数量
    pub fn len(&self) -> usize {
        self.uploads.len() + usize::from(self.pending.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// 任务失败的阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// 读取上传文件失败
    Read,
    /// 存储层创建文件失败
    Creation,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Read => write!(f, "读取失败"),
            FailureKind::Creation => write!(f, "创建失败"),
        }
    }
}

/// 单个任务的失败信息，携带对应的文件名
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskFailure {
    pub name: String,
    pub kind: FailureKind,
    pub reason: String,
}

impl TaskFailure {
    pub fn read(name: impl Into<String>, reason: impl fmt::Display) -> Self {
        Self {
            name: name.into(),
            kind: FailureKind::Read,
            reason: reason.to_string(),
        }
    }

    pub fn creation(name: impl Into<String>, reason: impl fmt::Display) -> Self {
        Self {
            name: name.into(),
            kind: FailureKind::Creation,
            reason: reason.to_string(),
        }
    }
}

impl fmt::Display for TaskFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.name, self.kind, self.reason)
    }
}

/// 一个批次全部任务结束后的汇总
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    /// 成功创建的文件名，按任务构造顺序
    pub created: Vec<String>,
    /// 失败的任务，按任务构造顺序
    pub failures: Vec<TaskFailure>,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn total(&self) -> usize {
        self.created.len() + self.failures.len()
    }

    /// 所有失败文件名
    pub fn failed_names(&self) -> Vec<&str> {
        self.failures.iter().map(|f| f.name.as_str()).collect()
    }

    /// 面向用户的汇总错误信息，批次全部成功时为 `None`
    pub fn error_message(&self) -> Option<String> {
        if self.is_success() {
            return None;
        }
        Some(format!("文件上传失败: {}", self.failed_names().join(", ")))
    }
}
