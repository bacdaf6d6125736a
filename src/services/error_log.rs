//! 错误日志写入服务 - 业务能力层
//!
//! 只负责把"提交失败"的信息追加到日志文件，不关心流程

use crate::error::{AppResult, FileError};
use std::fs::OpenOptions;
use std::io::Write;
use tracing::debug;

/// 错误日志写入服务
///
/// 职责：
/// - 把报告给用户的错误信息追加写入文件
/// - 每条记录带时间戳和项目/题目信息
pub struct ErrorLogWriter {
    log_file_path: String,
}

impl ErrorLogWriter {
    /// 使用自定义文件路径创建
    pub fn with_path(path: impl Into<String>) -> Self {
        Self {
            log_file_path: path.into(),
        }
    }

    pub fn path(&self) -> &str {
        &self.log_file_path
    }

    /// 追加一条错误记录
    pub fn write(&self, project_id: &str, question: &str, message: &str) -> AppResult<()> {
        debug!("写入错误日志: 项目 {} | 题目 {}", project_id, question);

        let line = format!(
            "[{}] 项目 {} | 题目 {} | {}\n",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
            project_id,
            question,
            message
        );

        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_file_path)
            .and_then(|mut file| file.write_all(line.as_bytes()))
            .map_err(|source| FileError::WriteFailed {
                path: self.log_file_path.clone(),
                source,
            })?;

        Ok(())
    }
}
