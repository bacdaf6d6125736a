//! 提交上下文
//!
//! 封装"我正在往哪个项目的哪道题里添加文件"这一信息

use crate::error::BusinessError;
use std::fmt::Display;

/// 提交上下文
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitCtx {
    /// 项目ID
    pub project_id: String,
    /// 当前题目名称，也是项目中的目录名
    pub question: String,
}

impl SubmitCtx {
    pub fn new(project_id: impl Into<String>, question: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            question: question.into(),
        }
    }

    /// 从应用状态构造，没有打开的项目或题目时返回错误
    pub fn from_app_state(
        project_id: Option<&str>,
        question: Option<&str>,
    ) -> Result<Self, BusinessError> {
        let project_id = project_id.ok_or(BusinessError::NoCurrentProject)?;
        let question = question.ok_or(BusinessError::NoCurrentQuestion)?;
        Ok(Self::new(project_id, question))
    }

    /// 文件在项目中的路径：`question/name`
    pub fn path_for(&self, name: &str) -> String {
        format!("{}/{}", self.question, name)
    }
}

impl Display for SubmitCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[项目 {} 题目 {}]", self.project_id, self.question)
    }
}
