//! 项目右键菜单

use crate::error::BusinessError;
use crate::infrastructure::ProjectDispatch;
use tracing::debug;

/// 菜单项对应的操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    DownloadProject,
    NewQuestion,
    DeleteProject,
}

impl MenuAction {
    pub fn text(&self) -> &'static str {
        match self {
            MenuAction::DownloadProject => "Download Project",
            MenuAction::NewQuestion => "New Question",
            MenuAction::DeleteProject => "Delete Project",
        }
    }
}

/// 当前项目的菜单
#[derive(Debug, Clone)]
pub struct ProjectMenu {
    project_id: String,
}

impl ProjectMenu {
    /// 菜单只能在打开项目时创建
    pub fn for_project(current: Option<&str>) -> Result<Self, BusinessError> {
        let project_id = current.ok_or(BusinessError::NoCurrentProject)?;
        Ok(Self {
            project_id: project_id.to_string(),
        })
    }

    /// 按显示顺序排列的菜单项
    pub fn items(&self) -> [MenuAction; 3] {
        [
            MenuAction::DownloadProject,
            MenuAction::NewQuestion,
            MenuAction::DeleteProject,
        ]
    }

    /// 点击菜单项
    pub fn select(&self, action: MenuAction, dispatch: &dyn ProjectDispatch) {
        debug!("[项目 {}] 菜单: {}", self.project_id, action.text());
        match action {
            MenuAction::DeleteProject => dispatch.toggle_delete_project(),
            // 下载与新建题目尚未接入后端
            MenuAction::DownloadProject | MenuAction::NewQuestion => {}
        }
    }
}
