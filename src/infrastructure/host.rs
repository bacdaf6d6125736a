//! 对话框宿主接口 - 基础设施层

/// 承载添加文件对话框的 UI
pub trait FormHost: Send + Sync {
    /// 关闭对话框，只在整个批次成功或用户取消时调用
    fn close_form(&self);

    /// 向用户显示一条错误信息
    fn report_error(&self, message: &str);
}

/// 项目菜单发出的对话框操作
pub trait ProjectDispatch: Send + Sync {
    /// 打开/关闭"删除项目"确认框
    fn toggle_delete_project(&self);
}
