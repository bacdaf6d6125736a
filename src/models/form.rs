use crate::models::file::UploadCandidate;

/// 添加文件对话框的状态快照
///
/// 由 `AddFileDialog` 通过 watch 通道发布，每次转换都会产生新快照
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    /// 文件名输入框的当前值
    pub file: String,
    /// 上一次失焦时的合法文件名
    pub prev_file: String,
    /// 上传控件中选中的文件
    pub upload_files: Vec<UploadCandidate>,
    /// 批次进行中时为 true，表单被锁定
    pub fields_disabled: bool,
}
