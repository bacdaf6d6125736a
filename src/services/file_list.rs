//! 文件列表规范化服务 - 业务能力层
//!
//! 把上传控件的选择结果转换成有序的候选文件列表

use crate::models::UploadCandidate;
use std::path::PathBuf;

/// 将选择结果转换成候选文件
///
/// - `None`（什么都没选）返回空列表
/// - 保持选择顺序，不做去重、过滤或校验
pub fn files_to_candidates<I>(selection: Option<I>) -> Vec<UploadCandidate>
where
    I: IntoIterator<Item = PathBuf>,
{
    match selection {
        None => Vec::new(),
        Some(files) => files.into_iter().map(UploadCandidate::from_path).collect(),
    }
}
