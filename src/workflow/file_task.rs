//! 单个文件任务 - 流程层
//!
//! 核心职责：定义"一个文件"的完整处理流程
//!
//! - 新建文件：模板内容 → 创建
//! - 上传文件：读取字节 → 编码为 data URL → 创建
//!
//! 任务之间互不依赖，失败时返回携带文件名的 [`TaskFailure`]

use crate::error::FileError;
use crate::infrastructure::FileStore;
use crate::models::{CandidateSource, FileContent, PendingFile, TaskFailure, UploadCandidate};
use crate::workflow::submit_ctx::SubmitCtx;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tracing::{debug, info, warn};

/// 任务结果：成功时为文件名
pub type TaskResult = Result<String, TaskFailure>;

/// 把候选文件完整读入内存并编码为 data URL
pub async fn read_candidate(candidate: &UploadCandidate) -> Result<FileContent, FileError> {
    let bytes = match &candidate.source {
        CandidateSource::Path(path) => {
            tokio::fs::read(path)
                .await
                .map_err(|source| FileError::ReadFailed {
                    path: path.display().to_string(),
                    source,
                })?
        }
        CandidateSource::Memory(bytes) => bytes.as_ref().clone(),
    };
    Ok(FileContent::DataUrl(to_data_url(&candidate.display_name, &bytes)))
}

/// 按文件名猜测 MIME 类型并编码
fn to_data_url(name: &str, bytes: &[u8]) -> String {
    let mime = mime_guess::from_path(name).first_or_octet_stream();
    format!("data:{};base64,{}", mime.essence_str(), STANDARD.encode(bytes))
}

/// 创建文件名输入框中的新文件
pub async fn named_file_task(
    store: &dyn FileStore,
    ctx: &SubmitCtx,
    pending: PendingFile,
) -> TaskResult {
    let name = pending.name().to_string();
    let path = ctx.path_for(&name);
    let content = FileContent::Text(pending.default_content());

    debug!("{} 新建文件 {} ({} 字节模板)", ctx, path, content.len());

    store
        .create_file(&ctx.project_id, &path, content)
        .await
        .map_err(|e| {
            warn!("{} ⚠️ 新建文件 {} 失败: {}", ctx, name, e);
            TaskFailure::creation(&name, e)
        })?;

    info!("{} ✓ 已新建 {}", ctx, name);
    Ok(name)
}

/// 读取并上传一个候选文件
pub async fn upload_task(
    store: &dyn FileStore,
    ctx: &SubmitCtx,
    candidate: UploadCandidate,
) -> TaskResult {
    let name = candidate.display_name.clone();

    let content = read_candidate(&candidate).await.map_err(|e| {
        warn!("{} ⚠️ 读取 {} 失败: {}", ctx, name, e);
        TaskFailure::read(&name, e)
    })?;

    let path = ctx.path_for(&name);
    debug!("{} 上传 {} ({} 字节)", ctx, path, content.len());

    store
        .create_file(&ctx.project_id, &path, content)
        .await
        .map_err(|e| {
            warn!("{} ⚠️ 上传 {} 失败: {}", ctx, name, e);
            TaskFailure::creation(&name, e)
        })?;

    info!("{} ✓ 已上传 {}", ctx, name);
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[tokio::test]
    async fn test_read_candidate_from_memory() {
        let candidate = UploadCandidate::from_bytes("hello.txt", b"hello".to_vec());
        let content = read_candidate(&candidate).await.unwrap();

        assert_eq!(content, FileContent::DataUrl("data:text/plain;base64,aGVsbG8=".to_string()));
    }

    #[tokio::test]
    async fn test_read_candidate_unknown_type_is_octet_stream() {
        let candidate = UploadCandidate::from_bytes("blob.seashellbin", vec![0xff]);
        let content = read_candidate(&candidate).await.unwrap();

        assert_eq!(
            content,
            FileContent::DataUrl("data:application/octet-stream;base64,/w==".to_string())
        );
    }

    #[tokio::test]
    async fn test_read_candidate_missing_file() {
        let candidate = UploadCandidate::from_path(PathBuf::from("/no/such/dir/gone.c"));
        let err = read_candidate(&candidate).await.unwrap_err();

        assert!(matches!(err, FileError::ReadFailed { .. }));
    }
}
