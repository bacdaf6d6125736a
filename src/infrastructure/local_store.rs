//! 本地目录项目存储 - 基础设施层
//!
//! 每个项目是根目录下的一个子目录，题目是项目下的子目录

use crate::error::StoreError;
use crate::infrastructure::file_store::FileStore;
use crate::models::FileContent;
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;

/// 基于本地文件系统的项目存储
#[derive(Debug, Clone)]
pub struct LocalProjectStore {
    root: PathBuf,
}

impl LocalProjectStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// 计算目标文件的绝对位置，拒绝任何可能逃出项目目录的路径
    fn resolve(&self, project_id: &str, path: &str) -> Result<PathBuf, StoreError> {
        let invalid = || StoreError::InvalidPath {
            path: format!("{}/{}", project_id, path),
        };

        if !is_plain_component(project_id) {
            return Err(invalid());
        }

        let mut target = self.root.join(project_id);
        for component in path.split('/') {
            if !is_plain_component(component) {
                return Err(invalid());
            }
            target.push(component);
        }
        Ok(target)
    }
}

/// 单个路径段：非空、不是 `.`/`..`、不含分隔符
fn is_plain_component(component: &str) -> bool {
    !component.is_empty()
        && component != "."
        && component != ".."
        && !component.contains(['/', '\\'])
}

/// 解码 `data:<mime>;base64,<payload>`
fn decode_data_url(url: &str) -> Result<Vec<u8>, String> {
    let rest = url.strip_prefix("data:").ok_or("缺少 data: 前缀")?;
    let (header, payload) = rest.split_once(',').ok_or("缺少 ',' 分隔符")?;
    if !header.ends_with(";base64") {
        return Err(format!("不支持的编码: {}", header));
    }
    STANDARD.decode(payload).map_err(|e| e.to_string())
}

#[async_trait]
impl FileStore for LocalProjectStore {
    async fn create_file(
        &self,
        project_id: &str,
        path: &str,
        content: FileContent,
    ) -> Result<(), StoreError> {
        let target = self.resolve(project_id, path)?;

        let bytes = match content {
            FileContent::Text(text) => text.into_bytes(),
            FileContent::DataUrl(url) => {
                decode_data_url(&url).map_err(|reason| StoreError::InvalidContent {
                    path: path.to_string(),
                    reason,
                })?
            }
        };

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| StoreError::write_failed(path, e))?;
        }

        let mut file = match fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&target)
            .await
        {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                return Err(StoreError::AlreadyExists {
                    path: path.to_string(),
                });
            }
            Err(e) => return Err(StoreError::write_failed(path, e)),
        };

        file.write_all(&bytes)
            .await
            .map_err(|e| StoreError::write_failed(path, e))?;
        file.flush()
            .await
            .map_err(|e| StoreError::write_failed(path, e))?;

        debug!("已写入 {} ({} 字节)", target.display(), bytes.len());
        Ok(())
    }
}
