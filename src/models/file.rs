//! 单个文件相关的数据类型

use crate::services::content_template::default_contents;
use std::path::PathBuf;
use std::sync::Arc;

/// 用户在文件名输入框中指定的新文件
///
/// 只能通过 [`PendingFile::parse`] 构造，保证名称非空且不含 `/`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingFile {
    name: String,
}

impl PendingFile {
    /// 校验文件名，非法时返回 `None`（不视为错误，只是跳过）
    pub fn parse(name: &str) -> Option<Self> {
        if is_valid_file_name(name) {
            Some(Self {
                name: name.to_string(),
            })
        } else {
            None
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// 根据扩展名生成的默认内容
    pub fn default_content(&self) -> String {
        default_contents(&self.name)
    }
}

/// 文件名是否可以直接提交：非空且不包含路径分隔符
pub fn is_valid_file_name(name: &str) -> bool {
    !name.is_empty() && !name.contains('/')
}

/// 上传候选文件的字节来源，在提交时才读取
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidateSource {
    /// 本地文件路径
    Path(PathBuf),
    /// 已在内存中的数据
    Memory(Arc<Vec<u8>>),
}

/// 通过上传控件选中的文件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadCandidate {
    /// 显示名称，同时也是写入题目目录时使用的文件名
    pub display_name: String,
    pub source: CandidateSource,
}

impl UploadCandidate {
    pub fn from_path(path: PathBuf) -> Self {
        let display_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        Self {
            display_name,
            source: CandidateSource::Path(path),
        }
    }

    pub fn from_bytes(display_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            display_name: display_name.into(),
            source: CandidateSource::Memory(Arc::new(bytes)),
        }
    }
}

/// 提交给存储层的文件内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContent {
    /// 文本内容（新建文件的模板）
    Text(String),
    /// `data:<mime>;base64,<payload>` 形式的上传内容
    DataUrl(String),
}

impl FileContent {
    /// 内容长度（字节），仅用于日志
    pub fn len(&self) -> usize {
        match self {
            FileContent::Text(s) | FileContent::DataUrl(s) => s.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
