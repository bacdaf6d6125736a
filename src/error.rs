use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 项目存储错误
    #[error("存储错误: {0}")]
    Store(#[from] StoreError),
    /// 文件操作错误
    #[error("文件错误: {0}")]
    File(#[from] FileError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
    /// 业务逻辑错误
    #[error("业务错误: {0}")]
    Business(#[from] BusinessError),
}

/// 项目存储错误
///
/// 由 `FileStore::create_file` 返回
#[derive(Debug, Error)]
pub enum StoreError {
    /// 目标文件已存在
    #[error("文件已存在: {path}")]
    AlreadyExists { path: String },
    /// 路径非法（空、绝对路径或包含 `..`）
    #[error("非法路径: {path}")]
    InvalidPath { path: String },
    /// 文件内容无法解码
    #[error("内容无法解码 ({path}): {reason}")]
    InvalidContent { path: String, reason: String },
    /// 写入失败
    #[error("写入文件失败 ({path}): {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// 文件操作错误
#[derive(Debug, Error)]
pub enum FileError {
    /// 读取文件失败
    #[error("读取文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 写入文件失败
    #[error("写入文件失败 ({path}): {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 配置文件读取失败
    #[error("无法读取配置文件 {path}: {source}")]
    FileReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// TOML 解析失败
    #[error("TOML解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// 业务逻辑错误
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BusinessError {
    /// 当前没有打开的项目
    #[error("当前没有打开的项目")]
    NoCurrentProject,
    /// 当前项目没有选中的题目
    #[error("当前项目没有选中的题目")]
    NoCurrentQuestion,
}

// ========== 便捷构造函数 ==========

impl StoreError {
    /// 创建写入失败错误
    pub fn write_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        StoreError::WriteFailed {
            path: path.into(),
            source,
        }
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
