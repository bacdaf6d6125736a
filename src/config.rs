use crate::error::{AppResult, ConfigError};
use serde::Deserialize;
use std::path::Path;

/// 默认配置文件名
pub const DEFAULT_CONFIG_FILE: &str = "seashell.toml";

/// 程序配置文件
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 项目存储根目录，每个项目对应其下的一个子目录
    pub project_root: String,
    /// 单个批次内同时进行的文件任务数量
    pub max_concurrent_uploads: usize,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 错误日志文件
    pub error_log_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            project_root: "projects".to_string(),
            max_concurrent_uploads: 16,
            verbose_logging: false,
            error_log_file: "add_file_errors.txt".to_string(),
        }
    }
}

impl Config {
    /// 加载配置：先读取 TOML 配置文件（如果存在），再应用环境变量覆盖
    ///
    /// 配置文件路径取自 `SEASHELL_CONFIG`，未设置时尝试当前目录下的 `seashell.toml`
    pub fn load() -> AppResult<Self> {
        let base = match std::env::var("SEASHELL_CONFIG") {
            Ok(path) => Self::from_file(Path::new(&path))?,
            Err(_) if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::from_file(Path::new(DEFAULT_CONFIG_FILE))?
            }
            Err(_) => Self::default(),
        };
        Ok(base.with_env_overrides())
    }

    /// 从 TOML 文件读取配置，缺省字段使用默认值
    pub fn from_file(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileReadFailed {
            path: path.display().to_string(),
            source,
        })?;
        let config = toml::from_str(&content).map_err(|source| ConfigError::TomlParseFailed {
            path: path.display().to_string(),
            source,
        })?;
        Ok(config)
    }

    /// 用环境变量覆盖当前配置，无法解析的值保留原值
    pub fn with_env_overrides(self) -> Self {
        Self {
            project_root: std::env::var("SEASHELL_PROJECT_ROOT").unwrap_or(self.project_root),
            max_concurrent_uploads: std::env::var("MAX_CONCURRENT_UPLOADS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|n: &usize| *n > 0)
                .unwrap_or(self.max_concurrent_uploads),
            verbose_logging: std::env::var("VERBOSE_LOGGING")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(self.verbose_logging),
            error_log_file: std::env::var("ERROR_LOG_FILE").unwrap_or(self.error_log_file),
        }
    }
}
