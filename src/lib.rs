//! # Seashell Add File
//!
//! Seashell 在线 IDE "添加文件"对话框的批量提交流程
//!
//! ## 架构设计
//!
//! 本系统采用严格的四层架构：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有存储资源，只暴露能力
//! - `FileStore` - 在项目中创建文件；`LocalProjectStore` 为本地目录实现
//! - `FormHost` - 关闭对话框、显示错误
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，每项只做一件事
//! - `content_template` - 按扩展名生成新文件内容
//! - `file_list` - 把上传选择转换为候选文件列表
//! - `ErrorLogWriter` - 写错误日志能力
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一个文件"的完整处理流程
//! - `SubmitCtx` - 上下文封装（project_id + question）
//! - `file_task` - 新建任务（模板 → 创建）与上传任务（读取 → 创建）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/coordinator` - 批次协调器，并发执行并汇总结果
//! - `orchestrator/dialog` - 对话框状态机，锁定/解锁表单
//! - `orchestrator/app` - 命令行应用
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod infrastructure;

pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult, StoreError};
pub use infrastructure::{FileStore, FormHost, LocalProjectStore, ProjectDispatch};
pub use models::{BatchReport, FileContent, FormState, SubmissionBatch, UploadCandidate};
pub use orchestrator::{AddFileDialog, App, ProjectMenu, SubmitOutcome};
pub use workflow::SubmitCtx;
