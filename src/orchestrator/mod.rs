//! 编排层（Orchestration Layer）
//!
//! ## 模块划分
//!
//! ### `coordinator` - 批次协调器
//! - 为批次中的每个文件构造任务
//! - 并发执行并等待全部结束
//! - 汇总成功与失败
//!
//! ### `dialog` - 添加文件对话框
//! - 持有表单状态（watch 通道）
//! - 驱动 Idle → Submitting → Idle 状态机
//! - 调用宿主关闭对话框或报告错误
//!
//! ### `project_menu` - 项目菜单
//!
//! ### `app` - 命令行应用
//!
//! ## 层次关系
//!
//! ```text
//! app / dialog (处理一次提交)
//!     ↓
//! coordinator (处理一个批次 Vec<Task>)
//!     ↓
//! workflow::file_task (处理单个文件)
//!     ↓
//! services (能力层：模板 / 文件列表 / 错误日志)
//!     ↓
//! infrastructure (基础设施：FileStore / FormHost)
//! ```

pub mod app;
pub mod coordinator;
pub mod dialog;
pub mod project_menu;

// 重新导出主要类型
pub use app::{AddFileRequest, App, CliHost};
pub use coordinator::run_batch;
pub use dialog::{AddFileDialog, SubmitOutcome};
pub use project_menu::{MenuAction, ProjectMenu};
