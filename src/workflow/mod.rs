pub mod file_task;
pub mod submit_ctx;

pub use file_task::{named_file_task, read_candidate, upload_task, TaskResult};
pub use submit_ctx::SubmitCtx;
