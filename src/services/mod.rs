pub mod content_template;
pub mod error_log;
pub mod file_list;

pub use content_template::default_contents;
pub use error_log::ErrorLogWriter;
pub use file_list::files_to_candidates;
