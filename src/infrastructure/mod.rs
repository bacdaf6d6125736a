pub mod file_store;
pub mod host;
pub mod local_store;

pub use file_store::FileStore;
pub use host::{FormHost, ProjectDispatch};
pub use local_store::LocalProjectStore;
