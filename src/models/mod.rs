pub mod batch;
pub mod file;
pub mod form;

pub use batch::{BatchReport, FailureKind, SubmissionBatch, TaskFailure};
pub use file::{is_valid_file_name, CandidateSource, FileContent, PendingFile, UploadCandidate};
pub use form::FormState;
