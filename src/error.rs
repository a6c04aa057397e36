//! Error kinds shared by every operation.
//!
//! Nothing in this crate retries or swallows a failure: each operation
//! returns one of these variants and `main` is the single place that
//! formats it for the operator.

use thiserror::Error;

/// Failure of a single task operation.
#[derive(Debug, Error)]
pub enum TaskError {
    /// Target already exists (ongoing task on `add`, done task on `done`).
    #[error("task {0} exists")]
    Conflict(String),

    /// Expected task directory or sidecar file is absent.
    #[error("task {0} doesn't exist")]
    NotFound(String),

    /// A sidecar file is present but can't be parsed.
    #[error("task {name}: {detail}")]
    Corrupt { name: String, detail: String },

    /// Name is unusable as a path segment.
    #[error("invalid task name {0:?}")]
    InvalidName(String),

    /// Copy/move/read/write failed at the storage layer.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
