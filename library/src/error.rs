use thiserror::Error;

use crate::automation::{ApiError, AttachError};
use crate::component::SolveError;

#[derive(Error, Debug)]
pub enum LibraryError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Libloading error: {0}")]
    Libloading(#[from] libloading::Error),
    #[error("Plugin error: {0}")]
    Plugin(String),
    #[error("Attach error: {0}")]
    Attach(#[from] AttachError),
    #[error("Automation error: {0}")]
    Api(#[from] ApiError),
    #[error("Solve error: {0}")]
    Solve(#[from] SolveError),
}
