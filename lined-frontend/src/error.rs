use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("File operation on {0:?} failed")]
    FileOperationFailed(PathBuf, #[source] std::io::Error),
    #[error("Terminal operation failed")]
    TerminalOperationFailed(#[from] std::io::Error),
    #[error("Terminal not initialized")]
    TerminalNotInitialized,
}
