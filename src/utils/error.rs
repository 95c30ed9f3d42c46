//! Error types for the batch optimizer.
//!
//! One `thiserror` enum covers the whole pipeline. Filesystem and validation
//! errors are fatal and stop a run before any work is dispatched; decode,
//! encode, IO and worker errors are recovered per file.

use std::io;
use std::path::{Path, PathBuf};
use serde::Serialize;
use thiserror::Error;

/// Main error type for the optimizer.
#[derive(Error, Debug, Serialize)]
pub enum OptimizerError {
    /// Root directory missing, not a directory, or unreadable
    #[error("Filesystem error at {}: {message}", path.display())]
    FileSystem { path: PathBuf, message: String },

    /// Source image could not be read or decoded
    #[error("Decode error for {}: {message}", path.display())]
    Decode { path: PathBuf, message: String },

    /// WebP encoding or writing the output file failed
    #[error("Encode error for {}: {message}", path.display())]
    Encode { path: PathBuf, message: String },

    /// Any other IO failure while handling a single file
    #[error("IO error: {0}")]
    IO(String),

    /// Invalid settings
    #[error("Validation error: {0}")]
    Validation(String),

    /// A worker task panicked or was cancelled
    #[error("Worker error: {0}")]
    Worker(String),
}

/// Convenience result type for optimizer operations.
pub type OptimizerResult<T> = Result<T, OptimizerError>;

// Helper methods for error creation
impl OptimizerError {
    pub fn file_system<T: ToString>(path: impl AsRef<Path>, msg: T) -> Self {
        Self::FileSystem {
            path: path.as_ref().to_path_buf(),
            message: msg.to_string(),
        }
    }

    pub fn decode<T: ToString>(path: impl AsRef<Path>, msg: T) -> Self {
        Self::Decode {
            path: path.as_ref().to_path_buf(),
            message: msg.to_string(),
        }
    }

    pub fn encode<T: ToString>(path: impl AsRef<Path>, msg: T) -> Self {
        Self::Encode {
            path: path.as_ref().to_path_buf(),
            message: msg.to_string(),
        }
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        Self::Validation(msg.into())
    }

    pub fn worker<T: Into<String>>(msg: T) -> Self {
        Self::Worker(msg.into())
    }
}

// Convert std::io::Error to OptimizerError
impl From<io::Error> for OptimizerError {
    fn from(err: io::Error) -> Self {
        Self::IO(err.to_string())
    }
}

impl From<tokio::task::JoinError> for OptimizerError {
    fn from(err: tokio::task::JoinError) -> Self {
        if err.is_panic() {
            Self::Worker(format!("Task panicked: {}", err))
        } else {
            Self::Worker(format!("Task cancelled: {}", err))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_file() {
        let err = OptimizerError::decode("photos/broken.png", "invalid PNG signature");
        let msg = err.to_string();
        assert!(msg.contains("photos/broken.png"));
        assert!(msg.contains("invalid PNG signature"));
    }
}
