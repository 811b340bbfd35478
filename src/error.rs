use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FileSearchError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Not a regular file: {}", .0.display())]
    NotAFile(PathBuf),

    #[error("File too large: {} is {size} bytes (limit {limit})", .path.display())]
    FileTooLarge { path: PathBuf, size: u64, limit: u64 },

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl FileSearchError {
    /// True for failures that come from acquiring the file rather than from
    /// the caller's arguments.
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            Self::NotFound(_) | Self::NotAFile(_) | Self::FileTooLarge { .. } | Self::Io { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, FileSearchError>;
