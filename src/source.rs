//! File acquisition for the search
//!
//! Turns a user-supplied path into the full text of the file. Failures here
//! are reported as errors; an empty or non-matching file is not a failure.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::ServerConfig;
use crate::error::{FileSearchError, Result};

/// Expand `~` and anchor relative paths at the configured base directory.
pub fn resolve_path(raw: &str, config: &ServerConfig) -> PathBuf {
    let expanded = PathBuf::from(shellexpand::tilde(raw).to_string());

    match &config.base_dir {
        Some(base) if expanded.is_relative() => base.join(expanded),
        _ => expanded,
    }
}

/// Read the whole file at `path` as text.
///
/// Invalid UTF-8 sequences are replaced with U+FFFD rather than rejected.
pub async fn read_text(path: &Path, config: &ServerConfig) -> Result<String> {
    let metadata = tokio::fs::metadata(path)
        .await
        .map_err(|e| io_error(path, e))?;

    if !metadata.is_file() {
        return Err(FileSearchError::NotAFile(path.to_path_buf()));
    }

    if metadata.len() > config.max_file_size {
        return Err(FileSearchError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            limit: config.max_file_size,
        });
    }

    let bytes = tokio::fs::read(path).await.map_err(|e| io_error(path, e))?;
    debug!("Read {} bytes from {}", bytes.len(), path.display());

    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    })
}

fn io_error(path: &Path, source: std::io::Error) -> FileSearchError {
    match source.kind() {
        ErrorKind::NotFound => FileSearchError::NotFound(path.to_path_buf()),
        _ => FileSearchError::Io {
            path: path.to_path_buf(),
            source,
        },
    }
}
