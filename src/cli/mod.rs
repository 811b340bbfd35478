/// Helpers for the `file-search` command-line binary
///
/// The MCP server does not use this module.
pub mod output;

pub use output::{OutputFormat, summary_line, write_report};

use anyhow::{Result, bail};

use crate::config::ServerConfig;
use crate::search::{SearchReport, search_report};
use crate::source::{read_text, resolve_path};

/// Validate inputs, read the file and search it
pub async fn run_search(file: &str, keyword: &str, config: &ServerConfig) -> Result<SearchReport> {
    if file.trim().is_empty() {
        bail!("Please provide a file to search");
    }
    if keyword.is_empty() {
        bail!("Please enter a keyword to search");
    }

    let path = resolve_path(file, config);
    let text = read_text(&path, config).await?;
    Ok(search_report(&text, keyword))
}
