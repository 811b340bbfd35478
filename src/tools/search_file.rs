//! `search_file` tool: read a file and return its lines containing a keyword

use anyhow::Result;
use rust_mcp_sdk::macros::{JsonSchema, mcp_tool};
use rust_mcp_sdk::schema::{CallToolResult, TextContent};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::FileSearchError;
use crate::handler::FileSearchServerHandler;
use crate::search::{SearchReport, search_report};
use crate::source::{read_text, resolve_path};

#[mcp_tool(
    name = "search_file",
    description = "Search for a keyword within a file and return matching lines",
    title = "Search File",
    idempotent_hint = true,
    destructive_hint = false,
    open_world_hint = false,
    read_only_hint = true
)]
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct SearchFileTool {
    /// Path to the file to search
    #[serde(rename = "filePath")]
    pub file_path: String,
    /// Keyword to search for in the file (case-insensitive)
    pub keyword: String,
}

impl SearchFileTool {
    pub fn new(file_path: impl Into<String>, keyword: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            keyword: keyword.into(),
        }
    }

    pub async fn call_tool(&self, handler: &FileSearchServerHandler) -> Result<CallToolResult> {
        debug!("🔍 search_file: '{}' in {}", self.keyword, self.file_path);

        match self.run(handler).await {
            Ok(report) => {
                info!(
                    "✅ Found {} matches for '{}' in {}",
                    report.matches, self.keyword, self.file_path
                );
                let body = serde_json::to_string_pretty(&report)?;
                Ok(CallToolResult::text_content(vec![TextContent::from(body)]))
            }
            Err(e) => {
                if e.is_io() {
                    warn!("⚠️ search_file could not read {}: {}", self.file_path, e);
                } else {
                    debug!("search_file rejected input: {}", e);
                }
                error_result(&e)
            }
        }
    }

    async fn run(
        &self,
        handler: &FileSearchServerHandler,
    ) -> std::result::Result<SearchReport, FileSearchError> {
        if self.file_path.trim().is_empty() {
            return Err(FileSearchError::InvalidInput(
                "filePath must not be empty".to_string(),
            ));
        }
        if self.keyword.is_empty() {
            return Err(FileSearchError::InvalidInput(
                "keyword must not be empty".to_string(),
            ));
        }

        let config = handler.config();
        let path = resolve_path(&self.file_path, config);
        let text = read_text(&path, config).await?;

        Ok(search_report(&text, &self.keyword))
    }
}

/// Build an `isError` result whose text is `{"error": "<message>"}`
fn error_result(err: &FileSearchError) -> Result<CallToolResult> {
    let body = serde_json::to_string(&serde_json::json!({ "error": err.to_string() }))?;
    let mut result = CallToolResult::text_content(vec![TextContent::from(body)]);
    result.is_error = Some(true);
    Ok(result)
}
