use std::sync::Arc;

use async_trait::async_trait;
use rust_mcp_sdk::schema::{
    CallToolRequest, CallToolRequestParams, CallToolResult, ListToolsRequest, ListToolsResult,
    RpcError, schema_utils::CallToolError,
};
use rust_mcp_sdk::{McpServer, mcp_server::ServerHandler};
use tracing::{debug, error, info, warn};

use crate::config::ServerConfig;
use crate::error::FileSearchError;
use crate::tools::{FileSearchTools, SearchFileTool};

/// Handler for MCP messages
///
/// Holds only the immutable configuration; every tool call is independent.
pub struct FileSearchServerHandler {
    config: Arc<ServerConfig>,
}

impl FileSearchServerHandler {
    pub fn new(config: ServerConfig) -> Self {
        info!("🔧 Initializing file search handler");
        Self {
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Resolve a tool call to the matching tool and run it
    pub async fn execute_tool(
        &self,
        params: CallToolRequestParams,
    ) -> std::result::Result<CallToolResult, CallToolError> {
        debug!("🛠️  Executing tool: {}", params.name);

        if params.name != SearchFileTool::tool_name() {
            warn!("❓ Rejecting unknown tool: {}", params.name);
            return Err(CallToolError::new(FileSearchError::UnknownTool(params.name)));
        }

        let tool_params = FileSearchTools::try_from(params).map_err(|e| {
            error!("❌ Failed to parse tool parameters: {}", e);
            CallToolError::new(FileSearchError::InvalidInput(format!(
                "Invalid tool parameters: {}",
                e
            )))
        })?;

        let result = match &tool_params {
            FileSearchTools::SearchFileTool(tool) => tool.call_tool(self).await,
        };

        result.map_err(|e| {
            error!("❌ Tool execution failed: {}", e);
            CallToolError::new(std::io::Error::other(format!(
                "Tool execution failed: {}",
                e
            )))
        })
    }
}

impl Default for FileSearchServerHandler {
    fn default() -> Self {
        Self::new(ServerConfig::default())
    }
}

#[async_trait]
impl ServerHandler for FileSearchServerHandler {
    async fn handle_list_tools_request(
        &self,
        _request: ListToolsRequest,
        _runtime: Arc<dyn McpServer>,
    ) -> std::result::Result<ListToolsResult, RpcError> {
        let tools = FileSearchTools::tools();
        debug!("📋 Returning {} available tools", tools.len());

        Ok(ListToolsResult {
            meta: None,
            next_cursor: None,
            tools,
        })
    }

    async fn handle_call_tool_request(
        &self,
        request: CallToolRequest,
        _runtime: Arc<dyn McpServer>,
    ) -> std::result::Result<CallToolResult, CallToolError> {
        self.execute_tool(request.params).await
    }
}
