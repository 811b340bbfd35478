use std::sync::Arc;

use tracing::{debug, error, info};

use file_search::config::ServerConfig;
use file_search::handler::FileSearchServerHandler;
use rust_mcp_sdk::schema::{
    Implementation, InitializeResult, LATEST_PROTOCOL_VERSION, ServerCapabilities,
    ServerCapabilitiesTools,
};

use rust_mcp_sdk::{
    McpServer, StdioTransport, TransportOptions,
    error::{McpSdkError, SdkResult},
    mcp_server::{ServerRuntime, server_runtime},
};

#[tokio::main]
async fn main() -> SdkResult<()> {
    let (config, config_source) = ServerConfig::resolve(None)
        .map_err(|e| McpSdkError::Io(std::io::Error::other(e.to_string())))?;

    let _log_guards = file_search::logging::init_server_logging(&config)
        .map_err(|e| McpSdkError::Io(std::io::Error::other(e.to_string())))?;
    config_source.warn_if_defaults();

    info!("🚀 Starting File Search MCP Server");
    debug!("Configuration ({:?}): {:?}", config_source, config);

    // STEP 1: Define server details and capabilities
    let server_details = InitializeResult {
        server_info: Implementation {
            name: "file-search-server".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            title: Some("File Search MCP Server".to_string()),
        },
        capabilities: ServerCapabilities {
            tools: Some(ServerCapabilitiesTools { list_changed: None }),
            ..Default::default()
        },
        meta: None,
        instructions: Some(
            "Use `search_file` with `filePath` and `keyword` to list every line of a file \
             containing the keyword (case-insensitive), with 1-based line numbers."
                .to_string(),
        ),
        protocol_version: LATEST_PROTOCOL_VERSION.to_string(),
    };

    info!("📋 Server configuration:");
    info!("  Name: {}", server_details.server_info.name);
    info!("  Version: {}", server_details.server_info.version);
    info!("  Protocol: {}", server_details.protocol_version);

    // STEP 2: Create stdio transport with default options
    let transport = StdioTransport::new(TransportOptions::default())?;
    debug!("✓ STDIO transport initialized");

    // STEP 3: Instantiate our handler
    let handler = FileSearchServerHandler::new(config);

    // STEP 4: Create MCP server
    let server: Arc<ServerRuntime> =
        server_runtime::create_server(server_details, transport, handler);

    // STEP 5: Start the server
    info!("🔥 File Search MCP Server running on stdio");
    if let Err(start_error) = server.start().await {
        error!("❌ Server failed to start: {}", start_error);
        eprintln!(
            "Server error: {}",
            start_error
                .rpc_error_message()
                .unwrap_or(&start_error.to_string())
        );
        return Err(start_error);
    }

    info!("🏁 File Search MCP Server stopped");
    Ok(())
}
