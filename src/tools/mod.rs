// File search MCP tools

pub mod search_file;

pub use search_file::SearchFileTool;

use rust_mcp_sdk::tool_box;

tool_box!(FileSearchTools, [SearchFileTool]);
