//! Tests for tool listing and dispatch in the server handler

#[cfg(test)]
mod handler_tests {
    use crate::error::FileSearchError;
    use crate::handler::FileSearchServerHandler;
    use crate::tests::test_utils::{extract_text_from_result, write_fixture};
    use crate::tools::{FileSearchTools, SearchFileTool};
    use anyhow::Result;
    use rust_mcp_sdk::schema::CallToolRequestParams;
    use serde_json::{Value, json};

    fn params(value: Value) -> CallToolRequestParams {
        serde_json::from_value(value).expect("valid CallToolRequestParams")
    }

    #[test]
    fn test_only_search_file_is_listed() -> Result<()> {
        let tools = FileSearchTools::tools();

        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0].name, "search_file");
        assert_eq!(SearchFileTool::tool_name(), "search_file");

        let tool = serde_json::to_value(&tools[0])?;
        let properties = &tool["inputSchema"]["properties"];
        assert!(properties.get("filePath").is_some());
        assert!(properties.get("keyword").is_some());
        Ok(())
    }

    #[tokio::test]
    async fn test_dispatches_search_file() -> Result<()> {
        let (_dir, path) = write_fixture("a.txt", b"Alpha\nbeta\nALPHA");
        let handler = FileSearchServerHandler::default();

        let result = handler
            .execute_tool(params(json!({
                "name": "search_file",
                "arguments": { "filePath": path.to_string_lossy(), "keyword": "alpha" }
            })))
            .await
            .map_err(|e| anyhow::anyhow!("{}", e))?;

        let body: Value = serde_json::from_str(&extract_text_from_result(&result))?;
        assert_eq!(body["matches"], 2);
        assert_eq!(body["results"][1]["line"], 3);
        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_tool_rejected() {
        let handler = FileSearchServerHandler::default();

        let outcome = handler
            .execute_tool(params(json!({
                "name": "delete_file",
                "arguments": { "filePath": "x", "keyword": "y" }
            })))
            .await;

        let Err(err) = outcome else {
            panic!("unknown tool name should be rejected");
        };
        assert!(
            err.to_string().contains("Unknown tool: delete_file"),
            "got: {}",
            err
        );
    }

    #[tokio::test]
    async fn test_missing_keyword_argument_rejected() {
        let handler = FileSearchServerHandler::default();

        let outcome = handler
            .execute_tool(params(json!({
                "name": "search_file",
                "arguments": { "filePath": "x" }
            })))
            .await;

        assert!(outcome.is_err());
    }

    #[test]
    fn test_unknown_tool_message_names_tool() {
        let err = FileSearchError::UnknownTool("delete_file".to_string());

        assert_eq!(err.to_string(), "Unknown tool: delete_file");
        assert!(!err.is_io());
    }
}
