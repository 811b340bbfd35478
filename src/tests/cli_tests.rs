//! Tests for CLI rendering and validation

#[cfg(test)]
mod cli_tests {
    use crate::cli::{OutputFormat, run_search, summary_line, write_report};
    use crate::config::ServerConfig;
    use crate::search::{LineMatch, SearchReport};
    use crate::tests::test_utils::write_fixture;
    use anyhow::Result;
    use clap::ValueEnum;

    fn render(report: &SearchReport, keyword: &str, format: OutputFormat) -> String {
        let mut buffer = Vec::new();
        write_report(&mut buffer, report, keyword, format).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_summary_pluralization() {
        assert_eq!(summary_line(0), "Found 0 matches");
        assert_eq!(summary_line(1), "Found 1 match");
        assert_eq!(summary_line(2), "Found 2 matches");
    }

    #[test]
    fn test_text_output_lists_lines() {
        let report = SearchReport::from(vec![
            LineMatch::new(2, "let needle = 1;"),
            LineMatch::new(9, "  // Needle"),
        ]);

        assert_eq!(
            render(&report, "needle", OutputFormat::Text),
            "Found 2 matches\nLine 2: let needle = 1;\nLine 9:   // Needle\n"
        );
    }

    #[test]
    fn test_text_output_without_matches() {
        let report = SearchReport::from(Vec::new());

        assert_eq!(
            render(&report, "xyz", OutputFormat::Text),
            "No matches found for \"xyz\"\n"
        );
    }

    #[test]
    fn test_json_output_round_trips() -> Result<()> {
        let report = SearchReport::from(vec![LineMatch::new(1, "hit")]);

        let parsed: SearchReport =
            serde_json::from_str(&render(&report, "hit", OutputFormat::Json))?;
        assert_eq!(parsed, report);
        Ok(())
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!(OutputFormat::from_str("text", true), Ok(OutputFormat::Text));
        assert_eq!(OutputFormat::from_str("JSON", true), Ok(OutputFormat::Json));
        assert!(OutputFormat::from_str("yaml", true).is_err());

        let names: Vec<String> = OutputFormat::value_variants()
            .iter()
            .filter_map(|v| v.to_possible_value())
            .map(|v| v.get_name().to_string())
            .collect();
        assert_eq!(names, vec!["text", "json"]);
    }

    #[tokio::test]
    async fn test_run_search_requires_keyword() {
        let (_dir, path) = write_fixture("f.txt", b"abc");

        let err = run_search(&path.to_string_lossy(), "", &ServerConfig::default())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Please enter a keyword to search");
    }

    #[tokio::test]
    async fn test_run_search_reads_and_filters() -> Result<()> {
        let (_dir, path) = write_fixture("f.txt", b"Error: boom\ninfo: ok\nerror again");

        let report = run_search(&path.to_string_lossy(), "ERROR", &ServerConfig::default()).await?;
        assert_eq!(report.matches, 2);
        assert_eq!(report.results[1], LineMatch::new(3, "error again"));
        Ok(())
    }

    #[tokio::test]
    async fn test_run_search_propagates_io_failure() {
        let dir = tempfile::TempDir::new().unwrap();
        let missing = dir.path().join("gone.txt");

        let err = run_search(&missing.to_string_lossy(), "x", &ServerConfig::default())
            .await
            .unwrap_err();
        assert!(err.to_string().starts_with("File not found"));
    }
}
