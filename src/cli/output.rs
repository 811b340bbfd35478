/// Output formatting for the `file-search` CLI
///
/// - Text: a "Found N matches" header followed by one `Line n: ...` per hit
/// - JSON: the pretty-printed report, same shape as the `search_file` tool
use std::io::Write;

use anyhow::Result;
use clap::ValueEnum;

use crate::search::SearchReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable listing
    #[default]
    Text,

    /// Pretty-printed JSON report
    Json,
}

/// "Found 1 match" / "Found 3 matches"
pub fn summary_line(count: usize) -> String {
    format!("Found {} match{}", count, if count == 1 { "" } else { "es" })
}

pub fn write_report<W: Write>(
    writer: &mut W,
    report: &SearchReport,
    keyword: &str,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            writeln!(writer, "{}", serde_json::to_string_pretty(report)?)?;
        }
        OutputFormat::Text => {
            if report.is_empty() {
                writeln!(writer, "No matches found for \"{}\"", keyword)?;
            } else {
                writeln!(writer, "{}", summary_line(report.matches))?;
                for hit in &report.results {
                    writeln!(writer, "Line {}: {}", hit.line, hit.content)?;
                }
            }
        }
    }
    writer.flush()?;
    Ok(())
}
