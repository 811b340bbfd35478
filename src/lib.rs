// File Search - case-insensitive line search served as an MCP tool
//!
//! The search itself lives in [`search`] and is a pure function over
//! `(text, keyword)`. Everything else reads the file, exposes the search
//! as the `search_file` MCP tool, or drives it from the command line.

pub mod cli;
pub mod config;
pub mod error;
pub mod handler;
pub mod logging;
pub mod search;
pub mod source;
pub mod tools;

#[cfg(test)]
pub mod tests;

pub use config::ServerConfig;
pub use error::FileSearchError;
pub use handler::FileSearchServerHandler;
pub use search::{LineMatch, SearchReport, search};
pub use tools::SearchFileTool;
