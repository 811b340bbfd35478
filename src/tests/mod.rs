// File Search test suite
//
// Compiled only under cfg(test) from lib.rs. Fixtures are written to
// temporary directories; nothing touches the working tree.




// ============================================================================
// MCP TESTS - search_file tool and server handler
// ============================================================================
pub mod handler_tests;

// ============================================================================
// CLI TESTS - Output rendering and input validation
// ============================================================================
pub mod cli_tests;
