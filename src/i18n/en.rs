//! English messages

use super::messages::*;

/// Get English message
pub fn get(key: &str) -> &'static str {
    match key {
        // Report
        MSG_REPORT_EXPRESSION => "Tokenizing expression: {}",
        MSG_REPORT_TOKENS => "Tokens found:",
        MSG_REPORT_SYMBOLS => "Symbol table:",
        MSG_REPORT_NO_SYMBOLS => "(no variables)",
        MSG_REPORT_VALID => "Syntax OK",
        MSG_REPORT_ERROR => "Error: {}",
        MSG_REPORT_NO_POSITION => "^ (position unknown)",

        // Batch
        MSG_BATCH_LINE => "Line {}: {}",
        MSG_BATCH_SUMMARY => "{} expression(s), {} failed",

        // CLI
        MSG_CLI_VERSION => "{} version {}",
        MSG_CLI_REPL_BANNER => "{} {} REPL",
        MSG_CLI_REPL_HINT => "Type 'exit' to quit.",
        MSG_CLI_CANNOT_READ_FILE => "Cannot read file {}: {}",

        _ => "Unknown message key",
    }
}
