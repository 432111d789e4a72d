//! 消息键

// 报告
pub const MSG_REPORT_EXPRESSION: &str = "report.expression";
pub const MSG_REPORT_TOKENS: &str = "report.tokens";
pub const MSG_REPORT_SYMBOLS: &str = "report.symbols";
pub const MSG_REPORT_NO_SYMBOLS: &str = "report.no_symbols";
pub const MSG_REPORT_VALID: &str = "report.valid";
pub const MSG_REPORT_ERROR: &str = "report.error";
pub const MSG_REPORT_NO_POSITION: &str = "report.no_position";

// 批处理
pub const MSG_BATCH_LINE: &str = "batch.line";
pub const MSG_BATCH_SUMMARY: &str = "batch.summary";

// 命令行
pub const MSG_CLI_VERSION: &str = "cli.version";
pub const MSG_CLI_REPL_BANNER: &str = "cli.repl_banner";
pub const MSG_CLI_REPL_HINT: &str = "cli.repl_hint";
pub const MSG_CLI_CANNOT_READ_FILE: &str = "cli.cannot_read_file";

pub const ALL: &[&str] = &[
    MSG_REPORT_EXPRESSION,
    MSG_REPORT_TOKENS,
    MSG_REPORT_SYMBOLS,
    MSG_REPORT_NO_SYMBOLS,
    MSG_REPORT_VALID,
    MSG_REPORT_ERROR,
    MSG_REPORT_NO_POSITION,
    MSG_BATCH_LINE,
    MSG_BATCH_SUMMARY,
    MSG_CLI_VERSION,
    MSG_CLI_REPL_BANNER,
    MSG_CLI_REPL_HINT,
    MSG_CLI_CANNOT_READ_FILE,
];
