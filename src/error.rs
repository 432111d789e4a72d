//! 错误定义
//!
//! 分析流水线中所有可能产生的错误；任一错误都会终止当前表达式的处理

use thiserror::Error;

/// 词法/结构错误
///
/// 带位置的错误消息中都包含 `at position N`，诊断渲染依赖这个标记来放置插入符
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// `)` 没有对应的 `(`
    #[error("Unmatched closing parenthesis at position {0}")]
    UnmatchedClosingParen(usize),

    /// `(` 未闭合，报告最内层（最近一次）未闭合的位置
    #[error("Unmatched opening parenthesis at position {0}")]
    UnmatchedOpeningParen(usize),

    /// 没有任何 token（空输入或全是空白）
    #[error("No tokens found in expression")]
    NoTokens,

    /// 运算符出现在首位或末位
    #[error("Operator cannot be at the beginning or end at position {0}")]
    OperatorAtBoundary(usize),

    /// 运算符紧跟在运算符或 `(` 之后
    #[error("Invalid operator sequence at position {0}")]
    InvalidOperatorSequence(usize),

    /// 逗号前面不是值或 `)`
    #[error("Misplaced comma at position {0}")]
    MisplacedComma(usize),
}

impl LexError {
    /// 错误对应的源码字节偏移
    pub fn position(&self) -> Option<usize> {
        match self {
            LexError::UnmatchedClosingParen(pos)
            | LexError::UnmatchedOpeningParen(pos)
            | LexError::OperatorAtBoundary(pos)
            | LexError::InvalidOperatorSequence(pos)
            | LexError::MisplacedComma(pos) => Some(*pos),
            LexError::NoTokens => None,
        }
    }

    /// 稳定的机器可读错误码
    pub fn code(&self) -> &'static str {
        match self {
            LexError::UnmatchedClosingParen(_) => "unmatched_closing_paren",
            LexError::UnmatchedOpeningParen(_) => "unmatched_opening_paren",
            LexError::NoTokens => "no_tokens",
            LexError::OperatorAtBoundary(_) => "operator_at_boundary",
            LexError::InvalidOperatorSequence(_) => "invalid_operator_sequence",
            LexError::MisplacedComma(_) => "misplaced_comma",
        }
    }
}

pub type LexResult<T> = Result<T, LexError>;

/// 命令行层面的错误
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Cannot read file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_has_position_marker() {
        let err = LexError::UnmatchedClosingParen(4);
        assert_eq!(err.to_string(), "Unmatched closing parenthesis at position 4");
        assert!(LexError::MisplacedComma(12).to_string().contains("at position 12"));
        assert!(!LexError::NoTokens.to_string().contains("at position "));
    }

    #[test]
    fn test_error_position() {
        assert_eq!(LexError::OperatorAtBoundary(0).position(), Some(0));
        assert_eq!(LexError::InvalidOperatorSequence(7).position(), Some(7));
        assert_eq!(LexError::NoTokens.position(), None);
    }

    #[test]
    fn test_error_code() {
        assert_eq!(LexError::UnmatchedOpeningParen(0).code(), "unmatched_opening_paren");
        assert_eq!(LexError::NoTokens.code(), "no_tokens");
    }

    #[test]
    fn test_cli_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let cli_err: CliError = io_err.into();
        assert!(matches!(cli_err, CliError::Io(_)));
        assert!(cli_err.to_string().contains("missing"));
    }
}
