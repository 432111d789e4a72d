//! 结果渲染
//!
//! Token 表、符号表、带插入符的错误诊断，以及 JSON 输出

use std::fmt::Write as _;

use serde::Serialize;

use crate::analyzer::Analysis;
use crate::error::{LexError, LexResult};
use crate::i18n::{format_message, get_message, messages, Locale};
use crate::lexer::Token;
use crate::symbols::SymbolTable;

/// 错误消息中的位置标记
pub const POSITION_MARKER: &str = "at position ";

/// 每个 token 一行：`位置: 类型\t文本`
pub fn render_tokens(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        let _ = writeln!(out, "{}: {}\t{}", token.position, token.kind, token.lexeme);
    }
    out
}

pub fn render_symbols(symbols: &SymbolTable, locale: Locale) -> String {
    if symbols.is_empty() {
        return format!("  {}\n", get_message(messages::MSG_REPORT_NO_SYMBOLS, locale));
    }
    let mut out = String::new();
    for name in symbols.iter() {
        let _ = writeln!(out, "  {}", name);
    }
    out
}

/// 完整的成功报告
pub fn render_analysis(source: &str, analysis: &Analysis, locale: Locale) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", format_message(messages::MSG_REPORT_EXPRESSION, locale, &[source]));
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", get_message(messages::MSG_REPORT_TOKENS, locale));
    out.push_str(&render_tokens(&analysis.tokens));
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", get_message(messages::MSG_REPORT_SYMBOLS, locale));
    out.push_str(&render_symbols(&analysis.symbols, locale));
    let _ = writeln!(out, "{}", get_message(messages::MSG_REPORT_VALID, locale));
    out
}

/// 从错误消息中解析 `at position N` 的偏移
pub fn caret_offset(message: &str) -> Option<usize> {
    let start = message.find(POSITION_MARKER)? + POSITION_MARKER.len();
    let digits: &str = &message[start..];
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse().ok()
}

/// 错误消息 + 源码 + 插入符
///
/// 插入符列按字符计数；制表符原样保留以便对齐
pub fn render_error(source: &str, error: &LexError, locale: Locale) -> String {
    let message = error.to_string();
    let mut out = String::new();
    let _ = writeln!(out, "{}", format_message(messages::MSG_REPORT_ERROR, locale, &[&message]));
    let _ = writeln!(out, "  {}", source);

    match caret_offset(&message) {
        Some(offset) => {
            let prefix = source.get(..offset).unwrap_or(source);
            let padding: String = prefix
                .chars()
                .map(|c| if c == '\t' { '\t' } else { ' ' })
                .collect();
            let _ = writeln!(out, "  {}^", padding);
        }
        None => {
            let _ = writeln!(out, "  {}", get_message(messages::MSG_REPORT_NO_POSITION, locale));
        }
    }
    out
}

#[derive(Serialize)]
struct ErrorRecord {
    code: &'static str,
    message: String,
    position: Option<usize>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Outcome<'a> {
    Success(&'a Analysis),
    Failure { error: ErrorRecord },
}

impl<'a> From<&'a LexResult<Analysis>> for Outcome<'a> {
    fn from(result: &'a LexResult<Analysis>) -> Self {
        match result {
            Ok(analysis) => Outcome::Success(analysis),
            Err(error) => Outcome::Failure {
                error: ErrorRecord {
                    code: error.code(),
                    message: error.to_string(),
                    position: error.position(),
                },
            },
        }
    }
}

#[derive(Serialize)]
struct BatchRecord<'a> {
    line: usize,
    expression: &'a str,
    result: Outcome<'a>,
}

/// 单个结果的 JSON
pub fn to_json(result: &LexResult<Analysis>) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&Outcome::from(result))
}

/// 批量结果的 JSON 数组，元素为 (行号, 表达式, 结果)
pub fn batch_to_json<'a, I>(entries: I) -> serde_json::Result<String>
where
    I: IntoIterator<Item = (usize, &'a str, &'a LexResult<Analysis>)>,
{
    let records: Vec<BatchRecord<'a>> = entries
        .into_iter()
        .map(|(line, expression, result)| BatchRecord {
            line,
            expression,
            result: Outcome::from(result),
        })
        .collect();
    serde_json::to_string_pretty(&records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::analyze;
    use crate::config::LexerConfig;

    #[test]
    fn test_render_tokens() {
        let analysis = analyze("3 + x", &LexerConfig::default()).unwrap();
        assert_eq!(
            render_tokens(&analysis.tokens),
            "0: NUMBER\t3\n2: OPERATOR\t+\n4: VARIABLE\tx\n"
        );
    }

    #[test]
    fn test_render_symbols() {
        let analysis = analyze("b + a", &LexerConfig::default()).unwrap();
        assert_eq!(render_symbols(&analysis.symbols, Locale::En), "  a\n  b\n");
        assert_eq!(
            render_symbols(&SymbolTable::new(), Locale::En),
            "  (no variables)\n"
        );
    }

    #[test]
    fn test_caret_offset() {
        assert_eq!(caret_offset("Misplaced comma at position 4"), Some(4));
        assert_eq!(caret_offset("at position 12, then more"), Some(12));
        assert_eq!(caret_offset("No tokens found in expression"), None);
        assert_eq!(caret_offset("at position x"), None);
    }

    #[test]
    fn test_render_error_with_caret() {
        let out = render_error("1 + )", &LexError::UnmatchedClosingParen(4), Locale::En);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Error: Unmatched closing parenthesis at position 4");
        assert_eq!(lines[1], "  1 + )");
        assert_eq!(lines[2], "      ^");
    }

    #[test]
    fn test_render_error_counts_chars() {
        // π 占两个字节，插入符按字符对齐
        let out = render_error("π , 1", &LexError::MisplacedComma(3), Locale::En);
        assert_eq!(out.lines().nth(2), Some("    ^"));
    }

    #[test]
    fn test_render_error_without_position() {
        let out = render_error("   ", &LexError::NoTokens, Locale::En);
        assert!(out.lines().nth(2).unwrap().contains("position unknown"));
    }

    #[test]
    fn test_json_success() {
        let result = analyze("sin(x)", &LexerConfig::default());
        let value: serde_json::Value = serde_json::from_str(&to_json(&result).unwrap()).unwrap();
        assert_eq!(value["tokens"][0]["kind"], "FUNCTION");
        assert_eq!(value["tokens"][2]["text"], "x");
        assert_eq!(value["tokens"][2]["position"], 4);
        assert_eq!(value["symbols"], serde_json::json!(["x"]));
    }

    #[test]
    fn test_json_failure() {
        let result = analyze("(1 + 2", &LexerConfig::default());
        let value: serde_json::Value = serde_json::from_str(&to_json(&result).unwrap()).unwrap();
        assert_eq!(value["error"]["code"], "unmatched_opening_paren");
        assert_eq!(value["error"]["position"], 0);
    }

    #[test]
    fn test_batch_json() {
        let ok = analyze("a", &LexerConfig::default());
        let err = analyze("", &LexerConfig::default());
        let json = batch_to_json(vec![(1, "a", &ok), (2, "", &err)]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["line"], 1);
        assert_eq!(value[1]["result"]["error"]["code"], "no_tokens");
        assert!(value[1]["result"]["error"]["position"].is_null());
    }
}
