//! 分析流水线
//!
//! 扫描（同步检查括号）→ 收集符号 → 相邻规则校验。
//! 每次调用都构造新的状态，调用之间不共享任何可变数据。

use serde::Serialize;
use tracing::debug;

use crate::config::LexerConfig;
use crate::error::LexResult;
use crate::lexer::{Scanner, Token};
use crate::symbols::SymbolTable;
use crate::validator::Validator;

/// 一次成功分析的结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    pub tokens: Vec<Token>,
    pub symbols: SymbolTable,
}

/// 分析单个表达式
pub fn analyze(source: &str, config: &LexerConfig) -> LexResult<Analysis> {
    let tokens = Scanner::new(source, config).scan_tokens()?;
    let symbols = SymbolTable::collect(&tokens);
    Validator::validate(&tokens)?;

    debug!(tokens = tokens.len(), symbols = symbols.len(), "analysis complete");
    Ok(Analysis { tokens, symbols })
}
