//! 符号收集
//!
//! 从 Token 序列中收集不重复的变量名

use std::collections::BTreeSet;

use serde::Serialize;

use crate::lexer::{Token, TokenKind};

/// 符号表
///
/// 按字典序迭代，保证输出可复现
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SymbolTable {
    names: BTreeSet<String>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// 收集所有 Variable token 的文本
    pub fn collect(tokens: &[Token]) -> Self {
        let names = tokens
            .iter()
            .filter(|token| token.is(TokenKind::Variable))
            .map(|token| token.lexeme.clone())
            .collect();
        Self { names }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}
