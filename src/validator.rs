//! 语法校验
//!
//! 对完整的 Token 序列做一次线性扫描，只检查相邻关系：
//! 运算符的位置和逗号的前驱。不检查逗号是否位于函数参数列表内。

use tracing::debug;

use crate::error::{LexError, LexResult};
use crate::lexer::{Token, TokenKind};

/// 相邻规则校验器
pub struct Validator;

impl Validator {
    /// 校验 Token 序列，遇到第一个违规立即返回
    pub fn validate(tokens: &[Token]) -> LexResult<()> {
        if tokens.is_empty() {
            return Err(LexError::NoTokens);
        }

        let last = tokens.len() - 1;
        let mut last_kind: Option<TokenKind> = None;

        for (index, token) in tokens.iter().enumerate() {
            match token.kind {
                TokenKind::Operator => {
                    if index == 0 || index == last {
                        return Err(LexError::OperatorAtBoundary(token.position));
                    }
                    // 不支持一元运算符
                    if matches!(last_kind, Some(TokenKind::Operator | TokenKind::LParen)) {
                        return Err(LexError::InvalidOperatorSequence(token.position));
                    }
                }
                TokenKind::Comma => {
                    if !last_kind.is_some_and(TokenKind::is_value_end) {
                        return Err(LexError::MisplacedComma(token.position));
                    }
                }
                _ => {}
            }
            last_kind = Some(token.kind);
        }

        debug!(count = tokens.len(), "validated tokens");
        Ok(())
    }
}
