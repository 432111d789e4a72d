//! Token 定义
//!
//! 词法分析器产生的标记类型

use std::fmt;

use serde::Serialize;

/// Token 类型
///
/// 空白不产生 token，因此没有对应的变体
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    /// 数字字面量（整数或带小数点）
    #[serde(rename = "NUMBER")]
    Number,
    /// 变量名
    #[serde(rename = "VARIABLE")]
    Variable,
    /// 已知函数名
    #[serde(rename = "FUNCTION")]
    Function,
    /// + - * / ^
    #[serde(rename = "OPERATOR")]
    Operator,
    /// (
    #[serde(rename = "LPAREN")]
    LParen,
    /// )
    #[serde(rename = "RPAREN")]
    RParen,
    /// ,
    #[serde(rename = "COMMA")]
    Comma,
    /// 其他任意字符
    #[serde(rename = "UNKNOWN")]
    Unknown,
}

impl TokenKind {
    /// 显示名称
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Number => "NUMBER",
            TokenKind::Variable => "VARIABLE",
            TokenKind::Function => "FUNCTION",
            TokenKind::Operator => "OPERATOR",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::Comma => "COMMA",
            TokenKind::Unknown => "UNKNOWN",
        }
    }

    /// 能作为逗号前驱的类型
    pub fn is_value_end(self) -> bool {
        matches!(self, TokenKind::RParen | TokenKind::Variable | TokenKind::Number)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Token 结构
///
/// 创建后不再修改
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    /// Token 类型
    pub kind: TokenKind,
    /// 原始文本
    #[serde(rename = "text")]
    pub lexeme: String,
    /// 起始位置（字节偏移）
    pub position: usize,
}

impl Token {
    /// 创建新的 Token
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, position: usize) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            position,
        }
    }

    /// 结束位置（字节偏移，不含）
    pub fn end(&self) -> usize {
        self.position + self.lexeme.len()
    }

    /// 判断是否是指定类型
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({},{:?})", self.kind, self.position, self.lexeme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_end() {
        let token = Token::new(TokenKind::Variable, "theta", 32);
        assert_eq!(token.end(), 37);
        assert!(token.is(TokenKind::Variable));
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(TokenKind::LParen.name(), "LPAREN");
        assert_eq!(TokenKind::Unknown.to_string(), "UNKNOWN");
    }

    #[test]
    fn test_token_serialize() {
        let token = Token::new(TokenKind::Number, "4.2", 4);
        let json = serde_json::to_string(&token).unwrap();
        assert_eq!(json, r#"{"kind":"NUMBER","text":"4.2","position":4}"#);
    }
}
