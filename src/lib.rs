//! 数学表达式词法分析与结构校验
//!
//! 流水线：有限状态机扫描（同步检查括号平衡）→ 符号收集 → 相邻规则校验

pub mod analyzer;
pub mod batch;
pub mod cache;
pub mod config;
pub mod error;
pub mod i18n;
pub mod lexer;
pub mod report;
pub mod symbols;
pub mod validator;

pub use analyzer::{analyze, Analysis};
pub use config::LexerConfig;
pub use error::{LexError, LexResult};
pub use lexer::{tokenize, Scanner, Token, TokenKind};
pub use symbols::SymbolTable;
pub use validator::Validator;
