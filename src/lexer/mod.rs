//! 词法分析模块
//!
//! 将表达式字符串转换为 Token 流

pub mod balancer;
pub mod scanner;
pub mod token;

pub use balancer::ParenBalancer;
pub use scanner::{is_blank, tokenize, Scanner};
pub use token::{Token, TokenKind};
