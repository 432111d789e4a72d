//! 词法扫描器
//!
//! 逐字符驱动的有限状态机，将表达式字符串转换为 Token 序列。
//! 括号平衡在扫描时同步检查。

use tracing::{debug, trace};

use super::balancer::ParenBalancer;
use super::token::{Token, TokenKind};
use crate::config::LexerConfig;
use crate::error::LexResult;

/// 扫描状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Start,
    InNumber,
    InIdentifier,
}

/// 一次状态转移的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Transition {
    /// 当前字符已被消费，前进
    Consume,
    /// 当前字符未被消费，由新状态重新处理
    Reprocess,
    /// 输入结束
    Halt,
}

/// 词法扫描器
pub struct Scanner<'a> {
    /// 源码
    source: &'a str,
    /// 函数名配置
    config: &'a LexerConfig,
    /// 当前位置（字节偏移）
    current: usize,
    /// 当前词素起始位置
    start: usize,
    state: ScanState,
    balancer: ParenBalancer,
    tokens: Vec<Token>,
}

impl<'a> Scanner<'a> {
    /// 创建新的扫描器
    pub fn new(source: &'a str, config: &'a LexerConfig) -> Self {
        Self {
            source,
            config,
            current: 0,
            start: 0,
            state: ScanState::Start,
            balancer: ParenBalancer::new(),
            tokens: Vec::new(),
        }
    }

    /// 扫描所有 token
    ///
    /// 遇到第一个括号错误立即返回
    pub fn scan_tokens(mut self) -> LexResult<Vec<Token>> {
        loop {
            // None 即输入结束的哨兵
            let c = self.peek();
            match self.step(c)? {
                Transition::Consume => self.advance(c),
                Transition::Reprocess => {}
                Transition::Halt => break,
            }
        }

        self.balancer.finish()?;
        debug!(count = self.tokens.len(), "scanned tokens");
        Ok(self.tokens)
    }

    /// 状态转移函数
    fn step(&mut self, c: Option<char>) -> LexResult<Transition> {
        trace!(state = ?self.state, at = self.current, ?c, "step");
        match self.state {
            ScanState::Start => self.step_start(c),
            ScanState::InNumber => Ok(self.step_number(c)),
            ScanState::InIdentifier => Ok(self.step_identifier(c)),
        }
    }

    fn step_start(&mut self, c: Option<char>) -> LexResult<Transition> {
        let Some(c) = c else {
            return Ok(Transition::Halt);
        };
        let position = self.current;

        match c {
            c if is_blank(c) => {}
            c if c.is_ascii_digit() => self.begin(ScanState::InNumber),
            c if Self::is_identifier_start(c) => self.begin(ScanState::InIdentifier),
            '+' | '-' | '*' | '/' | '^' => self.emit_char(TokenKind::Operator, c),
            '(' => {
                self.balancer.push(position);
                self.emit_char(TokenKind::LParen, c);
            }
            ')' => {
                self.balancer.pop(position)?;
                self.emit_char(TokenKind::RParen, c);
            }
            ',' => self.emit_char(TokenKind::Comma, c),
            _ => self.emit_char(TokenKind::Unknown, c),
        }

        Ok(Transition::Consume)
    }

    /// 数字：数字和小数点都接受，不检查小数点个数
    fn step_number(&mut self, c: Option<char>) -> Transition {
        match c {
            Some(c) if c.is_ascii_digit() || c == '.' => Transition::Consume,
            _ => {
                self.flush(TokenKind::Number);
                Transition::Reprocess
            }
        }
    }

    fn step_identifier(&mut self, c: Option<char>) -> Transition {
        match c {
            Some(c) if Self::is_identifier_continue(c) => Transition::Consume,
            _ => {
                let kind = if self.config.is_function(self.lexeme()) {
                    TokenKind::Function
                } else {
                    TokenKind::Variable
                };
                self.flush(kind);
                Transition::Reprocess
            }
        }
    }

    /// 进入多字符词素状态
    fn begin(&mut self, state: ScanState) {
        self.start = self.current;
        self.state = state;
    }

    /// 输出缓冲中的词素并回到 Start
    fn flush(&mut self, kind: TokenKind) {
        let token = Token::new(kind, self.lexeme(), self.start);
        self.tokens.push(token);
        self.state = ScanState::Start;
    }

    /// 输出单字符 token
    fn emit_char(&mut self, kind: TokenKind, c: char) {
        let end = self.current + c.len_utf8();
        let token = Token::new(kind, &self.source[self.current..end], self.current);
        self.tokens.push(token);
    }

    /// 当前缓冲的词素
    fn lexeme(&self) -> &'a str {
        &self.source[self.start..self.current]
    }

    fn is_identifier_start(c: char) -> bool {
        c.is_ascii_alphabetic() || c == '_'
    }

    fn is_identifier_continue(c: char) -> bool {
        c.is_ascii_alphanumeric() || c == '_'
    }

    /// 查看当前字符
    fn peek(&self) -> Option<char> {
        self.source[self.current..].chars().next()
    }

    /// 消费当前字符
    fn advance(&mut self, c: Option<char>) {
        if let Some(c) = c {
            self.current += c.len_utf8();
        }
    }
}

/// 扫描时跳过的空白；其他空白类字符（\v、\f、U+00A0 等）作为 Unknown 输出
pub fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

/// 扫描整个字符串
pub fn tokenize(source: &str, config: &LexerConfig) -> LexResult<Vec<Token>> {
    Scanner::new(source, config).scan_tokens()
}
