//! 括号平衡检查
//!
//! 在扫描过程中同步记录未闭合 `(` 的位置，便于准确报告错误

use crate::error::{LexError, LexResult};

/// 括号栈
#[derive(Debug, Default)]
pub struct ParenBalancer {
    /// 未匹配的 `(` 字节偏移
    open: Vec<usize>,
}

impl ParenBalancer {
    pub fn new() -> Self {
        Self::default()
    }

    /// 记录一个 `(`
    pub fn push(&mut self, position: usize) {
        self.open.push(position);
    }

    /// 匹配一个 `)`，栈为空时报错
    pub fn pop(&mut self, position: usize) -> LexResult<usize> {
        self.open
            .pop()
            .ok_or(LexError::UnmatchedClosingParen(position))
    }

    /// 扫描结束时检查，报告栈顶（最内层）未闭合的位置
    pub fn finish(&self) -> LexResult<()> {
        match self.open.last() {
            Some(&position) => Err(LexError::UnmatchedOpeningParen(position)),
            None => Ok(()),
        }
    }

    /// 当前嵌套深度
    pub fn depth(&self) -> usize {
        self.open.len()
    }
}
