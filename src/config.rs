//! 配置模块
//!
//! 工具相关的常量以及传给扫描器的不可变配置

use std::collections::HashSet;

/// 工具名称
pub const TOOL_NAME: &str = "exprlex";

/// 版本号
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// 默认识别的函数名
pub const DEFAULT_FUNCTIONS: &[&str] = &["sin", "cos", "tan", "log", "exp", "sqrt"];

/// 批处理任务队列容量
pub const BATCH_QUEUE_CAPACITY: usize = 1024;

/// 默认工作线程数
pub fn default_workers() -> usize {
    num_cpus::get()
}

/// 词法分析配置
///
/// 创建后不可修改；扫描器只持有它的引用
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexerConfig {
    functions: HashSet<String>,
}

impl LexerConfig {
    /// 在默认函数集合之外追加函数名
    pub fn with_functions<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut config = Self::default();
        config.functions.extend(extra.into_iter().map(Into::into));
        config
    }

    /// 判断标识符是否是已知函数
    pub fn is_function(&self, name: &str) -> bool {
        self.functions.contains(name)
    }

    /// 已知函数名（排序后）
    pub fn functions(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.functions.iter().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            functions: DEFAULT_FUNCTIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}
