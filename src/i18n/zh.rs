//! 中文消息

use super::messages::*;

/// 获取中文消息
pub fn get(key: &str) -> &'static str {
    match key {
        // 报告
        MSG_REPORT_EXPRESSION => "分析表达式: {}",
        MSG_REPORT_TOKENS => "识别到的标记:",
        MSG_REPORT_SYMBOLS => "符号表:",
        MSG_REPORT_NO_SYMBOLS => "（没有变量）",
        MSG_REPORT_VALID => "语法正确",
        MSG_REPORT_ERROR => "错误: {}",
        MSG_REPORT_NO_POSITION => "^（位置未知）",

        // 批处理
        MSG_BATCH_LINE => "第 {} 行: {}",
        MSG_BATCH_SUMMARY => "共 {} 个表达式，{} 个失败",

        // 命令行
        MSG_CLI_VERSION => "{} 版本 {}",
        MSG_CLI_REPL_BANNER => "{} {} 交互模式",
        MSG_CLI_REPL_HINT => "输入 'exit' 退出。",
        MSG_CLI_CANNOT_READ_FILE => "无法读取文件 {}: {}",

        _ => "未知消息键",
    }
}
