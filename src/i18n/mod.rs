//! 国际化模块
//!
//! 提供命令行文本的多语言支持，目前支持英文和中文。
//! 错误消息本身保持英文，诊断渲染依赖其中的 `at position` 标记。

pub mod en;
pub mod messages;
pub mod zh;

use std::str::FromStr;

/// 支持的语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    /// 英文（默认）
    #[default]
    En,
    /// 中文
    Zh,
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Locale::En),
            "zh" | "cn" | "chinese" => Ok(Locale::Zh),
            other => Err(format!("unsupported language: {}", other)),
        }
    }
}

/// 获取指定语言的消息
pub fn get_message(key: &str, locale: Locale) -> &'static str {
    match locale {
        Locale::En => en::get(key),
        Locale::Zh => zh::get(key),
    }
}

/// 获取带参数的消息（使用 {} 占位符）
pub fn format_message(key: &str, locale: Locale, args: &[&str]) -> String {
    let mut msg = get_message(key, locale).to_string();
    let mut from = 0;
    for arg in args {
        match msg[from..].find("{}") {
            Some(offset) => {
                let pos = from + offset;
                msg.replace_range(pos..pos + 2, arg);
                from = pos + arg.len();
            }
            None => break,
        }
    }
    msg
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_from_str() {
        assert_eq!("zh".parse::<Locale>(), Ok(Locale::Zh));
        assert_eq!("EN".parse::<Locale>(), Ok(Locale::En));
        assert!("fr".parse::<Locale>().is_err());
    }

    #[test]
    fn test_format_message() {
        let msg = format_message(messages::MSG_CLI_VERSION, Locale::En, &["exprlex", "0.1.0"]);
        assert_eq!(msg, "exprlex version 0.1.0");
    }

    #[test]
    fn test_placeholder_in_argument_is_not_replaced() {
        let msg = format_message(messages::MSG_BATCH_LINE, Locale::En, &["{}", "x"]);
        assert_eq!(msg, "Line {}: x");
    }

    #[test]
    fn test_every_key_has_translation() {
        for key in messages::ALL {
            assert_ne!(en::get(key), en::get("__missing__"), "en: {}", key);
            assert_ne!(zh::get(key), zh::get("__missing__"), "zh: {}", key);
        }
    }
}
