use crate::log::formatter::LogFormatter;
use crate::log::level::LogLevel;
use crate::log::record::LogRecord;
use anyhow::Result;
use chrono::{DateTime, Local};
use serde::Deserialize;

/// 按级别着色的 ANSI 颜色表
pub const CYAN: &str = "\x1b[36m";
pub const BLUE: &str = "\x1b[34m";
pub const GRAY: &str = "\x1b[37m";
pub const YELLOW: &str = "\x1b[33m";
pub const RED: &str = "\x1b[31m";
pub const BOLD_RED: &str = "\x1b[31;1m";
pub const RESET: &str = "\x1b[0m";

pub const BOLD: &str = "\x1b[1m";
pub const RESET_BOLD: &str = "\x1b[0m";

/// ColorFormatter 配置
#[derive(Debug, Clone, Deserialize)]
pub struct ColorFormatterConfig {
    /// logger 名称的最大显示宽度；超出时只保留末尾的 truncate_width 个字符。
    /// None 表示不截断（文件输出使用完整名称）
    #[serde(default)]
    pub truncate_width: Option<usize>,

    /// 是否输出 ANSI 颜色
    #[serde(default)]
    pub colored: bool,
}

/// 颜色格式化器
///
/// 将日志记录格式化为单行文本：
/// `<时间戳> - [<级别>] - <粗体>名称<重置> - <消息>`，
/// 整行按级别颜色包裹（colored 开启时）
pub struct ColorFormatter {
    config: ColorFormatterConfig,
}

impl ColorFormatter {
    pub fn new(config: ColorFormatterConfig) -> Self {
        Self { config }
    }
}

impl LogFormatter for ColorFormatter {
    fn format(&self, record: &LogRecord) -> Result<String> {
        // 截断发生在局部副本上，记录本身保持不变，
        // 其他 handler 看到的永远是完整名称
        let name = truncate_name(&record.name, self.config.truncate_width);

        let timestamp: DateTime<Local> = record.timestamp.into();

        let mut result = String::with_capacity(64 + name.len() + record.message.len());

        // 按数值查表选择颜色，查不到时按无颜色模板降级
        let color = if self.config.colored {
            level_color(record.level.value())
        } else {
            None
        };

        if let Some(color) = color {
            result.push_str(color);
        }

        use std::fmt::Write;
        write!(
            result,
            "{} - [{}] - ",
            timestamp.format("%Y-%m-%d %H:%M:%S,%3f"),
            record.level
        )
        .unwrap();

        if self.config.colored {
            result.push_str(BOLD);
        }
        result.push_str(&name);
        if self.config.colored {
            result.push_str(RESET_BOLD);
        }

        result.push_str(" - ");
        result.push_str(&record.message);

        if color.is_some() {
            result.push_str(RESET);
        }

        Ok(result)
    }
}

/// 级别数值到颜色的固定映射，未注册的数值返回 None
fn level_color(value: i32) -> Option<&'static str> {
    match LogLevel::from_value(value)? {
        LogLevel::Trace => Some(CYAN),
        LogLevel::Debug => Some(BLUE),
        LogLevel::Info => Some(GRAY),
        LogLevel::Warning => Some(YELLOW),
        LogLevel::Error => Some(RED),
        LogLevel::Critical => Some(BOLD_RED),
    }
}

/// 保留名称末尾 width 个字符（层级名从右往左读最有信息量）
fn truncate_name(name: &str, width: Option<usize>) -> String {
    match width {
        Some(width) => {
            let count = name.chars().count();
            if count > width {
                name.chars().skip(count - width).collect()
            } else {
                name.to_string()
            }
        }
        None => name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_formatter(truncate_width: Option<usize>, colored: bool) -> ColorFormatter {
        ColorFormatter::new(ColorFormatterConfig {
            truncate_width,
            colored,
        })
    }

    #[test]
    fn test_format_each_level_color() {
        let formatter = make_formatter(Some(15), true);

        let cases = [
            (LogLevel::Trace, CYAN),
            (LogLevel::Debug, BLUE),
            (LogLevel::Info, GRAY),
            (LogLevel::Warning, YELLOW),
            (LogLevel::Error, RED),
            (LogLevel::Critical, BOLD_RED),
        ];

        for (level, color) in cases {
            let record = LogRecord::new(level, "test", "msg");
            let formatted = formatter.format(&record).unwrap();

            assert!(
                formatted.starts_with(color),
                "{} should start with its color escape",
                level
            );
            assert!(
                formatted.ends_with(RESET),
                "{} should end with the reset escape",
                level
            );
        }
    }

    #[test]
    fn test_format_template() {
        let formatter = make_formatter(Some(15), false);
        let record = LogRecord::new(LogLevel::Info, "app.main", "hello world");

        let formatted = formatter.format(&record).unwrap();
        println!("{}", formatted);

        assert!(formatted.contains(" - [INFO] - app.main - hello world"));
        // 无颜色模式下不能出现任何转义序列
        assert!(!formatted.contains('\x1b'));
    }

    #[test]
    fn test_format_truncates_long_name() {
        let formatter = make_formatter(Some(15), false);
        let long_name = "prefix_".to_string() + &"suffix".repeat(5); // 37 字符
        let record = LogRecord::new(LogLevel::Info, long_name.clone(), "msg");

        let formatted = formatter.format(&record).unwrap();

        let expected: String = long_name.chars().skip(long_name.len() - 15).collect();
        assert!(formatted.contains(&expected));
        assert!(!formatted.contains(&long_name));
        // 记录本身不被修改
        assert_eq!(record.name, long_name);
    }

    #[test]
    fn test_format_short_name_unchanged() {
        let formatter = make_formatter(Some(15), false);
        let record = LogRecord::new(LogLevel::Info, "mylogger", "msg");

        let formatted = formatter.format(&record).unwrap();
        assert!(formatted.contains(" - mylogger - "));
    }

    #[test]
    fn test_format_no_truncation_when_width_none() {
        let formatter = make_formatter(None, false);
        let long_name = "a.very.long.hierarchical.logger.name";
        let record = LogRecord::new(LogLevel::Info, long_name, "msg");

        let formatted = formatter.format(&record).unwrap();
        assert!(formatted.contains(long_name));
    }

    #[test]
    fn test_format_bold_name_when_colored() {
        let formatter = make_formatter(Some(15), true);
        let record = LogRecord::new(LogLevel::Info, "app", "msg");

        let formatted = formatter.format(&record).unwrap();
        assert!(formatted.contains(&format!("{}app{}", BOLD, RESET_BOLD)));
    }

    #[test]
    fn test_format_timestamp_shape() {
        let formatter = make_formatter(Some(15), false);
        let record = LogRecord::new(LogLevel::Info, "app", "msg");

        let formatted = formatter.format(&record).unwrap();

        // 形如 2025-01-19 12:34:56,789
        let timestamp = formatted.split(" - ").next().unwrap();
        assert_eq!(timestamp.len(), 23);
        assert!(timestamp.contains(','));
    }

    #[test]
    fn test_format_idempotent() {
        let formatter = make_formatter(Some(10), true);
        let record = LogRecord::new(LogLevel::Warning, "a.long.logger.name", "msg");

        let first = formatter.format(&record).unwrap();
        let second = formatter.format(&record).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_truncate_name_multibyte() {
        // 截断按字符计数，不能切断 UTF-8 编码
        let name = "模块.子模块.叶子";
        let truncated = truncate_name(name, Some(2));
        assert_eq!(truncated, "叶子");
    }
}
