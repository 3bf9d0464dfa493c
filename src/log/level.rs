use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// 日志级别
///
/// 数值决定过滤顺序和颜色选择，TRACE 是在标准级别之下新增的级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LogLevel {
    /// 最详细的日志（低于 Debug）
    Trace = 5,
    /// 调试信息
    Debug = 10,
    /// 一般信息
    Info = 20,
    /// 警告信息
    Warning = 30,
    /// 错误信息
    Error = 40,
    /// 致命错误
    Critical = 50,
}

impl LogLevel {
    /// 获取级别对应的数值
    pub fn value(&self) -> i32 {
        *self as i32
    }

    /// 根据数值查找级别
    ///
    /// 未注册的数值返回 None，调用方需要自行处理降级（比如无颜色输出）
    pub fn from_value(value: i32) -> Option<LogLevel> {
        match value {
            5 => Some(LogLevel::Trace),
            10 => Some(LogLevel::Debug),
            20 => Some(LogLevel::Info),
            30 => Some(LogLevel::Warning),
            40 => Some(LogLevel::Error),
            50 => Some(LogLevel::Critical),
            _ => None,
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warning" => Ok(LogLevel::Warning),
            "error" => Ok(LogLevel::Error),
            "critical" => Ok(LogLevel::Critical),
            _ => Err(format!("invalid log level: {}", s)),
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "TRACE"),
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warning => write!(f, "WARNING"),
            LogLevel::Error => write!(f, "ERROR"),
            LogLevel::Critical => write!(f, "CRITICAL"),
        }
    }
}
