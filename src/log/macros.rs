//! 日志宏模块
//!
//! 提供消息插值和附加数据书写的日志宏，插值在调用点只发生一次，
//! 所有格式化器看到的都是同一份最终消息文本。
//!
//! 插值参数和附加数据表达式在级别检查之后才求值，
//! 被阈值抑制的调用不支付任何构造成本
//!
//! # 示例
//!
//! ```ignore
//! use logx::log::*;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let logger = get_logger("app.main");
//!
//!     // 简单日志
//!     info!(logger, "application started")?;
//!
//!     // 消息插值
//!     info!(logger, "listening on port {}", 8080)?;
//!
//!     // 带附加数据的日志
//!     info!(logger, "user logged in", "user_id" => 12345, "username" => "alice")?;
//!
//!     Ok(())
//! }
//! ```

/// 记录 INFO 级别日志
///
/// # 示例
///
/// ```ignore
/// info!(logger, "user logged in");
/// info!(logger, "user {} logged in", name);
/// info!(logger, "user action", "user_id" => 12345, "action" => "login");
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $msg:expr) => {
        $logger.info($msg).await
    };
    ($logger:expr, $msg:expr, $($key:tt => $value:expr),+ $(,)?) => {
        if $logger.enabled_for($crate::log::LogLevel::Info) {
            $logger.infom($msg, vec![$(($key, $crate::log::MetadataValue::from($value))),+]).await
        } else {
            Ok(())
        }
    };
    ($logger:expr, $fmt:literal, $($arg:expr),+ $(,)?) => {
        if $logger.enabled_for($crate::log::LogLevel::Info) {
            $logger.info(format!($fmt, $($arg),+)).await
        } else {
            Ok(())
        }
    };
}

/// 记录 DEBUG 级别日志
#[macro_export]
macro_rules! debug {
    ($logger:expr, $msg:expr) => {
        $logger.debug($msg).await
    };
    ($logger:expr, $msg:expr, $($key:tt => $value:expr),+ $(,)?) => {
        if $logger.enabled_for($crate::log::LogLevel::Debug) {
            $logger.debugm($msg, vec![$(($key, $crate::log::MetadataValue::from($value))),+]).await
        } else {
            Ok(())
        }
    };
    ($logger:expr, $fmt:literal, $($arg:expr),+ $(,)?) => {
        if $logger.enabled_for($crate::log::LogLevel::Debug) {
            $logger.debug(format!($fmt, $($arg),+)).await
        } else {
            Ok(())
        }
    };
}

/// 记录 WARNING 级别日志
#[macro_export]
macro_rules! warning {
    ($logger:expr, $msg:expr) => {
        $logger.warning($msg).await
    };
    ($logger:expr, $msg:expr, $($key:tt => $value:expr),+ $(,)?) => {
        if $logger.enabled_for($crate::log::LogLevel::Warning) {
            $logger.warningm($msg, vec![$(($key, $crate::log::MetadataValue::from($value))),+]).await
        } else {
            Ok(())
        }
    };
    ($logger:expr, $fmt:literal, $($arg:expr),+ $(,)?) => {
        if $logger.enabled_for($crate::log::LogLevel::Warning) {
            $logger.warning(format!($fmt, $($arg),+)).await
        } else {
            Ok(())
        }
    };
}

/// 记录 ERROR 级别日志
#[macro_export]
macro_rules! error {
    ($logger:expr, $msg:expr) => {
        $logger.error($msg).await
    };
    ($logger:expr, $msg:expr, $($key:tt => $value:expr),+ $(,)?) => {
        if $logger.enabled_for($crate::log::LogLevel::Error) {
            $logger.errorm($msg, vec![$(($key, $crate::log::MetadataValue::from($value))),+]).await
        } else {
            Ok(())
        }
    };
    ($logger:expr, $fmt:literal, $($arg:expr),+ $(,)?) => {
        if $logger.enabled_for($crate::log::LogLevel::Error) {
            $logger.error(format!($fmt, $($arg),+)).await
        } else {
            Ok(())
        }
    };
}

/// 记录 TRACE 级别日志
#[macro_export]
macro_rules! trace {
    ($logger:expr, $msg:expr) => {
        $logger.trace($msg).await
    };
    ($logger:expr, $msg:expr, $($key:tt => $value:expr),+ $(,)?) => {
        if $logger.enabled_for($crate::log::LogLevel::Trace) {
            $logger.tracem($msg, vec![$(($key, $crate::log::MetadataValue::from($value))),+]).await
        } else {
            Ok(())
        }
    };
    ($logger:expr, $fmt:literal, $($arg:expr),+ $(,)?) => {
        if $logger.enabled_for($crate::log::LogLevel::Trace) {
            $logger.trace(format!($fmt, $($arg),+)).await
        } else {
            Ok(())
        }
    };
}

/// 记录 CRITICAL 级别日志
#[macro_export]
macro_rules! critical {
    ($logger:expr, $msg:expr) => {
        $logger.critical($msg).await
    };
    ($logger:expr, $msg:expr, $($key:tt => $value:expr),+ $(,)?) => {
        if $logger.enabled_for($crate::log::LogLevel::Critical) {
            $logger.criticalm($msg, vec![$(($key, $crate::log::MetadataValue::from($value))),+]).await
        } else {
            Ok(())
        }
    };
    ($logger:expr, $fmt:literal, $($arg:expr),+ $(,)?) => {
        if $logger.enabled_for($crate::log::LogLevel::Critical) {
            $logger.critical(format!($fmt, $($arg),+)).await
        } else {
            Ok(())
        }
    };
}

#[cfg(test)]
mod tests {
    // 宏的测试需要实际的 Logger 实例
    // 见 tests/setup_integration_tests.rs 的集成测试
}
