use crate::log::level::LogLevel;
use crate::log::logger::Logger;
use crate::log::record::{LogRecord, MetadataValue};
use crate::log::registry::LoggerRegistry;
use anyhow::Result;
use std::sync::Arc;

/// 默认 logger 的名称（层级根）
pub const ROOT_LOGGER: &str = "root";

/// 进程级 LoggerRegistry 单例
///
/// 初始状态没有任何 handler，需要先调用 setup_logging 装配输出
static GLOBAL_REGISTRY: once_cell::sync::Lazy<Arc<LoggerRegistry>> =
    once_cell::sync::Lazy::new(|| Arc::new(LoggerRegistry::new()));

/// 获取全局 LoggerRegistry
pub fn global_registry() -> Arc<LoggerRegistry> {
    Arc::clone(&GLOBAL_REGISTRY)
}

/// 按层级名称获取 logger（全局）
pub fn get_logger(name: &str) -> Arc<Logger> {
    global_registry().get_logger(name)
}

/// 获取根 logger（全局）
pub fn get_root_logger() -> Arc<Logger> {
    global_registry().get_logger(ROOT_LOGGER)
}

// ========== 根 logger 的便捷 log 方法 ==========

/// 使用根 logger 记录日志
pub async fn log(record: LogRecord) -> Result<()> {
    get_root_logger().log(record).await
}

/// 使用根 logger 记录带附加数据的日志
pub async fn logm(
    level: LogLevel,
    message: impl Into<String>,
    extra: impl IntoIterator<Item = (impl Into<String>, MetadataValue)>,
) -> Result<()> {
    get_root_logger().logm(level, message, extra).await
}

/// 使用根 logger 记录 TRACE 级别日志
pub async fn trace(message: impl Into<String>) -> Result<()> {
    get_root_logger().trace(message).await
}

/// 使用根 logger 记录 DEBUG 级别日志
pub async fn debug(message: impl Into<String>) -> Result<()> {
    get_root_logger().debug(message).await
}

/// 使用根 logger 记录 INFO 级别日志
pub async fn info(message: impl Into<String>) -> Result<()> {
    get_root_logger().info(message).await
}

/// 使用根 logger 记录 WARNING 级别日志
pub async fn warning(message: impl Into<String>) -> Result<()> {
    get_root_logger().warning(message).await
}

/// 使用根 logger 记录 ERROR 级别日志
pub async fn error(message: impl Into<String>) -> Result<()> {
    get_root_logger().error(message).await
}

/// 使用根 logger 记录 CRITICAL 级别日志
pub async fn critical(message: impl Into<String>) -> Result<()> {
    get_root_logger().critical(message).await
}

/// 使用根 logger 记录 TRACE 级别日志（带附加数据）
pub async fn tracem(
    message: impl Into<String>,
    extra: impl IntoIterator<Item = (impl Into<String>, MetadataValue)>,
) -> Result<()> {
    get_root_logger().tracem(message, extra).await
}

/// 使用根 logger 记录 DEBUG 级别日志（带附加数据）
pub async fn debugm(
    message: impl Into<String>,
    extra: impl IntoIterator<Item = (impl Into<String>, MetadataValue)>,
) -> Result<()> {
    get_root_logger().debugm(message, extra).await
}

/// 使用根 logger 记录 INFO 级别日志（带附加数据）
pub async fn infom(
    message: impl Into<String>,
    extra: impl IntoIterator<Item = (impl Into<String>, MetadataValue)>,
) -> Result<()> {
    get_root_logger().infom(message, extra).await
}

/// 使用根 logger 记录 WARNING 级别日志（带附加数据）
pub async fn warningm(
    message: impl Into<String>,
    extra: impl IntoIterator<Item = (impl Into<String>, MetadataValue)>,
) -> Result<()> {
    get_root_logger().warningm(message, extra).await
}

/// 使用根 logger 记录 ERROR 级别日志（带附加数据）
pub async fn errorm(
    message: impl Into<String>,
    extra: impl IntoIterator<Item = (impl Into<String>, MetadataValue)>,
) -> Result<()> {
    get_root_logger().errorm(message, extra).await
}

/// 使用根 logger 记录 CRITICAL 级别日志（带附加数据）
pub async fn criticalm(
    message: impl Into<String>,
    extra: impl IntoIterator<Item = (impl Into<String>, MetadataValue)>,
) -> Result<()> {
    get_root_logger().criticalm(message, extra).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_global_registry_is_singleton() {
        let registry1 = global_registry();
        let registry2 = global_registry();

        assert!(Arc::ptr_eq(&registry1, &registry2));
    }

    #[test]
    #[serial]
    fn test_get_logger_same_instance() {
        let logger1 = get_logger("global.test.logger");
        let logger2 = get_logger("global.test.logger");

        assert!(Arc::ptr_eq(&logger1, &logger2));
    }

    #[tokio::test]
    #[serial]
    async fn test_convenience_functions() -> Result<()> {
        // 无 handler 时全部便捷函数也必须安全可用
        trace("test trace message").await?;
        debug("test debug message").await?;
        info("test info message").await?;
        warning("test warning message").await?;
        error("test error message").await?;
        critical("test critical message").await?;

        infom(
            "user logged in",
            vec![("user_id", 12345i64.into()), ("username", "alice".into())],
        )
        .await?;

        Ok(())
    }
}
