//! 日志模块
//!
//! 在标准日志能力之上提供：低于 DEBUG 的 TRACE 级别、按级别着色的
//! 控制台输出、双份持久化输出（带时间戳的文本文件 + 追加写入的
//! JSON Lines 文件）、控制台长名称截断。
//!
//! # 特性
//!
//! - 六个日志级别：Trace, Debug, Info, Warning, Error, Critical
//! - 格式化器：ColorFormatter（彩色文本）、JsonFormatter（单行 JSON）
//! - 输出目标：ConsoleAppender、FileAppender（追加/截断两种模式）
//! - 显式注入的 LoggerRegistry，另提供进程级单例
//! - 完全异步支持
//!
//! # 快速开始
//!
//! ```rust,no_run
//! use logx::log::*;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     // 使用 json5::from_str 构建 SetupConfig
//!     let config: SetupConfig = json5::from_str(r#"
//!         {
//!             directory: "logs",
//!             base_filename: "app",
//!             level: "debug",
//!             truncate_width: 15,
//!         }
//!     "#)?;
//!
//!     // 装配控制台 + 文本文件 + JSON Lines 三个输出
//!     setup_global_logging(&config).await?;
//!
//!     // 按层级名称获取 logger 并使用
//!     let logger = get_logger("app.main");
//!     logger.info("Application started").await?;
//!     logger.trace("Very detailed diagnostics").await?;
//!
//!     Ok(())
//! }
//! ```

pub mod appender;
pub mod formatter;
pub mod global_registry;
pub mod handler;
pub mod level;
pub mod logger;
pub mod macros;
pub mod record;
pub mod registry;
pub mod setup;

// 重新导出核心类型
pub use appender::{
    ConsoleAppender, ConsoleAppenderConfig, FileAppender, FileAppenderConfig, LogAppender,
};
pub use formatter::{
    ColorFormatter, ColorFormatterConfig, JsonFormatter, JsonFormatterConfig, LogFormatter,
};
pub use handler::Handler;
pub use level::LogLevel;
pub use logger::Logger;
pub use record::{LogRecord, MetadataValue};
pub use registry::LoggerRegistry;
pub use setup::{setup_global_logging, setup_logging, SetupConfig};

pub use global_registry::{
    critical,
    criticalm,
    debug,
    debugm,
    error,
    errorm,
    get_logger,
    get_root_logger,
    global_registry,
    info,
    infom,
    // 根 logger 的便捷 log 方法
    log,
    logm,
    trace,
    tracem,
    warning,
    warningm,
    ROOT_LOGGER,
};
