//! LogX - 彩色控制台 + 双份持久化输出的日志库
//!
//! 作为标准日志能力的替代品，补充以下能力：
//!
//! - **TRACE 级别**: 低于 DEBUG 的自定义级别（数值 5）
//! - **彩色控制台**: 按级别着色的单行文本输出，长名称右侧截断
//! - **双份持久化**: 每次装配新建的带时间戳文本文件 + 追加写入的
//!   JSON Lines 结构化文件
//!
//! ## 模块
//!
//! - **log**: 级别、记录、格式化器、输出器、注册表与装配入口
//!
//! ## 设计理念
//!
//! - 🔒 **类型安全**: 级别与记录都是强类型，编译时检查
//! - 🧩 **显式注入**: 注册表作为服务传递，全局单例只是便捷入口
//! - 🛡️ **故障隔离**: 单个输出目标失败不影响其余目标
//! - ⚡ **异步写出**: 基于 tokio 的文件与控制台输出

pub mod log;

// 重新导出主要的公共 API
pub use log::{
    Handler, LogAppender, LogFormatter, LogLevel, LogRecord, Logger, LoggerRegistry,
    MetadataValue, SetupConfig,
};

pub use log::{setup_global_logging, setup_logging};
