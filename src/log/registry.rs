use crate::log::handler::Handler;
use crate::log::level::LogLevel;
use crate::log::logger::Logger;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Logger 注册表
///
/// 维护层级名称到 Logger 实例的共享命名空间，以及所有 logger 共用的
/// handler 列表和级别阈值。注册表作为显式服务注入（而不是隐藏的静态
/// 状态），进程级单例见 global_registry 模块
pub struct LoggerRegistry {
    loggers: Arc<RwLock<HashMap<String, Arc<Logger>>>>,
    handlers: Arc<RwLock<Vec<Arc<Handler>>>>,
    level: Arc<RwLock<LogLevel>>,
}

impl LoggerRegistry {
    /// 创建空的注册表，初始阈值 Info，无 handler
    pub fn new() -> Self {
        Self {
            loggers: Arc::new(RwLock::new(HashMap::new())),
            handlers: Arc::new(RwLock::new(Vec::new())),
            level: Arc::new(RwLock::new(LogLevel::Info)),
        }
    }

    /// 按名称获取 logger，不存在时创建
    ///
    /// 新旧 logger 都持有注册表的共享阈值和 handler 列表，
    /// 重新配置对先前创建的实例同样生效
    pub fn get_logger(&self, name: &str) -> Arc<Logger> {
        if let Some(logger) = self.loggers.read().unwrap().get(name) {
            return Arc::clone(logger);
        }

        let mut loggers = self.loggers.write().unwrap();
        // 双重检查，避免并发创建两份
        if let Some(logger) = loggers.get(name) {
            return Arc::clone(logger);
        }

        let logger = Arc::new(Logger::new(
            name,
            Arc::clone(&self.level),
            Arc::clone(&self.handlers),
        ));
        loggers.insert(name.to_string(), Arc::clone(&logger));
        logger
    }

    /// 原子替换全部 handler
    ///
    /// 旧 handler 全部卸下再挂新的，重复配置不会累积出重复输出；
    /// 被替换的文件 handler 随 Arc 释放关闭句柄
    pub fn replace_handlers(&self, handlers: Vec<Arc<Handler>>) {
        *self.handlers.write().unwrap() = handlers;
    }

    /// 当前挂载的 handler 数量
    pub fn handler_count(&self) -> usize {
        self.handlers.read().unwrap().len()
    }

    /// 设置进程级最低级别阈值
    pub fn set_level(&self, level: LogLevel) {
        *self.level.write().unwrap() = level;
    }

    /// 获取当前阈值
    pub fn get_level(&self) -> LogLevel {
        *self.level.read().unwrap()
    }

    /// 检查指定名称的 logger 是否已创建
    pub fn contains(&self, name: &str) -> bool {
        self.loggers.read().unwrap().contains_key(name)
    }

    /// 获取所有已创建 logger 的名称
    pub fn keys(&self) -> Vec<String> {
        self.loggers.read().unwrap().keys().cloned().collect()
    }

    /// 刷新所有 handler
    pub async fn flush(&self) -> anyhow::Result<()> {
        let handlers: Vec<Arc<Handler>> = self.handlers.read().unwrap().clone();
        for handler in handlers {
            handler.flush().await?;
        }
        Ok(())
    }
}

impl Default for LoggerRegistry {
    fn default() -> Self {
        Self::new()
    }
}
