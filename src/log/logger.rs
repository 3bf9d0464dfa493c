use crate::log::handler::Handler;
use crate::log::level::LogLevel;
use crate::log::record::{LogRecord, MetadataValue};
use anyhow::Result;
use std::sync::{Arc, RwLock};

/// 核心日志器
///
/// 按层级名称标识，级别阈值和 handler 列表与创建它的注册表共享：
/// 注册表重新配置后，已存在的 logger 实例同样观察到新的 handler 集合
pub struct Logger {
    name: String,
    level: Arc<RwLock<LogLevel>>,
    handlers: Arc<RwLock<Vec<Arc<Handler>>>>,
}

impl Logger {
    pub(crate) fn new(
        name: impl Into<String>,
        level: Arc<RwLock<LogLevel>>,
        handlers: Arc<RwLock<Vec<Arc<Handler>>>>,
    ) -> Self {
        Self {
            name: name.into(),
            level,
            handlers,
        }
    }

    /// logger 的层级名称（点号分隔）
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 获取当前生效的级别阈值
    pub fn get_level(&self) -> LogLevel {
        *self.level.read().unwrap()
    }

    /// 级别是否会被记录
    ///
    /// 调用方（以及各级别方法）在构造记录之前先做此检查，
    /// 被抑制的消息不支付任何格式化成本
    pub fn enabled_for(&self, level: LogLevel) -> bool {
        level >= *self.level.read().unwrap()
    }

    /// 记录日志
    ///
    /// 记录被投递到所有 handler；各 handler 的格式化和写出相互隔离，
    /// 某个目标失败不会阻止其余目标收到记录，首个错误在全部投递后返回
    pub async fn log(&self, record: LogRecord) -> Result<()> {
        if !self.enabled_for(record.level) {
            return Ok(());
        }

        // 在 await 之前拷出 handler 列表，不跨 await 持锁
        let handlers: Vec<Arc<Handler>> = self.handlers.read().unwrap().clone();

        let mut first_error = None;
        for handler in handlers {
            if let Err(e) = handler.handle(&record).await {
                if first_error.is_none() {
                    first_error = Some(e);
                }
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// 记录带附加数据的日志（通用方法）
    pub async fn logm(
        &self,
        level: LogLevel,
        message: impl Into<String>,
        extra: impl IntoIterator<Item = (impl Into<String>, MetadataValue)>,
    ) -> Result<()> {
        if !self.enabled_for(level) {
            return Ok(());
        }
        let mut record = LogRecord::new(level, self.name.clone(), message.into());
        for (key, value) in extra.into_iter() {
            record.extra.push((key.into(), value));
        }
        self.log(record).await
    }

    /// 记录 TRACE 级别日志
    pub async fn trace(&self, message: impl Into<String>) -> Result<()> {
        if !self.enabled_for(LogLevel::Trace) {
            return Ok(());
        }
        self.log(LogRecord::new(LogLevel::Trace, self.name.clone(), message))
            .await
    }

    /// 记录 DEBUG 级别日志
    pub async fn debug(&self, message: impl Into<String>) -> Result<()> {
        if !self.enabled_for(LogLevel::Debug) {
            return Ok(());
        }
        self.log(LogRecord::new(LogLevel::Debug, self.name.clone(), message))
            .await
    }

    /// 记录 INFO 级别日志
    pub async fn info(&self, message: impl Into<String>) -> Result<()> {
        if !self.enabled_for(LogLevel::Info) {
            return Ok(());
        }
        self.log(LogRecord::new(LogLevel::Info, self.name.clone(), message))
            .await
    }

    /// 记录 WARNING 级别日志
    pub async fn warning(&self, message: impl Into<String>) -> Result<()> {
        if !self.enabled_for(LogLevel::Warning) {
            return Ok(());
        }
        self.log(LogRecord::new(
            LogLevel::Warning,
            self.name.clone(),
            message,
        ))
        .await
    }

    /// 记录 ERROR 级别日志
    pub async fn error(&self, message: impl Into<String>) -> Result<()> {
        if !self.enabled_for(LogLevel::Error) {
            return Ok(());
        }
        self.log(LogRecord::new(LogLevel::Error, self.name.clone(), message))
            .await
    }

    /// 记录 CRITICAL 级别日志
    pub async fn critical(&self, message: impl Into<String>) -> Result<()> {
        if !self.enabled_for(LogLevel::Critical) {
            return Ok(());
        }
        self.log(LogRecord::new(
            LogLevel::Critical,
            self.name.clone(),
            message,
        ))
        .await
    }

    /// 记录 TRACE 级别日志（带附加数据）
    pub async fn tracem(
        &self,
        message: impl Into<String>,
        extra: impl IntoIterator<Item = (impl Into<String>, MetadataValue)>,
    ) -> Result<()> {
        self.logm(LogLevel::Trace, message, extra).await
    }

    /// 记录 DEBUG 级别日志（带附加数据）
    pub async fn debugm(
        &self,
        message: impl Into<String>,
        extra: impl IntoIterator<Item = (impl Into<String>, MetadataValue)>,
    ) -> Result<()> {
        self.logm(LogLevel::Debug, message, extra).await
    }

    /// 记录 INFO 级别日志（带附加数据）
    pub async fn infom(
        &self,
        message: impl Into<String>,
        extra: impl IntoIterator<Item = (impl Into<String>, MetadataValue)>,
    ) -> Result<()> {
        self.logm(LogLevel::Info, message, extra).await
    }

    /// 记录 WARNING 级别日志（带附加数据）
    pub async fn warningm(
        &self,
        message: impl Into<String>,
        extra: impl IntoIterator<Item = (impl Into<String>, MetadataValue)>,
    ) -> Result<()> {
        self.logm(LogLevel::Warning, message, extra).await
    }

    /// 记录 ERROR 级别日志（带附加数据）
    pub async fn errorm(
        &self,
        message: impl Into<String>,
        extra: impl IntoIterator<Item = (impl Into<String>, MetadataValue)>,
    ) -> Result<()> {
        self.logm(LogLevel::Error, message, extra).await
    }

    /// 记录 CRITICAL 级别日志（带附加数据）
    pub async fn criticalm(
        &self,
        message: impl Into<String>,
        extra: impl IntoIterator<Item = (impl Into<String>, MetadataValue)>,
    ) -> Result<()> {
        self.logm(LogLevel::Critical, message, extra).await
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::log::appender::LogAppender;
    use anyhow::Result;
    use std::sync::{Arc, Mutex};

    /// 捕获输出的测试 appender
    pub struct CapturingAppender {
        pub lines: Arc<Mutex<Vec<String>>>,
    }

    impl CapturingAppender {
        pub fn new() -> (Self, Arc<Mutex<Vec<String>>>) {
            let lines = Arc::new(Mutex::new(Vec::new()));
            (
                Self {
                    lines: Arc::clone(&lines),
                },
                lines,
            )
        }
    }

    #[async_trait::async_trait]
    impl LogAppender for CapturingAppender {
        async fn append(&self, formatted_message: &str) -> Result<()> {
            self.lines.lock().unwrap().push(formatted_message.to_string());
            Ok(())
        }
    }

    /// 永远失败的测试 appender，用于验证故障隔离
    pub struct FailingAppender;

    #[async_trait::async_trait]
    impl LogAppender for FailingAppender {
        async fn append(&self, _formatted_message: &str) -> Result<()> {
            Err(anyhow::anyhow!("appender is broken"))
        }
    }
}
