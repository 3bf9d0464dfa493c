use crate::log::appender::LogAppender;
use crate::log::formatter::LogFormatter;
use crate::log::record::LogRecord;
use anyhow::Result;
use std::sync::Arc;

/// 处理器：一个格式化器和一个输出目标的组合
///
/// 宿主注册表向每个 handler 串行投递记录，handler 之间互不影响
pub struct Handler {
    formatter: Arc<dyn LogFormatter>,
    appender: Arc<dyn LogAppender>,
}

impl Handler {
    pub fn new(formatter: Arc<dyn LogFormatter>, appender: Arc<dyn LogAppender>) -> Self {
        Self {
            formatter,
            appender,
        }
    }

    /// 格式化并写出一条记录
    pub async fn handle(&self, record: &LogRecord) -> Result<()> {
        let formatted = self.formatter.format(record)?;
        self.appender.append(&formatted).await?;
        Ok(())
    }

    /// 刷新输出目标
    pub async fn flush(&self) -> Result<()> {
        self.appender.flush().await
    }
}
