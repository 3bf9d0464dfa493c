use crate::log::appender::LogAppender;
use anyhow::Result;
use serde::Deserialize;
use smart_default::SmartDefault;
use std::io::{self, Write};

/// ConsoleAppender 配置（保留扩展性）
#[derive(Debug, Clone, Deserialize, SmartDefault)]
#[serde(default)]
pub struct ConsoleAppenderConfig {}

/// 终端输出器
///
/// 将日志输出到标准输出；不做终端能力探测，
/// 非 TTY 消费方会原样收到转义字节
pub struct ConsoleAppender {
    _config: ConsoleAppenderConfig,
}

impl ConsoleAppender {
    pub fn new(config: ConsoleAppenderConfig) -> Self {
        Self { _config: config }
    }
}

#[async_trait::async_trait]
impl LogAppender for ConsoleAppender {
    async fn append(&self, formatted_message: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", formatted_message)?;
        stdout.flush()?;
        Ok(())
    }
}
