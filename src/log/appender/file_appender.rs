use crate::log::appender::LogAppender;
use anyhow::Result;
use serde::Deserialize;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;

fn default_append() -> bool {
    true
}

/// FileAppender 配置
#[derive(Debug, Clone, Deserialize)]
pub struct FileAppenderConfig {
    /// 日志文件路径
    pub file_path: String,

    /// true 追加写入（跨进程重启累积），false 截断重写
    #[serde(default = "default_append")]
    pub append: bool,
}

/// 文件输出器
///
/// 将日志输出到文件；文件句柄在进程生命周期内持有，
/// 每次写入后立即刷新，避免进程退出时丢失尾部日志
pub struct FileAppender {
    file: Arc<Mutex<tokio::fs::File>>,
    config: FileAppenderConfig,
}

impl FileAppender {
    /// 从配置创建 FileAppender
    pub async fn from_config(config: FileAppenderConfig) -> Result<Self> {
        let path = PathBuf::from(&config.file_path);

        // 确保父目录存在
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let mut options = tokio::fs::OpenOptions::new();
        options.create(true).write(true);
        if config.append {
            options.append(true);
        } else {
            options.truncate(true);
        }
        let file = options.open(&path).await?;

        Ok(Self {
            file: Arc::new(Mutex::new(file)),
            config,
        })
    }

    /// 获取日志文件路径
    pub fn path(&self) -> &str {
        &self.config.file_path
    }
}

#[async_trait::async_trait]
impl LogAppender for FileAppender {
    async fn append(&self, formatted_message: &str) -> Result<()> {
        use tokio::io::AsyncWriteExt;

        let mut file = self.file.lock().await;
        file.write_all(formatted_message.as_bytes()).await?;
        file.write_all(b"\n").await?;
        file.flush().await?;
        Ok(())
    }

    async fn flush(&self) -> Result<()> {
        use tokio::io::AsyncWriteExt;

        let mut file = self.file.lock().await;
        file.flush().await?;
        Ok(())
    }
}
