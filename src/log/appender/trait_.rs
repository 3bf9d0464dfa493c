use anyhow::Result;

/// 日志输出器 trait
///
/// 接收格式化器产出的单行文本并写入目标介质，行尾换行由实现补齐
#[async_trait::async_trait]
pub trait LogAppender: Send + Sync {
    /// 写出一行日志
    async fn append(&self, formatted_message: &str) -> Result<()>;

    /// 将缓冲数据落盘
    ///
    /// 进程收尾时由注册表统一调用，保证尾部日志不丢失；
    /// 逐行落盘的实现保持默认空操作即可
    async fn flush(&self) -> Result<()> {
        Ok(())
    }
}
