use crate::log::record::LogRecord;
use anyhow::Result;

/// 日志格式化器 trait
///
/// 负责将 LogRecord 格式化为字符串；实现必须是纯函数（输入记录 + 固定配置），
/// 不允许持有可变状态，也不允许修改记录本身
pub trait LogFormatter: Send + Sync {
    /// 格式化日志记录
    fn format(&self, record: &LogRecord) -> Result<String>;
}
