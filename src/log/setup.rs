use crate::log::appender::{ConsoleAppender, ConsoleAppenderConfig, FileAppender, FileAppenderConfig};
use crate::log::formatter::{
    ColorFormatter, ColorFormatterConfig, JsonFormatter, JsonFormatterConfig,
};
use crate::log::global_registry::global_registry;
use crate::log::handler::Handler;
use crate::log::level::LogLevel;
use crate::log::registry::LoggerRegistry;
use anyhow::Result;
use chrono::Local;
use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;

/// 日志装配配置
///
/// 进程启动时构建一次，setup_logging 消费后即不再保留
#[derive(Debug, Clone, Deserialize)]
pub struct SetupConfig {
    /// 日志输出目录，不存在时递归创建
    pub directory: String,

    /// 文件基础名：文本文件为 `<base>-<YYYYMMDD-HHMMSS>.log`，
    /// 结构化文件为 `<base>.jsonl`
    pub base_filename: String,

    /// 最低级别阈值（trace/debug/info/warning/error/critical）
    pub level: String,

    /// 控制台 logger 名称的最大显示宽度，必须为正数
    pub truncate_width: usize,

    /// 带时间戳的文本文件是否保留 ANSI 颜色。
    /// 默认关闭，文件输出为纯文本；开启后文件与控制台字节一致
    #[serde(default)]
    pub colored_file: bool,
}

/// 装配三个日志输出目标
///
/// 步骤与保证：
/// 1. 递归创建输出目录，文件系统拒绝时立即失败；
/// 2. 先构建全部三个 handler（任一失败则注册表保持原状）：
///    (a) 带时间戳的文本文件（每次装配新建，同名覆盖），
///    (b) 彩色控制台，
///    (c) 追加写入的 JSON Lines 文件（跨进程重启累积）；
/// 3. 原子替换注册表的 handler 集合（重复装配不会累积重复输出）；
/// 4. 设置进程级最低级别阈值。
///
/// 可重复调用，每次调用完全取代上一次的装配；旧的文本文件留在磁盘上
/// 不再接收写入，`.jsonl` 文件因名称稳定而持续累积
pub async fn setup_logging(registry: &LoggerRegistry, config: &SetupConfig) -> Result<()> {
    let level = config
        .level
        .parse::<LogLevel>()
        .map_err(anyhow::Error::msg)?;

    // 宽度为 0 会把所有 logger 名称截成空串
    if config.truncate_width == 0 {
        anyhow::bail!("truncate_width must be positive, got 0");
    }

    tokio::fs::create_dir_all(&config.directory).await?;

    let dir = Path::new(&config.directory);
    let started_at = Local::now();
    let text_path = dir.join(format!(
        "{}-{}.log",
        config.base_filename,
        started_at.format("%Y%m%d-%H%M%S")
    ));
    let jsonl_path = dir.join(format!("{}.jsonl", config.base_filename));

    // 文本文件：同一模板的非彩色变体，名称不截断
    let text_handler = Handler::new(
        Arc::new(ColorFormatter::new(ColorFormatterConfig {
            truncate_width: None,
            colored: config.colored_file,
        })),
        Arc::new(
            FileAppender::from_config(FileAppenderConfig {
                file_path: text_path.to_string_lossy().to_string(),
                append: false,
            })
            .await?,
        ),
    );

    // 控制台：彩色 + 名称截断
    let console_handler = Handler::new(
        Arc::new(ColorFormatter::new(ColorFormatterConfig {
            truncate_width: Some(config.truncate_width),
            colored: true,
        })),
        Arc::new(ConsoleAppender::new(ConsoleAppenderConfig::default())),
    );

    // 结构化文件：追加写入
    let jsonl_handler = Handler::new(
        Arc::new(JsonFormatter::new(JsonFormatterConfig::default())),
        Arc::new(
            FileAppender::from_config(FileAppenderConfig {
                file_path: jsonl_path.to_string_lossy().to_string(),
                append: true,
            })
            .await?,
        ),
    );

    registry.replace_handlers(vec![
        Arc::new(text_handler),
        Arc::new(console_handler),
        Arc::new(jsonl_handler),
    ]);
    registry.set_level(level);

    Ok(())
}

/// 针对全局注册表装配日志输出
pub async fn setup_global_logging(config: &SetupConfig) -> Result<()> {
    setup_logging(&global_registry(), config).await
}
