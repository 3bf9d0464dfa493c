mod console_appender;
mod file_appender;
mod trait_;

pub use console_appender::{ConsoleAppender, ConsoleAppenderConfig};
pub use file_appender::{FileAppender, FileAppenderConfig};
pub use trait_::LogAppender;
