mod color_formatter;
mod core;
mod json_formatter;

pub use color_formatter::{ColorFormatter, ColorFormatterConfig};
pub use core::LogFormatter;
pub use json_formatter::{JsonFormatter, JsonFormatterConfig};
