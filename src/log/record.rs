use crate::log::level::LogLevel;
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::time::SystemTime;

/// 附加数据值，支持多种类型
#[derive(Debug, Clone)]
pub enum MetadataValue {
    String(String),
    I64(i64),
    U64(u64),
    F64(f64),
    Bool(bool),
    Null,
    /// 任意 JSON 兼容的数据
    Json(Value),
}

impl Serialize for MetadataValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            MetadataValue::String(s) => serializer.serialize_str(s),
            MetadataValue::I64(n) => serializer.serialize_i64(*n),
            MetadataValue::U64(n) => serializer.serialize_u64(*n),
            MetadataValue::F64(n) => serializer.serialize_f64(*n),
            MetadataValue::Bool(b) => serializer.serialize_bool(*b),
            MetadataValue::Null => serializer.serialize_none(),
            MetadataValue::Json(v) => v.serialize(serializer),
        }
    }
}

impl fmt::Display for MetadataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetadataValue::String(s) => write!(f, "{}", s),
            MetadataValue::I64(n) => write!(f, "{}", n),
            MetadataValue::U64(n) => write!(f, "{}", n),
            MetadataValue::F64(n) => write!(f, "{}", n),
            MetadataValue::Bool(b) => write!(f, "{}", b),
            MetadataValue::Null => write!(f, "null"),
            MetadataValue::Json(v) => write!(f, "'{}'", v),
        }
    }
}

/// 日志记录
///
/// 记录一次日志事件；格式化器只读取记录，绝不修改（名称截断发生在
/// 格式化器内部的副本上，避免跨 handler 泄漏）
pub struct LogRecord {
    /// 日志级别
    pub level: LogLevel,
    /// logger 名称（点号分隔的层级名）
    pub name: String,
    /// 日志消息（已完成插值的最终文本）
    pub message: String,
    /// 事件发生时刻
    pub timestamp: SystemTime,
    /// 调用方附加的结构化数据
    pub extra: Vec<(String, MetadataValue)>,
}

impl LogRecord {
    /// 创建新的日志记录，时间戳取当前时刻
    pub fn new(level: LogLevel, name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level,
            name: name.into(),
            message: message.into(),
            timestamp: SystemTime::now(),
            extra: Vec::new(),
        }
    }

    /// 添加附加数据
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<MetadataValue>) -> Self {
        self.extra.push((key.into(), value.into()));
        self
    }
}

// 为各种类型实现 From<MetadataValue> 以方便使用
impl From<String> for MetadataValue {
    fn from(s: String) -> Self {
        MetadataValue::String(s)
    }
}

impl From<&str> for MetadataValue {
    fn from(s: &str) -> Self {
        MetadataValue::String(s.to_string())
    }
}

impl From<i64> for MetadataValue {
    fn from(n: i64) -> Self {
        MetadataValue::I64(n)
    }
}

impl From<i32> for MetadataValue {
    fn from(n: i32) -> Self {
        MetadataValue::I64(n as i64)
    }
}

impl From<u64> for MetadataValue {
    fn from(n: u64) -> Self {
        MetadataValue::U64(n)
    }
}

impl From<u32> for MetadataValue {
    fn from(n: u32) -> Self {
        MetadataValue::U64(n as u64)
    }
}

impl From<f64> for MetadataValue {
    fn from(n: f64) -> Self {
        MetadataValue::F64(n)
    }
}

impl From<f32> for MetadataValue {
    fn from(n: f32) -> Self {
        MetadataValue::F64(n as f64)
    }
}

impl From<bool> for MetadataValue {
    fn from(b: bool) -> Self {
        MetadataValue::Bool(b)
    }
}

impl From<Value> for MetadataValue {
    fn from(v: Value) -> Self {
        MetadataValue::Json(v)
    }
}

impl MetadataValue {
    /// 从任意实现了 Serialize 的自定义结构体创建 MetadataValue
    ///
    /// 序列化失败时降级为描述性字符串，保证日志链路永不因附加数据中断
    ///
    /// # 示例
    ///
    /// ```ignore
    /// #[derive(Serialize)]
    /// struct User {
    ///     id: i64,
    ///     name: String,
    /// }
    ///
    /// let user = User { id: 123, name: "alice".to_string() };
    /// let value = MetadataValue::from_struct(user);
    /// ```
    pub fn from_struct<T: serde::Serialize>(value: T) -> Self {
        match serde_json::to_value(value) {
            Ok(json_value) => MetadataValue::Json(json_value),
            Err(e) => MetadataValue::String(format!("<unserializable: {}>", e)),
        }
    }
}
