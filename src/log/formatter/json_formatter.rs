use crate::log::formatter::LogFormatter;
use crate::log::record::LogRecord;
use anyhow::Result;
use chrono::{DateTime, Local, SecondsFormat};
use serde::Deserialize;
use serde_json::{Map, Value};
use smart_default::SmartDefault;

/// JsonFormatter 配置（保留扩展性）
#[derive(Debug, Clone, Deserialize, PartialEq, SmartDefault)]
#[serde(default)]
pub struct JsonFormatterConfig {}

/// JSON 格式化器
///
/// 将日志记录格式化为单行 JSON 对象，供机器消费。
/// `extra` 键只在记录携带附加数据时出现，缺失时不输出（也不输出 null）
pub struct JsonFormatter {}

impl JsonFormatter {
    pub fn new(_: JsonFormatterConfig) -> Self {
        Self {}
    }
}

impl LogFormatter for JsonFormatter {
    fn format(&self, record: &LogRecord) -> Result<String> {
        // 时间戳取事件发生时刻，带本地时区偏移的 ISO-8601
        let timestamp: DateTime<Local> = record.timestamp.into();

        let mut map = Map::new();
        map.insert(
            "timestamp".to_string(),
            Value::String(timestamp.to_rfc3339_opts(SecondsFormat::Micros, false)),
        );
        map.insert("level".to_string(), Value::String(record.level.to_string()));
        // 完整名称，不受控制台截断影响
        map.insert("name".to_string(), Value::String(record.name.clone()));
        map.insert(
            "message".to_string(),
            Value::String(record.message.clone()),
        );

        if !record.extra.is_empty() {
            let extra_map: Map<String, Value> = record
                .extra
                .iter()
                .map(|(k, v)| {
                    let json_value = serde_json::to_value(v).unwrap_or(Value::Null);
                    (k.clone(), json_value)
                })
                .collect();
            map.insert("extra".to_string(), Value::Object(extra_map));
        }

        Ok(serde_json::to_string(&Value::Object(map))?)
    }
}
