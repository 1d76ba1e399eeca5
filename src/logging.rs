use serde_json::{Map, Value};
use std::cmp::Ordering;

pub const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
}

impl PartialOrd for LogLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LogLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        fn rank(level: LogLevel) -> u8 {
            match level {
                LogLevel::Debug => 0,
                LogLevel::Info => 1,
                LogLevel::Warn => 2,
            }
        }

        rank(*self).cmp(&rank(*other))
    }
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            "warn" | "warning" => Some(Self::Warn),
            _ => None,
        }
    }
}

/// Emits single-line JSON events at or above a minimum level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Logger {
    min_level: LogLevel,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_LEVEL)
    }
}

impl Logger {
    pub fn new(min_level: LogLevel) -> Self {
        Self { min_level }
    }

    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }

    pub fn debug(&self, event: &str, fields: Value) {
        self.event(LogLevel::Debug, event, fields);
    }

    pub fn info(&self, event: &str, fields: Value) {
        self.event(LogLevel::Info, event, fields);
    }

    pub fn warn(&self, event: &str, fields: Value) {
        self.event(LogLevel::Warn, event, fields);
    }

    pub fn event(&self, level: LogLevel, event: &str, fields: Value) {
        if !self.enabled(level) {
            return;
        }

        let line = format_event(now_unix_seconds(), level, event, fields);
        write_line(level, &line);
    }
}

pub fn format_event(ts: i64, level: LogLevel, event: &str, fields: Value) -> String {
    let mut payload = Map::new();
    payload.insert("ts".to_string(), Value::from(ts));
    payload.insert("level".to_string(), Value::String(level.as_str().to_string()));
    payload.insert("event".to_string(), Value::String(event.to_string()));

    if let Value::Object(extra) = fields {
        for (key, value) in extra {
            payload.insert(key, value);
        }
    }

    Value::Object(payload).to_string()
}

fn now_unix_seconds() -> i64 {
    chrono::Utc::now().timestamp()
}

#[cfg(target_arch = "wasm32")]
fn write_line(level: LogLevel, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        LogLevel::Warn => web_sys::console::warn_1(&value),
        LogLevel::Debug | LogLevel::Info => web_sys::console::log_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_line(level: LogLevel, line: &str) {
    match level {
        LogLevel::Warn => eprintln!("{line}"),
        LogLevel::Debug | LogLevel::Info => println!("{line}"),
    }
}
