#![allow(dead_code)]

use procmon::config::{Config, LoadOptions, load_from_str};
use serde_json::{Map, Value, json};

/// Builder for a config document, keeping entries in insertion order.
pub struct DocumentBuilder {
    entries: Map<String, Value>,
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self {
            entries: Map::new(),
        }
    }

    /// Start a document with the required top-level `name` already set.
    pub fn named(name: &str) -> Self {
        Self::new().field("name", json!(name))
    }

    /// Set an arbitrary top-level entry (reserved key or not).
    pub fn field(mut self, key: &str, value: Value) -> Self {
        self.entries.insert(key.to_string(), value);
        self
    }

    pub fn with_monitor(self, key: &str, monitor: MonitorBuilder) -> Self {
        self.field(key, monitor.build())
    }

    pub fn build(self) -> Value {
        Value::Object(self.entries)
    }

    pub fn to_json(self) -> String {
        self.build().to_string()
    }

    /// Load the document with default options.
    pub fn load(self) -> procmon::errors::Result<Config> {
        load_from_str(&self.to_json(), LoadOptions::default())
    }
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for one monitor object.
pub struct MonitorBuilder {
    fields: Map<String, Value>,
}

impl MonitorBuilder {
    /// A monitor with only `cmd` set.
    pub fn new(cmd: &str) -> Self {
        Self::without_cmd().field("cmd", json!(cmd))
    }

    /// A monitor missing its required `cmd`.
    pub fn without_cmd() -> Self {
        Self { fields: Map::new() }
    }

    pub fn field(mut self, key: &str, value: Value) -> Self {
        self.fields.insert(key.to_string(), value);
        self
    }

    pub fn name(self, name: &str) -> Self {
        self.field("name", json!(name))
    }

    pub fn logfile(self, path: &str) -> Self {
        self.field("logfile", json!(path))
    }

    pub fn on_error(self, cmd: &str) -> Self {
        self.field("on_error", json!(cmd))
    }

    pub fn on_restart(self, cmd: &str) -> Self {
        self.field("on_restart", json!(cmd))
    }

    pub fn cron(self, expr: &str) -> Self {
        self.field("cron", json!(expr))
    }

    pub fn attempts(self, n: u32) -> Self {
        self.field("attempts", json!(n))
    }

    pub fn sleep(self, secs: u32) -> Self {
        self.field("sleep", json!(secs))
    }

    pub fn build(self) -> Value {
        Value::Object(self.fields)
    }
}
