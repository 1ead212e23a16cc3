// src/config/builder.rs

//! Turn a parsed JSON document into a [`RawConfig`].
//!
//! The top-level object holds a handful of reserved keys; every other entry
//! whose value is an object is a monitor definition. Nothing here checks the
//! required fields. That happens afterwards, in `validate.rs`, once the whole
//! document has been built.

use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::config::extract::{Field, FieldError, boolean, integer, scan, string};
use crate::config::loader::LoadOptions;
use crate::config::model::{RawConfig, RawMonitor};
use crate::cron::Cron;
use crate::errors::ConfigError;

/// Reserved top-level keys. These never become monitors, whatever their value.
const CONFIG_FIELDS: &[Field<RawConfig>] = &[
    Field {
        key: "name",
        decode: |c, v| {
            c.name = Some(string(v)?);
            Ok(())
        },
    },
    Field {
        key: "logfile",
        decode: |c, v| {
            c.logfile = string(v)?;
            Ok(())
        },
    },
    Field {
        key: "pidfile",
        decode: |c, v| {
            c.pidfile = Some(string(v)?);
            Ok(())
        },
    },
    Field {
        key: "daemon",
        decode: |c, v| {
            c.daemon = boolean(v)?;
            Ok(())
        },
    },
];

const MONITOR_FIELDS: &[Field<RawMonitor>] = &[
    Field {
        key: "name",
        decode: |m, v| {
            m.name = string(v)?;
            Ok(())
        },
    },
    Field {
        key: "cmd",
        decode: |m, v| {
            m.cmd = Some(string(v)?);
            Ok(())
        },
    },
    Field {
        key: "logfile",
        decode: |m, v| {
            m.logfile = string(v)?;
            Ok(())
        },
    },
    Field {
        key: "on_error",
        decode: |m, v| {
            m.on_error = Some(string(v)?);
            Ok(())
        },
    },
    Field {
        key: "on_restart",
        decode: |m, v| {
            m.on_restart = Some(string(v)?);
            Ok(())
        },
    },
    Field {
        key: "cron",
        decode: |m, v| {
            let expr = string(v)?;
            let cron = Cron::parse(&expr).map_err(|reason| {
                FieldError::Invalid(ConfigError::InvalidCron {
                    monitor: m.name.clone(),
                    expr: expr.clone(),
                    reason,
                })
            })?;
            m.cron = Some(cron);
            Ok(())
        },
    },
    Field {
        key: "attempts",
        decode: |m, v| {
            m.max_attempts = integer(v)?;
            Ok(())
        },
    },
    Field {
        key: "sleep",
        decode: |m, v| {
            m.max_sleepsec = integer(v)?;
            Ok(())
        },
    },
];

/// Build the top-level config from the document root.
///
/// Monitors are collected in declaration order. Top-level entries that are
/// neither reserved nor objects are skipped.
pub fn build_config(root: &Value, options: LoadOptions) -> Result<RawConfig, ConfigError> {
    let Value::Object(entries) = root else {
        return Err(ConfigError::RootNotObject);
    };

    let mut raw = RawConfig::default();
    scan(
        &mut raw,
        entries,
        CONFIG_FIELDS,
        "config",
        options,
        |raw, key, value| {
            match value {
                Value::Object(fields) => raw.monitors.push(build_monitor(key, fields, options)?),
                _ => debug!(key, "skipping non-object top-level entry"),
            }
            Ok(())
        },
    )?;

    Ok(raw)
}

/// Build one monitor from its JSON key and object body.
///
/// Starts from the defaults, then applies recognized keys. An inner `name`
/// overrides `key`; unrecognized keys are ignored.
pub fn build_monitor(
    key: &str,
    fields: &Map<String, Value>,
    options: LoadOptions,
) -> Result<RawMonitor, ConfigError> {
    let mut monitor = RawMonitor::new(key);
    let entity = format!("monitor '{key}'");

    scan(
        &mut monitor,
        fields,
        MONITOR_FIELDS,
        &entity,
        options,
        |_, field, _| {
            trace!(monitor = key, field, "ignoring unrecognized key");
            Ok(())
        },
    )?;

    debug!(
        key,
        name = %monitor.name,
        has_cmd = monitor.cmd.is_some(),
        cron = monitor.cron.is_some(),
        "built monitor"
    );
    Ok(monitor)
}
