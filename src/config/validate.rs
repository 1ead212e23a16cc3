// src/config/validate.rs

use std::collections::HashSet;

use tracing::warn;

use crate::config::model::{Config, Monitor, MonitorId, RawConfig};
use crate::config::monitors::Monitors;
use crate::errors::ConfigError;

impl TryFrom<RawConfig> for Config {
    type Error = ConfigError;

    /// Checks, in order: the config has a name, it declares at least one
    /// monitor, every monitor has a `cmd`.
    ///
    /// On rejection everything built so far (monitors, cron handles) is
    /// dropped here; no partially valid config escapes.
    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        let RawConfig {
            name,
            logfile,
            pidfile,
            daemon,
            monitors: raw_monitors,
        } = raw;

        let Some(name) = name else {
            return Err(ConfigError::MissingName);
        };

        if raw_monitors.is_empty() {
            return Err(ConfigError::NoMonitors);
        }

        warn_duplicate_names(raw_monitors.iter().map(|m| m.name.as_str()));

        let mut monitors = Monitors::with_capacity(raw_monitors.len());
        for (id, mut raw_monitor) in (0u32..).zip(raw_monitors) {
            let Some(cmd) = raw_monitor.cmd.take() else {
                return Err(ConfigError::MissingCmd {
                    monitor: raw_monitor.name,
                });
            };
            monitors.push(Monitor::from_raw(MonitorId(id), raw_monitor, cmd));
        }

        Ok(Config::new_unchecked(name, logfile, pidfile, daemon, monitors))
    }
}

/// Validate a built config, converting it into its checked form.
pub fn validate_config(raw: RawConfig) -> Result<Config, ConfigError> {
    Config::try_from(raw)
}

/// Shared names are legal but make name lookups ambiguous.
fn warn_duplicate_names<'a>(names: impl Iterator<Item = &'a str>) {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            warn!(monitor = name, "monitor name declared more than once");
        }
    }
}
