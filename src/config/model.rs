// src/config/model.rs

use std::time::Duration;

use serde::Serialize;
use serde::ser::SerializeMap;

use crate::config::monitors::Monitors;
use crate::cron::Cron;

/// Log target used when neither the config nor a monitor names one.
pub const DEFAULT_LOGFILE: &str = "/dev/null";

/// Restart attempts allowed before a monitor is given up on.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10;

/// Upper bound, in seconds, for the sleep between restarts.
pub const DEFAULT_MAX_SLEEPSEC: u32 = 1;

/// Backoff clock value a monitor starts from (and returns to on reset).
pub const INITIAL_CLOCK: Duration = Duration::from_millis(60_000);

/// Stable identity of a monitor within one loaded [`Config`].
///
/// Ids are assigned in declaration order and never reused, so an id held by
/// the supervisor stays meaningful after other monitors are removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonitorId(pub(crate) u32);

/// Top-level config as produced by the builder, before validation.
///
/// Required fields are still optional here; [`Config::try_from`] turns this
/// into a [`Config`] or rejects it as a whole.
#[derive(Debug)]
pub struct RawConfig {
    pub name: Option<String>,
    pub logfile: String,
    pub pidfile: Option<String>,
    pub daemon: bool,
    /// Monitor definitions in declaration order.
    pub monitors: Vec<RawMonitor>,
}

impl Default for RawConfig {
    fn default() -> Self {
        Self {
            name: None,
            logfile: DEFAULT_LOGFILE.to_string(),
            pidfile: None,
            daemon: false,
            monitors: Vec::new(),
        }
    }
}

/// One monitor definition as produced by the builder, before validation.
#[derive(Debug)]
pub struct RawMonitor {
    /// Key the monitor was declared under in the document.
    pub key: String,
    pub name: String,
    pub cmd: Option<String>,
    pub logfile: String,
    pub on_error: Option<String>,
    pub on_restart: Option<String>,
    pub cron: Option<Cron>,
    pub max_attempts: u32,
    pub max_sleepsec: u32,
}

impl RawMonitor {
    /// A monitor with every default applied, named after its JSON key.
    pub fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
            name: key.to_string(),
            cmd: None,
            logfile: DEFAULT_LOGFILE.to_string(),
            on_error: None,
            on_restart: None,
            cron: None,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            max_sleepsec: DEFAULT_MAX_SLEEPSEC,
        }
    }
}

/// Validated supervision config.
///
/// Owns every [`Monitor`] exclusively. Only obtainable through validation, so
/// `name` is always present and `monitors` was non-empty at load time.
#[derive(Debug)]
pub struct Config {
    pub name: String,
    pub logfile: String,
    pub pidfile: Option<String>,
    pub daemon: bool,
    pub(crate) monitors: Monitors,
}

impl Config {
    pub(crate) fn new_unchecked(
        name: String,
        logfile: String,
        pidfile: Option<String>,
        daemon: bool,
        monitors: Monitors,
    ) -> Self {
        Self {
            name,
            logfile,
            pidfile,
            daemon,
            monitors,
        }
    }

    /// Monitors in declaration order.
    pub fn monitors(&self) -> &Monitors {
        &self.monitors
    }

    pub fn monitor(&self, id: MonitorId) -> Option<&Monitor> {
        self.monitors.get(id)
    }

    pub fn monitor_mut(&mut self, id: MonitorId) -> Option<&mut Monitor> {
        self.monitors.get_mut(id)
    }

    /// First monitor (in declaration order) with the given effective name.
    pub fn find(&self, name: &str) -> Option<&Monitor> {
        self.monitors.iter().find(|m| m.name == name)
    }
}

/// Serialises in the same shape the loader reads: reserved keys first, then
/// one object per monitor under its declaration key.
impl Serialize for Config {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let extra = usize::from(self.pidfile.is_some());
        let mut map = serializer.serialize_map(Some(3 + extra + self.monitors.len()))?;
        map.serialize_entry("name", &self.name)?;
        map.serialize_entry("logfile", &self.logfile)?;
        if let Some(ref pidfile) = self.pidfile {
            map.serialize_entry("pidfile", pidfile)?;
        }
        map.serialize_entry("daemon", &self.daemon)?;
        for monitor in self.monitors.iter() {
            map.serialize_entry(&monitor.key, monitor)?;
        }
        map.end()
    }
}

/// A supervised process definition plus the runtime state a supervisor
/// keeps for it.
#[derive(Debug)]
pub struct Monitor {
    pub(crate) id: MonitorId,

    /// Key the monitor was declared under; unique within a document.
    pub(crate) key: String,

    /// Effective name: the JSON key unless overridden by an inner `name`.
    pub name: String,

    pub cmd: String,

    /// Independent of [`Config::logfile`]; never inherited.
    pub logfile: String,

    /// Hook command run when the process fails.
    pub on_error: Option<String>,

    /// Hook command run when the process is restarted.
    pub on_restart: Option<String>,

    pub(crate) cron: Option<Cron>,

    pub max_attempts: u32,

    pub max_sleepsec: u32,

    /// Running process, `None` when nothing is associated.
    pub pid: Option<u32>,

    /// Restart attempts made since the last reset.
    pub attempts: u32,

    /// Backoff delay before the next restart.
    pub clock: Duration,
}

/// Static fields only, under the document's key names. `name` is written
/// only when it overrides the declaration key.
impl Serialize for Monitor {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        if self.name != self.key {
            map.serialize_entry("name", &self.name)?;
        }
        map.serialize_entry("cmd", &self.cmd)?;
        map.serialize_entry("logfile", &self.logfile)?;
        if let Some(ref hook) = self.on_error {
            map.serialize_entry("on_error", hook)?;
        }
        if let Some(ref hook) = self.on_restart {
            map.serialize_entry("on_restart", hook)?;
        }
        if let Some(ref cron) = self.cron {
            map.serialize_entry("cron", cron)?;
        }
        map.serialize_entry("attempts", &self.max_attempts)?;
        map.serialize_entry("sleep", &self.max_sleepsec)?;
        map.end()
    }
}

impl Monitor {
    /// Promote a raw definition whose `cmd` has already been checked.
    pub(crate) fn from_raw(id: MonitorId, raw: RawMonitor, cmd: String) -> Self {
        Self {
            id,
            key: raw.key,
            name: raw.name,
            cmd,
            logfile: raw.logfile,
            on_error: raw.on_error,
            on_restart: raw.on_restart,
            cron: raw.cron,
            max_attempts: raw.max_attempts,
            max_sleepsec: raw.max_sleepsec,
            pid: None,
            attempts: 0,
            clock: INITIAL_CLOCK,
        }
    }

    pub fn id(&self) -> MonitorId {
        self.id
    }

    /// Key the monitor was declared under in the document.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn cron(&self) -> Option<&Cron> {
        self.cron.as_ref()
    }

    /// Cron-scheduled monitors live as long as their config and cannot be
    /// removed.
    pub fn is_permanent(&self) -> bool {
        self.cron.is_some()
    }

    /// Next scheduled start after `after`, for cron-scheduled monitors.
    pub fn next_run<Tz: chrono::TimeZone>(
        &self,
        after: &chrono::DateTime<Tz>,
    ) -> Option<chrono::DateTime<Tz>> {
        self.cron.as_ref().and_then(|cron| cron.next_after(after))
    }
}
