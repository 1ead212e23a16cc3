// src/config/lifecycle.rs

//! Runtime operations a supervisor performs on a loaded config.
//!
//! None of these are thread-safe; callers serialize access to the `Config`.

use tracing::{debug, trace};

use crate::config::model::{Config, INITIAL_CLOCK, Monitor, MonitorId};

impl Monitor {
    /// Clear runtime state: no pid, zero attempts, initial backoff clock.
    ///
    /// Static configuration is untouched and repeated calls are no-ops.
    pub fn reset(&mut self) {
        self.pid = None;
        self.attempts = 0;
        self.clock = INITIAL_CLOCK;
    }
}

impl Config {
    /// Reset one monitor. Returns `false` if the id is not present.
    pub fn reset_monitor(&mut self, id: MonitorId) -> bool {
        match self.monitors.get_mut(id) {
            Some(monitor) => {
                monitor.reset();
                true
            }
            None => false,
        }
    }

    pub fn reset_all(&mut self) {
        self.monitors.iter_mut().for_each(Monitor::reset);
    }

    /// Remove a monitor and release everything it owns.
    ///
    /// Cron-scheduled monitors are permanent: they are never removed and the
    /// collection is left as it was. Returns whether a monitor was removed.
    pub fn remove_monitor(&mut self, id: MonitorId) -> bool {
        let Some(monitor) = self.monitors.get(id) else {
            return false;
        };
        if monitor.is_permanent() {
            debug!(monitor = %monitor.name, "refusing to remove cron-scheduled monitor");
            return false;
        }

        match self.monitors.take(id) {
            Some(monitor) => {
                debug!(monitor = %monitor.name, remaining = self.monitors.len(), "removed monitor");
                true
            }
            None => false,
        }
    }

    /// Release every monitor and then the config itself.
    ///
    /// Consumes the config, so it cannot be destroyed twice. Returns the
    /// number of monitors released.
    pub fn destroy(mut self) -> usize {
        let released = self
            .monitors
            .drain()
            .inspect(|m| trace!(monitor = %m.name, "releasing monitor"))
            .count();
        debug!(config = %self.name, released, "config destroyed");
        released
    }
}
