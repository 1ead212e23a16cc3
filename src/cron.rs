// src/cron.rs

//! Owned cron schedule attached to a monitor.
//!
//! Expression evaluation is delegated to `croner`; this type only owns the
//! parsed schedule together with its source text. A `Cron` is deliberately
//! not `Clone`: exactly one monitor owns it and dropping the monitor
//! releases it.

use std::fmt;

use chrono::{DateTime, TimeZone};

/// Parsed schedule expression.
pub struct Cron {
    expr: String,
    schedule: croner::Cron,
}

impl Cron {
    /// Parse a standard 5-field expression (a leading seconds field is
    /// also accepted).
    ///
    /// On failure the parser's message is returned.
    pub fn parse(expr: &str) -> Result<Self, String> {
        let schedule = croner::Cron::new(expr)
            .with_seconds_optional()
            .parse()
            .map_err(|e| e.to_string())?;

        Ok(Self {
            expr: expr.to_string(),
            schedule,
        })
    }

    /// The expression exactly as it appeared in the config.
    pub fn expression(&self) -> &str {
        &self.expr
    }

    /// Next trigger time strictly after `after`, if the schedule has one.
    pub fn next_after<Tz: TimeZone>(&self, after: &DateTime<Tz>) -> Option<DateTime<Tz>> {
        self.schedule.find_next_occurrence(after, false).ok()
    }
}

impl fmt::Debug for Cron {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Cron").field(&self.expr).finish()
    }
}

impl serde::Serialize for Cron {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.expr)
    }
}
