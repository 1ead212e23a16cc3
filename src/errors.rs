// src/errors.rs

//! Crate-wide error types.
//!
//! Loading fails in exactly one of three stages (read, parse, validate);
//! [`ProcmonError::stage`] names it for diagnostics.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProcmonError {
    /// The document could not be read (missing file, permissions, short read).
    #[error("unable to read config {path:?}: {source}")]
    Resource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid JSON.
    #[error("unable to parse config: {0}")]
    Syntax(#[from] serde_json::Error),

    /// The document is JSON but does not describe a usable configuration.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

impl ProcmonError {
    /// Short stable label for the loading stage that failed.
    pub fn stage(&self) -> &'static str {
        match self {
            ProcmonError::Resource { .. } => "read",
            ProcmonError::Syntax(_) => "parse",
            ProcmonError::Config(_) => "validate",
        }
    }
}

/// Semantic problems found while building or validating a configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("top-level JSON value must be an object")]
    RootNotObject,

    #[error("missing required top-level `name`")]
    MissingName,

    #[error("config must declare at least one monitor")]
    NoMonitors,

    #[error("monitor '{monitor}' has no `cmd`")]
    MissingCmd { monitor: String },

    #[error("monitor '{monitor}' has invalid cron expression {expr:?}: {reason}")]
    InvalidCron {
        monitor: String,
        expr: String,
        reason: String,
    },

    /// Only raised in strict mode; lenient loading ignores the field instead.
    #[error("`{key}` in {entity} must be {expected}")]
    TypeMismatch {
        entity: String,
        key: &'static str,
        expected: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, ProcmonError>;
