// src/config/mod.rs

//! Configuration loading and the in-memory supervision model.
//!
//! Responsibilities:
//! - Define the config/monitor data model (`model.rs`, `monitors.rs`).
//! - Decode JSON entries into typed fields (`extract.rs`, `builder.rs`).
//! - Reject configs that break required invariants (`validate.rs`).
//! - Load a config file from disk (`loader.rs`).
//! - Runtime reset/remove/destroy operations (`lifecycle.rs`).

pub mod builder;
mod extract;
pub mod lifecycle;
pub mod loader;
pub mod model;
pub mod monitors;
pub mod validate;

pub use builder::{build_config, build_monitor};
pub use loader::{
    LoadOptions, build_and_validate, default_config_path, load_from_path, load_from_str, load_with,
    parse_document,
};
pub use model::{
    Config, DEFAULT_LOGFILE, DEFAULT_MAX_ATTEMPTS, DEFAULT_MAX_SLEEPSEC, INITIAL_CLOCK, Monitor,
    MonitorId, RawConfig, RawMonitor,
};
pub use monitors::Monitors;
pub use validate::validate_config;
