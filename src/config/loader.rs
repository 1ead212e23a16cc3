// src/config/loader.rs

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, info};

use crate::config::builder::build_config;
use crate::config::model::Config;
use crate::config::validate::validate_config;
use crate::errors::{ConfigError, ProcmonError, Result};
use crate::fs::{FileSystem, RealFileSystem};

/// Knobs that change how a document is interpreted.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadOptions {
    /// Reject recognized keys holding the wrong JSON type instead of
    /// ignoring them.
    pub strict: bool,
}

/// Load and validate a config file from the real filesystem with default
/// options.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<Config> {
    load_with(&RealFileSystem, path, LoadOptions::default())
}

/// Load and validate a config file.
///
/// Each stage fails with its own error kind:
///
/// - read: [`ProcmonError::Resource`] (missing file, short read, ...)
/// - parse: [`ProcmonError::Syntax`]
/// - build + validate: [`ProcmonError::Config`]
///
/// Nothing is returned unless every stage succeeds.
pub fn load_with(
    fs: &dyn FileSystem,
    path: impl AsRef<Path>,
    options: LoadOptions,
) -> Result<Config> {
    let path = path.as_ref();
    let bytes = fs.read_all(path).map_err(|source| ProcmonError::Resource {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(?path, bytes = bytes.len(), "read config document");

    let root = parse_document(&bytes)?;
    let config = build_and_validate(&root, options)?;

    info!(
        ?path,
        name = %config.name,
        monitors = config.monitors().len(),
        "loaded config"
    );
    Ok(config)
}

/// Load and validate a config held in memory.
pub fn load_from_str(text: &str, options: LoadOptions) -> Result<Config> {
    let root = parse_document(text.as_bytes())?;
    Ok(build_and_validate(&root, options)?)
}

/// Parse raw bytes into a JSON tree; object entries keep document order.
pub fn parse_document(bytes: &[u8]) -> Result<Value> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Build the config from a parsed tree, then validate it as a whole.
pub fn build_and_validate(
    root: &Value,
    options: LoadOptions,
) -> std::result::Result<Config, ConfigError> {
    let raw = build_config(root, options)?;
    validate_config(raw)
}

/// Config path used when none is given on the command line.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("procmon.json")
}
