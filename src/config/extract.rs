// src/config/extract.rs

//! Table-driven decoding of JSON object entries into typed fields.
//!
//! Each entity declares a `&[Field<T>]` table mapping recognized keys to
//! decoders. [`scan`] walks an object once, in document order, and dispatches
//! every entry either to its decoder or to a caller-supplied fallback.

use serde_json::{Map, Value};
use tracing::warn;

use crate::config::loader::LoadOptions;
use crate::errors::ConfigError;

/// Why a decoder did not accept a value.
#[derive(Debug)]
pub(crate) enum FieldError {
    /// The value has the wrong JSON type; carries what was expected.
    WrongType(&'static str),
    /// The value is well-typed but unusable. Always fatal.
    Invalid(ConfigError),
}

/// A recognized key and the function that stores its value into `T`.
pub(crate) struct Field<T> {
    pub key: &'static str,
    pub decode: fn(&mut T, &Value) -> Result<(), FieldError>,
}

pub(crate) fn string(value: &Value) -> Result<String, FieldError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        _ => Err(FieldError::WrongType("a string")),
    }
}

pub(crate) fn integer(value: &Value) -> Result<u32, FieldError> {
    value
        .as_u64()
        .and_then(|n| u32::try_from(n).ok())
        .ok_or(FieldError::WrongType("a non-negative integer"))
}

pub(crate) fn boolean(value: &Value) -> Result<bool, FieldError> {
    value.as_bool().ok_or(FieldError::WrongType("a boolean"))
}

/// Decode every entry of `object` into `target`.
///
/// Keys found in `fields` go to their decoder; all others go to
/// `unrecognized`. A wrongly typed value is skipped with a warning, or
/// rejected when `options.strict` is set.
pub(crate) fn scan<T, F>(
    target: &mut T,
    object: &Map<String, Value>,
    fields: &[Field<T>],
    entity: &str,
    options: LoadOptions,
    mut unrecognized: F,
) -> Result<(), ConfigError>
where
    F: FnMut(&mut T, &str, &Value) -> Result<(), ConfigError>,
{
    for (key, value) in object {
        let Some(field) = fields.iter().find(|f| f.key == key.as_str()) else {
            unrecognized(target, key, value)?;
            continue;
        };

        match (field.decode)(target, value) {
            Ok(()) => {}
            Err(FieldError::Invalid(err)) => return Err(err),
            Err(FieldError::WrongType(expected)) if options.strict => {
                return Err(ConfigError::TypeMismatch {
                    entity: entity.to_string(),
                    key: field.key,
                    expected,
                });
            }
            Err(FieldError::WrongType(expected)) => {
                warn!(entity, key = field.key, expected, "ignoring mistyped field");
            }
        }
    }
    Ok(())
}
