//! Map model and the geometric value types it is built from

pub mod builder;
pub mod config;
pub mod constants;
pub mod geo;
pub mod map;
pub mod naming;

use crate::{MapError, Result};

/// Validates a caller supplied script variable name
pub(crate) fn checked_variable(name: String) -> Result<String> {
    if naming::is_valid_identifier(&name) {
        Ok(name)
    } else {
        Err(MapError::InvalidVariable(name))
    }
}

/// Free-form API options, kept in insertion order
pub type Options = serde_json::Map<String, serde_json::Value>;
