//! Script variable naming
//!
//! Every renderable entity owns the identifier it is declared under in the
//! generated script. Names are handed out once, at construction time, from a
//! process-wide sequence so two entities never share a name.

use serde::{de::Error as _, Deserialize, Deserializer};
use std::sync::atomic::{AtomicU64, Ordering};

static SEQUENCE: AtomicU64 = AtomicU64::new(1);

/// Returns a fresh `<prefix>_<n>` identifier.
pub fn next_variable(prefix: &str) -> String {
    let id = SEQUENCE.fetch_add(1, Ordering::Relaxed);
    format!("{}_{}", prefix, id)
}

/// Checks that a caller supplied name is a plain JavaScript identifier.
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// serde `deserialize_with` hook that rejects names which are not identifiers
pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let name = String::deserialize(deserializer)?;
    if is_valid_identifier(&name) {
        Ok(name)
    } else {
        Err(D::Error::custom(format!(
            "invalid script variable name: {:?}",
            name
        )))
    }
}

// serde `default = "..."` hooks, one per entity kind
pub(crate) fn map() -> String {
    next_variable("map")
}

pub(crate) fn bound() -> String {
    next_variable("bound")
}

pub(crate) fn marker() -> String {
    next_variable("marker")
}

pub(crate) fn marker_image() -> String {
    next_variable("marker_image")
}

pub(crate) fn marker_shape() -> String {
    next_variable("marker_shape")
}

pub(crate) fn info_window() -> String {
    next_variable("info_window")
}

pub(crate) fn polyline() -> String {
    next_variable("polyline")
}

pub(crate) fn polygon() -> String {
    next_variable("polygon")
}

pub(crate) fn rectangle() -> String {
    next_variable("rectangle")
}

pub(crate) fn circle() -> String {
    next_variable("circle")
}

pub(crate) fn ground_overlay() -> String {
    next_variable("ground_overlay")
}

pub(crate) fn event() -> String {
    next_variable("event")
}
