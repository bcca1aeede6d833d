use crate::core::naming;
use serde::{Deserialize, Serialize};

/// A listener registration
///
/// `instance` and `handle` are raw script tokens (a variable name or an inline
/// function) and are emitted verbatim; `event_name` is emitted quoted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(default = "naming::event", deserialize_with = "naming::deserialize")]
    javascript_variable: String,
    pub instance: String,
    pub event_name: String,
    pub handle: String,
    /// Capture phase flag, only meaningful for DOM listeners
    #[serde(default)]
    pub capture: bool,
}

impl Event {
    pub fn new(
        instance: impl Into<String>,
        event_name: impl Into<String>,
        handle: impl Into<String>,
    ) -> Self {
        Self {
            javascript_variable: naming::event(),
            instance: instance.into(),
            event_name: event_name.into(),
            handle: handle.into(),
            capture: false,
        }
    }

    pub fn with_capture(mut self, capture: bool) -> Self {
        self.capture = capture;
        self
    }

    /// Identifier the listener handle is stored under, for later removal
    pub fn javascript_variable(&self) -> &str {
        &self.javascript_variable
    }

    pub fn set_javascript_variable(&mut self, name: impl Into<String>) -> crate::Result<()> {
        self.javascript_variable = crate::core::checked_variable(name.into())?;
        Ok(())
    }
}
