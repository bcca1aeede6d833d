//! Configuration of the script loader emitted ahead of every map
//!
//! The configuration is plain data that can be built in code or read from a
//! JSON document. It only affects the external `<script src=...>` line; the
//! map body is driven entirely by the model.

use crate::core::constants::{DEFAULT_API_URL, DEFAULT_SECURE_API_URL};
use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HelperConfig {
    /// Loader URL; when unset the http or https default is used
    pub api_url: Option<String>,
    /// Use the https loader URL
    pub https: bool,
    /// Value of the `sensor` query parameter
    pub sensor: bool,
    /// Interface language, e.g. `fr`
    pub language: Option<String>,
    /// Additional API libraries, e.g. `geometry`, `places`
    pub libraries: Vec<String>,
}

impl Default for HelperConfig {
    fn default() -> Self {
        Self {
            api_url: None,
            https: false,
            sensor: false,
            language: None,
            libraries: Vec::new(),
        }
    }
}

impl HelperConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Base loader URL without query parameters
    pub fn base_url(&self) -> &str {
        match &self.api_url {
            Some(url) => url,
            None if self.https => DEFAULT_SECURE_API_URL,
            None => DEFAULT_API_URL,
        }
    }

    /// Full loader URL including query parameters
    pub fn api_url(&self) -> String {
        let mut url = format!("{}?sensor={}", self.base_url(), self.sensor);

        if let Some(language) = &self.language {
            url.push_str("&language=");
            url.push_str(language);
        }

        if !self.libraries.is_empty() {
            url.push_str("&libraries=");
            url.push_str(&self.libraries.join(","));
        }

        url
    }
}
