use crate::core::{
    geo::{Point, Size},
    naming,
};
use serde::{Deserialize, Serialize};

/// Icon or shadow image of a marker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerImage {
    #[serde(default = "naming::marker_image", deserialize_with = "naming::deserialize")]
    javascript_variable: String,
    pub url: String,
    #[serde(default)]
    pub size: Option<Size>,
    /// Position of the image within a sprite
    #[serde(default)]
    pub origin: Option<Point>,
    /// Position at which to anchor the image on the marker position
    #[serde(default)]
    pub anchor: Option<Point>,
    #[serde(default)]
    pub scaled_size: Option<Size>,
}

impl MarkerImage {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            javascript_variable: naming::marker_image(),
            url: url.into(),
            size: None,
            origin: None,
            anchor: None,
            scaled_size: None,
        }
    }

    pub fn javascript_variable(&self) -> &str {
        &self.javascript_variable
    }

    pub fn set_javascript_variable(&mut self, name: impl Into<String>) -> crate::Result<()> {
        self.javascript_variable = crate::core::checked_variable(name.into())?;
        Ok(())
    }

    pub fn with_size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_origin(mut self, origin: Point) -> Self {
        self.origin = Some(origin);
        self
    }

    pub fn with_anchor(mut self, anchor: Point) -> Self {
        self.anchor = Some(anchor);
        self
    }

    pub fn with_scaled_size(mut self, scaled_size: Size) -> Self {
        self.scaled_size = Some(scaled_size);
        self
    }
}
