use crate::{
    core::{geo::Bound, naming, Options},
    overlays::Overlay,
};
use serde::{Deserialize, Serialize};

/// An image stretched over a geographic extent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroundOverlay {
    #[serde(default = "naming::ground_overlay", deserialize_with = "naming::deserialize")]
    javascript_variable: String,
    pub url: String,
    pub bound: Bound,
    #[serde(default)]
    options: Options,
}

impl GroundOverlay {
    pub fn new(url: impl Into<String>, bound: Bound) -> Self {
        Self {
            javascript_variable: naming::ground_overlay(),
            url: url.into(),
            bound,
            options: Options::new(),
        }
    }

    pub fn bound(&self) -> &Bound {
        &self.bound
    }
}

impl_overlay_accessors!(GroundOverlay);

impl Overlay for GroundOverlay {
    fn extent(&self) -> Option<Bound> {
        // separately named so a fitted viewport never reuses the overlay's bound
        Some(Bound::new(self.bound.south_west, self.bound.north_east))
    }
}
