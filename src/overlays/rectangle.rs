use crate::{
    core::{geo::Bound, naming, Options},
    overlays::Overlay,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    #[serde(default = "naming::rectangle", deserialize_with = "naming::deserialize")]
    javascript_variable: String,
    pub bound: Bound,
    #[serde(default)]
    options: Options,
}

impl Rectangle {
    pub fn new(bound: Bound) -> Self {
        Self {
            javascript_variable: naming::rectangle(),
            bound,
            options: Options::new(),
        }
    }

    pub fn bound(&self) -> &Bound {
        &self.bound
    }
}

impl_overlay_accessors!(Rectangle);

impl Overlay for Rectangle {
    fn extent(&self) -> Option<Bound> {
        // separately named so a fitted viewport never reuses the overlay's bound
        Some(Bound::new(self.bound.south_west, self.bound.north_east))
    }
}
