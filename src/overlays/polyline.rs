use crate::{
    core::{
        geo::{Bound, Coordinate},
        naming, Options,
    },
    overlays::Overlay,
};
use serde::{Deserialize, Serialize};

/// An open path of connected segments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    #[serde(default = "naming::polyline", deserialize_with = "naming::deserialize")]
    javascript_variable: String,
    pub coordinates: Vec<Coordinate>,
    #[serde(default)]
    options: Options,
}

impl Polyline {
    pub fn new(coordinates: Vec<Coordinate>) -> Self {
        Self {
            javascript_variable: naming::polyline(),
            coordinates,
            options: Options::new(),
        }
    }

    pub fn add_coordinate(&mut self, coordinate: Coordinate) {
        self.coordinates.push(coordinate);
    }
}

impl_overlay_accessors!(Polyline);

impl Overlay for Polyline {
    fn extent(&self) -> Option<Bound> {
        Bound::from_coordinates(&self.coordinates)
    }
}
