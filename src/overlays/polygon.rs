use crate::{
    core::{
        geo::{Bound, Coordinate},
        naming, Options,
    },
    overlays::Overlay,
};
use serde::{Deserialize, Serialize};

/// A closed area; the path is closed implicitly
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    #[serde(default = "naming::polygon", deserialize_with = "naming::deserialize")]
    javascript_variable: String,
    pub coordinates: Vec<Coordinate>,
    #[serde(default)]
    options: Options,
}

impl Polygon {
    pub fn new(coordinates: Vec<Coordinate>) -> Self {
        Self {
            javascript_variable: naming::polygon(),
            coordinates,
            options: Options::new(),
        }
    }

    pub fn add_coordinate(&mut self, coordinate: Coordinate) {
        self.coordinates.push(coordinate);
    }
}

impl_overlay_accessors!(Polygon);

impl Overlay for Polygon {
    fn extent(&self) -> Option<Bound> {
        Bound::from_coordinates(&self.coordinates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polygon_extent() {
        let mut polygon = Polygon::new(vec![
            Coordinate::new(0.0, 0.0, true),
            Coordinate::new(2.0, 1.0, true),
        ]);
        polygon.add_coordinate(Coordinate::new(-1.0, 3.0, true));

        let extent = polygon.extent().unwrap();
        assert_eq!(extent.south_west.latitude, -1.0);
        assert_eq!(extent.north_east.longitude, 3.0);
        assert!(Polygon::new(Vec::new()).extent().is_none());
    }
}
