use crate::{
    core::{
        geo::{Bound, Coordinate},
        naming, Options,
    },
    overlays::Overlay,
};
use serde::{Deserialize, Serialize};

/// Mean earth radius used by the API for circle geometry, in meters
const EARTH_RADIUS: f64 = 6378137.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    #[serde(default = "naming::circle", deserialize_with = "naming::deserialize")]
    javascript_variable: String,
    pub center: Coordinate,
    /// Radius in meters
    pub radius: f64,
    #[serde(default)]
    options: Options,
}

impl Circle {
    pub fn new(center: Coordinate, radius: f64) -> Self {
        Self {
            javascript_variable: naming::circle(),
            center,
            radius,
            options: Options::new(),
        }
    }
}

impl_overlay_accessors!(Circle);

impl Overlay for Circle {
    /// Approximate extent; longitude spread grows with latitude
    fn extent(&self) -> Option<Bound> {
        let lat_delta = (self.radius / EARTH_RADIUS).to_degrees();
        let lng_delta = lat_delta / self.center.latitude.to_radians().cos().max(f64::EPSILON);

        Some(Bound::new(
            Coordinate::new(
                self.center.latitude - lat_delta,
                self.center.longitude - lng_delta,
                self.center.no_wrap,
            ),
            Coordinate::new(
                self.center.latitude + lat_delta,
                self.center.longitude + lng_delta,
                self.center.no_wrap,
            ),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_extent_contains_center() {
        let circle = Circle::new(Coordinate::new(45.0, 10.0, true), 1000.0);
        let extent = circle.extent().unwrap();

        assert!(extent.contains(&circle.center));
        assert!(extent.north_east.latitude > 45.0);
        // a degree of longitude is shorter than a degree of latitude at 45N
        let lat_span = extent.north_east.latitude - extent.south_west.latitude;
        let lng_span = extent.north_east.longitude - extent.south_west.longitude;
        assert!(lng_span > lat_span);
    }
}
