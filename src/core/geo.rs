use crate::core::naming;
use serde::{Deserialize, Serialize};

fn default_no_wrap() -> bool {
    true
}

/// A geographical coordinate as understood by `google.maps.LatLng`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
    /// Disables clamping of the latitude and wrapping of the longitude
    #[serde(default = "default_no_wrap")]
    pub no_wrap: bool,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64, no_wrap: bool) -> Self {
        Self {
            latitude,
            longitude,
            no_wrap,
        }
    }
}

impl Default for Coordinate {
    fn default() -> Self {
        Self::new(0.0, 0.0, true)
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude, true)
    }
}

/// A point in pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A two-dimensional size with optional CSS units
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub width_unit: Option<String>,
    #[serde(default)]
    pub height_unit: Option<String>,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            width_unit: None,
            height_unit: None,
        }
    }

    pub fn with_units(
        mut self,
        width_unit: impl Into<String>,
        height_unit: impl Into<String>,
    ) -> Self {
        self.width_unit = Some(width_unit.into());
        self.height_unit = Some(height_unit.into());
        self
    }
}

/// A rectangular extent defined by its south-west and north-east corners
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bound {
    #[serde(default = "naming::bound", deserialize_with = "naming::deserialize")]
    javascript_variable: String,
    pub south_west: Coordinate,
    pub north_east: Coordinate,
}

impl Bound {
    pub fn new(south_west: Coordinate, north_east: Coordinate) -> Self {
        Self {
            javascript_variable: naming::bound(),
            south_west,
            north_east,
        }
    }

    /// Smallest bound enclosing every coordinate, `None` for an empty slice
    pub fn from_coordinates(coordinates: &[Coordinate]) -> Option<Self> {
        let (first, rest) = coordinates.split_first()?;
        let mut bound = Self::new(*first, *first);
        for coordinate in rest {
            bound.extend(coordinate);
        }
        Some(bound)
    }

    pub fn javascript_variable(&self) -> &str {
        &self.javascript_variable
    }

    pub fn set_javascript_variable(&mut self, name: impl Into<String>) -> crate::Result<()> {
        self.javascript_variable = crate::core::checked_variable(name.into())?;
        Ok(())
    }

    /// Checks if the bound contains a coordinate
    pub fn contains(&self, coordinate: &Coordinate) -> bool {
        coordinate.latitude >= self.south_west.latitude
            && coordinate.latitude <= self.north_east.latitude
            && coordinate.longitude >= self.south_west.longitude
            && coordinate.longitude <= self.north_east.longitude
    }

    /// Extends the bound to include a coordinate
    pub fn extend(&mut self, coordinate: &Coordinate) {
        self.south_west.latitude = self.south_west.latitude.min(coordinate.latitude);
        self.south_west.longitude = self.south_west.longitude.min(coordinate.longitude);
        self.north_east.latitude = self.north_east.latitude.max(coordinate.latitude);
        self.north_east.longitude = self.north_east.longitude.max(coordinate.longitude);
    }

    /// Returns a new, separately named bound covering both extents
    pub fn union(&self, other: &Bound) -> Bound {
        let mut union = Bound::new(self.south_west, self.north_east);
        union.extend(&other.south_west);
        union.extend(&other.north_east);
        union
    }

    /// Gets the center point of the bound
    pub fn center(&self) -> Coordinate {
        Coordinate::new(
            (self.south_west.latitude + self.north_east.latitude) / 2.0,
            (self.south_west.longitude + self.north_east.longitude) / 2.0,
            self.south_west.no_wrap && self.north_east.no_wrap,
        )
    }
}
