use crate::core::naming;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeType {
    Circle,
    Poly,
    Rect,
}

impl std::fmt::Display for ShapeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShapeType::Circle => write!(f, "circle"),
            ShapeType::Poly => write!(f, "poly"),
            ShapeType::Rect => write!(f, "rect"),
        }
    }
}

/// Clickable region of a marker icon, in image pixels
///
/// `coordinates` follow the HTML image map convention: `[x, y, r]` for a
/// circle, `[x1, y1, x2, y2]` for a rectangle and `[x1, y1, ..., xn, yn]` for
/// a polygon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerShape {
    #[serde(default = "naming::marker_shape", deserialize_with = "naming::deserialize")]
    javascript_variable: String,
    #[serde(rename = "type")]
    pub shape_type: ShapeType,
    pub coordinates: Vec<i32>,
}

impl MarkerShape {
    pub fn new(shape_type: ShapeType, coordinates: Vec<i32>) -> Self {
        Self {
            javascript_variable: naming::marker_shape(),
            shape_type,
            coordinates,
        }
    }

    pub fn circle(x: i32, y: i32, radius: i32) -> Self {
        Self::new(ShapeType::Circle, vec![x, y, radius])
    }

    pub fn rect(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self::new(ShapeType::Rect, vec![x1, y1, x2, y2])
    }

    pub fn poly(points: &[(i32, i32)]) -> Self {
        let coordinates = points.iter().flat_map(|&(x, y)| [x, y]).collect();
        Self::new(ShapeType::Poly, coordinates)
    }

    pub fn javascript_variable(&self) -> &str {
        &self.javascript_variable
    }

    pub fn set_javascript_variable(&mut self, name: impl Into<String>) -> crate::Result<()> {
        self.javascript_variable = crate::core::checked_variable(name.into())?;
        Ok(())
    }
}
