//! Drawable map objects
//!
//! Each overlay owns its geometry, an ordered set of free-form API options and
//! the script variable it is declared under. Required geometry is taken by the
//! constructor so an overlay is always complete enough to render.

#[macro_use]
mod macros;

pub mod circle;
pub mod ground_overlay;
pub mod info_window;
pub mod marker;
pub mod marker_image;
pub mod marker_shape;
pub mod polygon;
pub mod polyline;
pub mod rectangle;

pub use circle::Circle;
pub use ground_overlay::GroundOverlay;
pub use info_window::InfoWindow;
pub use marker::{Animation, Marker};
pub use marker_image::MarkerImage;
pub use marker_shape::{MarkerShape, ShapeType};
pub use polygon::Polygon;
pub use polyline::Polyline;
pub use rectangle::Rectangle;

use crate::core::geo::Bound;

/// Shared behaviour of everything that can be drawn on a map
pub trait Overlay {
    /// Geographic extent covered by the overlay, if it has one
    fn extent(&self) -> Option<Bound>;
}
