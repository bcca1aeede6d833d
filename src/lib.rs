//! # mapscript
//!
//! Renders map models into HTML and Google Maps JavaScript API code.
//!
//! A [`Map`] is assembled from plain value types (coordinates, bounds,
//! overlays, listeners) and handed once to a [`MapHelper`], which emits the
//! container element, its stylesheet and the script that builds the map. The
//! output is deterministic text meant to be embedded in an HTML page.
//!
//! ```
//! use mapscript::prelude::*;
//!
//! let mut map = Map::new();
//! map.set_html_container_id("map");
//! map.set_center(Coordinate::new(48.8566, 2.3522, true));
//! map.add_marker(Marker::new(Coordinate::new(48.8584, 2.2945, true)));
//!
//! let html = MapHelper::new().render(&map).unwrap();
//! assert!(html.starts_with("<div id=\"map\"></div>\n"));
//! ```

pub mod controls;
pub mod core;
pub mod events;
pub mod overlays;
pub mod prelude;
pub mod rendering;

// Re-export public API
pub use crate::core::{
    builder::MapBuilder,
    config::HelperConfig,
    geo::{Bound, Coordinate, Point, Size},
    map::Map,
};

pub use controls::{
    ControlPosition, MapTypeControl, MapTypeControlStyle, MapTypeId, ZoomControl,
    ZoomControlStyle,
};

pub use events::{Event, EventManager, ListenerKind};

pub use overlays::{
    Animation, Circle, GroundOverlay, InfoWindow, Marker, MarkerImage, MarkerShape, Overlay,
    Polygon, Polyline, Rectangle, ShapeType,
};

pub use rendering::{JsExpression, MapHelper, RenderContext, RenderOverlay};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, MapError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unknown map type id: {0}")]
    InvalidMapTypeId(String),

    #[error("Invalid option {key}: {reason}")]
    InvalidOption { key: String, reason: String },

    #[error("Invalid script variable name: {0:?}")]
    InvalidVariable(String),
}

/// Error type alias for convenience
pub type Error = MapError;
