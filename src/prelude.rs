//! Prelude module for common mapscript types and traits
//!
//! This module re-exports the most commonly used types, traits, and functions
//! for easy importing with `use mapscript::prelude::*;`

pub use crate::core::{
    builder::MapBuilder,
    config::HelperConfig,
    geo::{Bound, Coordinate, Point, Size},
    map::Map,
    Options,
};

pub use crate::controls::{
    ControlPosition, MapTypeControl, MapTypeControlStyle, MapTypeId, ZoomControl,
    ZoomControlStyle,
};

pub use crate::events::{Event, EventManager, ListenerKind};

pub use crate::overlays::{
    Animation, Circle, GroundOverlay, InfoWindow, Marker, MarkerImage, MarkerShape, Overlay,
    Polygon, Polyline, Rectangle, ShapeType,
};

pub use crate::rendering::{JsExpression, MapHelper, RenderContext, RenderOverlay};

pub use crate::{Error as MapError, Result};
