//! Map control configuration: map types, control anchors and styles

pub mod map_type_control;
pub mod map_type_id;
pub mod position;
pub mod zoom_control;

pub use map_type_control::{MapTypeControl, MapTypeControlStyle};
pub use map_type_id::MapTypeId;
pub use position::ControlPosition;
pub use zoom_control::{ZoomControl, ZoomControlStyle};
