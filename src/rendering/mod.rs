//! Text rendering of map models into HTML and Google Maps API script
//!
//! Value types implement [`JsExpression`] and become a single expression;
//! overlays implement [`RenderOverlay`] and become one or more statements.
//! [`MapHelper`] composes everything into the final fragment.

pub mod base;
pub mod context;
pub mod controls;
pub mod events;
pub mod map;
pub mod overlays;
pub mod script;

pub use context::RenderContext;
pub use map::MapHelper;
pub use script::JsObject;

/// Conversion of a model value into a script expression
pub trait JsExpression {
    fn to_js(&self) -> String;
}

/// Conversion of an overlay into declaration statements attached to a map
pub trait RenderOverlay {
    fn render(&self, context: &mut RenderContext, map_variable: &str);
}
