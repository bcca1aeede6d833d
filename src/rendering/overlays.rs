//! Construction statements of the drawable overlays
//!
//! Nested values that are referenced by variable (bounds, marker images,
//! marker shapes) are declared on their own line first, then the overlay is
//! constructed. Geometry keys come first in a fixed order per overlay type and
//! free-form options follow in insertion order.

use crate::core::constants::API_NAMESPACE;
use crate::overlays::{
    Circle, GroundOverlay, InfoWindow, Marker, MarkerImage, MarkerShape, Polygon, Polyline,
    Rectangle,
};
use crate::rendering::{
    base::declare_bound, script, JsExpression, JsObject, RenderContext, RenderOverlay,
};

fn constructor(class: &str, arguments: impl std::fmt::Display) -> String {
    format!("new {}.{}({})", API_NAMESPACE, class, arguments)
}

/// `new google.maps.MarkerImage("url"[, size, origin, anchor, scaledSize])`
///
/// Unset arguments between set ones become `null`; trailing ones are dropped.
impl JsExpression for MarkerImage {
    fn to_js(&self) -> String {
        let mut arguments = vec![
            Some(script::string(&self.url)),
            self.size.as_ref().map(JsExpression::to_js),
            self.origin.as_ref().map(JsExpression::to_js),
            self.anchor.as_ref().map(JsExpression::to_js),
            self.scaled_size.as_ref().map(JsExpression::to_js),
        ];
        while matches!(arguments.last(), Some(None)) {
            arguments.pop();
        }

        let arguments: Vec<String> = arguments
            .into_iter()
            .map(|argument| argument.unwrap_or_else(|| "null".to_string()))
            .collect();
        constructor("MarkerImage", arguments.join(", "))
    }
}

/// `{"type":"poly","coord":[...]}`
impl JsExpression for MarkerShape {
    fn to_js(&self) -> String {
        let coordinates = self.coordinates.iter().map(|c| c.to_string());
        JsObject::new()
            .with("type", script::string(&self.shape_type.to_string()))
            .with("coord", script::array(coordinates))
            .to_string()
    }
}

impl RenderOverlay for MarkerImage {
    fn render(&self, context: &mut RenderContext, _map_variable: &str) {
        context.declare(self.javascript_variable(), self.to_js());
    }
}

impl RenderOverlay for MarkerShape {
    fn render(&self, context: &mut RenderContext, _map_variable: &str) {
        context.declare(self.javascript_variable(), self.to_js());
    }
}

impl RenderOverlay for Marker {
    fn render(&self, context: &mut RenderContext, map_variable: &str) {
        let mut options = JsObject::new()
            .with("map", map_variable)
            .with("position", self.position.to_js());

        if let Some(animation) = &self.animation {
            options.push("animation", animation.to_js());
        }
        if let Some(icon) = &self.icon {
            icon.render(context, map_variable);
            options.push("icon", icon.javascript_variable());
        }
        if let Some(shadow) = &self.shadow {
            shadow.render(context, map_variable);
            options.push("shadow", shadow.javascript_variable());
        }
        if let Some(shape) = &self.shape {
            shape.render(context, map_variable);
            options.push("shape", shape.javascript_variable());
        }
        options.extend_options(self.options());

        context.declare(self.javascript_variable(), constructor("Marker", options));

        if let Some(info_window) = &self.info_window {
            render_marker_info_window(
                context,
                info_window,
                self.javascript_variable(),
                map_variable,
            );
        }
    }
}

/// Info window bound to a marker: positioned by the marker, opened on it
fn render_marker_info_window(
    context: &mut RenderContext,
    info_window: &InfoWindow,
    marker_variable: &str,
    map_variable: &str,
) {
    let mut options = JsObject::new().with("content", script::string(&info_window.content));
    options.extend_options(info_window.options());
    context.declare(
        info_window.javascript_variable(),
        constructor("InfoWindow", options),
    );

    if info_window.open {
        context.call(
            info_window.javascript_variable(),
            "open",
            &[map_variable, marker_variable],
        );
    }

    if info_window.auto_open {
        context.line(format!(
            "{}.event.addListener({}, {}, function(){{{}.open({}, {});}});",
            API_NAMESPACE,
            marker_variable,
            script::string(&info_window.open_event),
            info_window.javascript_variable(),
            map_variable,
            marker_variable
        ));
    }
}

impl RenderOverlay for InfoWindow {
    fn render(&self, context: &mut RenderContext, map_variable: &str) {
        let mut options = JsObject::new();
        if let Some(position) = &self.position {
            options.push("position", position.to_js());
        }
        options.push("content", script::string(&self.content));
        options.extend_options(self.options());

        context.declare(self.javascript_variable(), constructor("InfoWindow", options));

        if self.open {
            context.call(self.javascript_variable(), "open", &[map_variable]);
        }
    }
}

impl RenderOverlay for Polyline {
    fn render(&self, context: &mut RenderContext, map_variable: &str) {
        let path = script::array(self.coordinates.iter().map(JsExpression::to_js));
        let mut options = JsObject::new().with("map", map_variable).with("path", path);
        options.extend_options(self.options());

        context.declare(self.javascript_variable(), constructor("Polyline", options));
    }
}

impl RenderOverlay for Polygon {
    fn render(&self, context: &mut RenderContext, map_variable: &str) {
        let paths = script::array(self.coordinates.iter().map(JsExpression::to_js));
        let mut options = JsObject::new().with("map", map_variable).with("paths", paths);
        options.extend_options(self.options());

        context.declare(self.javascript_variable(), constructor("Polygon", options));
    }
}

impl RenderOverlay for Rectangle {
    fn render(&self, context: &mut RenderContext, map_variable: &str) {
        declare_bound(context, &self.bound);

        let mut options = JsObject::new()
            .with("map", map_variable)
            .with("bounds", self.bound.javascript_variable());
        options.extend_options(self.options());

        context.declare(self.javascript_variable(), constructor("Rectangle", options));
    }
}

impl RenderOverlay for Circle {
    fn render(&self, context: &mut RenderContext, map_variable: &str) {
        let mut options = JsObject::new()
            .with("map", map_variable)
            .with("center", self.center.to_js())
            .with("radius", script::number(self.radius));
        options.extend_options(self.options());

        context.declare(self.javascript_variable(), constructor("Circle", options));
    }
}

impl RenderOverlay for GroundOverlay {
    fn render(&self, context: &mut RenderContext, map_variable: &str) {
        declare_bound(context, &self.bound);

        let mut options = JsObject::new().with("map", map_variable);
        options.extend_options(self.options());

        let arguments = format!(
            "{}, {}, {}",
            script::string(&self.url),
            self.bound.javascript_variable(),
            options
        );
        context.declare(self.javascript_variable(), constructor("GroundOverlay", arguments));
    }
}
