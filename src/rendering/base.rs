//! Constructor expressions of the geometric value types

use crate::core::{
    constants::API_NAMESPACE,
    geo::{Bound, Coordinate, Point, Size},
};
use crate::rendering::{script, JsExpression, RenderContext};

impl JsExpression for Coordinate {
    fn to_js(&self) -> String {
        format!(
            "new {}.LatLng({}, {}, {})",
            API_NAMESPACE,
            script::number(self.latitude),
            script::number(self.longitude),
            self.no_wrap
        )
    }
}

impl JsExpression for Point {
    fn to_js(&self) -> String {
        format!(
            "new {}.Point({}, {})",
            API_NAMESPACE,
            script::number(self.x),
            script::number(self.y)
        )
    }
}

impl JsExpression for Size {
    fn to_js(&self) -> String {
        match (&self.width_unit, &self.height_unit) {
            (Some(width_unit), Some(height_unit)) => format!(
                "new {}.Size({}, {}, {}, {})",
                API_NAMESPACE,
                script::number(self.width),
                script::number(self.height),
                script::string(width_unit),
                script::string(height_unit)
            ),
            _ => format!(
                "new {}.Size({}, {})",
                API_NAMESPACE,
                script::number(self.width),
                script::number(self.height)
            ),
        }
    }
}

impl JsExpression for Bound {
    fn to_js(&self) -> String {
        format!(
            "new {}.LatLngBounds({}, {})",
            API_NAMESPACE,
            self.south_west.to_js(),
            self.north_east.to_js()
        )
    }
}

/// `var <bound> = new google.maps.LatLngBounds(<sw>, <ne>);`
pub fn declare_bound(context: &mut RenderContext, bound: &Bound) {
    context.declare(bound.javascript_variable(), bound.to_js());
}
