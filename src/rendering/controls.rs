//! Enumerated API constants and control option objects

use crate::controls::{
    ControlPosition, MapTypeControl, MapTypeControlStyle, MapTypeId, ZoomControl,
    ZoomControlStyle,
};
use crate::core::constants::API_NAMESPACE;
use crate::overlays::Animation;
use crate::rendering::{script, JsExpression, JsObject};

fn constant(class: &str, name: &str) -> String {
    format!("{}.{}.{}", API_NAMESPACE, class, name)
}

impl JsExpression for MapTypeId {
    fn to_js(&self) -> String {
        constant("MapTypeId", self.constant())
    }
}

impl JsExpression for ControlPosition {
    fn to_js(&self) -> String {
        constant("ControlPosition", self.constant())
    }
}

impl JsExpression for MapTypeControlStyle {
    fn to_js(&self) -> String {
        constant("MapTypeControlStyle", self.constant())
    }
}

impl JsExpression for ZoomControlStyle {
    fn to_js(&self) -> String {
        constant("ZoomControlStyle", self.constant())
    }
}

impl JsExpression for Animation {
    fn to_js(&self) -> String {
        constant("Animation", self.constant())
    }
}

/// `{"mapTypeIds":[...],"position":...,"style":...}`
impl JsExpression for MapTypeControl {
    fn to_js(&self) -> String {
        let ids = script::array(self.map_type_ids.iter().map(MapTypeId::to_js));
        JsObject::new()
            .with("mapTypeIds", ids)
            .with("position", self.position.to_js())
            .with("style", self.style.to_js())
            .to_string()
    }
}

/// `{"position":...,"style":...}`
impl JsExpression for ZoomControl {
    fn to_js(&self) -> String {
        JsObject::new()
            .with("position", self.position.to_js())
            .with("style", self.style.to_js())
            .to_string()
    }
}
