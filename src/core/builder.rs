//! Map builder for fluent API configuration
//!
//! This module provides a MapBuilder that allows for fluent configuration
//! of map models before they are handed to the renderer.

use crate::{
    controls::{MapTypeControl, MapTypeId, ZoomControl},
    core::{
        geo::{Bound, Coordinate},
        map::Map,
    },
    events::{Event, ListenerKind},
    overlays::{Circle, GroundOverlay, InfoWindow, Marker, Polygon, Polyline, Rectangle},
    Result,
};

/// Builder for creating and configuring Map models
pub struct MapBuilder {
    map: Map,
    fit_overlays: bool,
}

impl MapBuilder {
    /// Create a new MapBuilder with default settings
    pub fn new() -> Self {
        Self {
            map: Map::new(),
            fit_overlays: false,
        }
    }

    /// Set the script variable the map is declared under
    pub fn with_variable(mut self, name: impl Into<String>) -> Result<Self> {
        self.map.set_javascript_variable(name)?;
        Ok(self)
    }

    /// Set the id of the HTML container element
    pub fn with_container_id(mut self, id: impl Into<String>) -> Self {
        self.map.set_html_container_id(id);
        self
    }

    /// Set the initial center and zoom level
    pub fn with_center_and_zoom(mut self, center: Coordinate, zoom: u8) -> Self {
        self.map.set_center(center);
        self.map.set_zoom(zoom);
        self
    }

    pub fn with_center(mut self, center: Coordinate) -> Self {
        self.map.set_center(center);
        self
    }

    pub fn with_map_type_id(mut self, map_type_id: MapTypeId) -> Self {
        self.map.set_map_type_id(map_type_id);
        self
    }

    pub fn with_map_option(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.map.set_map_option(key, value);
        self
    }

    /// Fit the viewport to a bound
    pub fn with_bound(mut self, bound: Bound) -> Self {
        self.map.set_bound(bound);
        self
    }

    pub fn with_auto_zoom(mut self, auto_zoom: bool) -> Self {
        self.map.set_auto_zoom(auto_zoom);
        self
    }

    /// Enable auto zoom and fit the viewport to every overlay when built
    pub fn fit_overlays(mut self) -> Self {
        self.fit_overlays = true;
        self
    }

    pub fn with_map_type_control(mut self, control: MapTypeControl) -> Self {
        self.map.set_map_type_control(control);
        self
    }

    pub fn with_zoom_control(mut self, control: ZoomControl) -> Self {
        self.map.set_zoom_control(control);
        self
    }

    /// Set container dimensions, e.g. `("100%", "400px")`
    pub fn with_dimensions(mut self, width: impl Into<String>, height: impl Into<String>) -> Self {
        let (width, height): (String, String) = (width.into(), height.into());
        self.map.set_stylesheet_option("width", width);
        self.map.set_stylesheet_option("height", height);
        self
    }

    pub fn with_stylesheet_option(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.map.set_stylesheet_option(key, value);
        self
    }

    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.map.add_marker(marker);
        self
    }

    pub fn with_info_window(mut self, info_window: InfoWindow) -> Self {
        self.map.add_info_window(info_window);
        self
    }

    pub fn with_polyline(mut self, polyline: Polyline) -> Self {
        self.map.add_polyline(polyline);
        self
    }

    pub fn with_polygon(mut self, polygon: Polygon) -> Self {
        self.map.add_polygon(polygon);
        self
    }

    pub fn with_rectangle(mut self, rectangle: Rectangle) -> Self {
        self.map.add_rectangle(rectangle);
        self
    }

    pub fn with_circle(mut self, circle: Circle) -> Self {
        self.map.add_circle(circle);
        self
    }

    pub fn with_ground_overlay(mut self, ground_overlay: GroundOverlay) -> Self {
        self.map.add_ground_overlay(ground_overlay);
        self
    }

    pub fn with_listener(mut self, kind: ListenerKind, event: Event) -> Self {
        self.map.event_manager_mut().add(kind, event);
        self
    }

    /// Build the map model
    pub fn build(self) -> Map {
        let mut map = self.map;

        if self.fit_overlays {
            if let Some(bound) = map.overlay_bound() {
                map.set_bound(bound);
            }
            map.set_auto_zoom(true);
        }

        map
    }
}

impl Default for MapBuilder {
    fn default() -> Self {
        Self::new()
    }
}
