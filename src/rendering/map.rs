use crate::{
    controls::MapTypeId,
    core::{
        config::HelperConfig,
        constants::{API_NAMESPACE, MAP_TYPE_ID_OPTION, STYLESHEET_LEADING_KEYS, ZOOM_OPTION},
        map::Map,
    },
    rendering::{
        base::declare_bound, events::render_event, script, JsExpression, JsObject, RenderContext,
        RenderOverlay,
    },
    MapError, Result,
};
use serde_json::Value;

/// Composes the container, stylesheet and script of a map
///
/// Rendering is a single ordered pass over the model. Optional parts of the
/// model that are unset produce no output.
#[derive(Debug, Clone, Default)]
pub struct MapHelper {
    config: HelperConfig,
}

impl MapHelper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: HelperConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &HelperConfig {
        &self.config
    }

    /// Container, stylesheets and javascripts in one fragment
    pub fn render(&self, map: &Map) -> Result<String> {
        let mut output = self.render_container(map);
        output.push_str(&self.render_stylesheets(map));
        output.push_str(&self.render_javascripts(map)?);
        Ok(output)
    }

    /// `<div id="<container>"></div>`
    pub fn render_container(&self, map: &Map) -> String {
        let mut context = RenderContext::new();
        context.line(format!(
            "<div id=\"{}\"></div>",
            html_attribute(map.html_container_id())
        ));
        context.into_output()
    }

    /// CSS rule scoped to the container; width and height come first
    pub fn render_stylesheets(&self, map: &Map) -> String {
        let options = map.stylesheet_options();
        if options.is_empty() {
            log::trace!("map {} has no stylesheet options", map.javascript_variable());
            return String::new();
        }

        let leading = STYLESHEET_LEADING_KEYS
            .iter()
            .filter_map(|key| options.get(*key).map(|value| (*key, value)));
        let remaining = options
            .iter()
            .filter(|(key, _)| !STYLESHEET_LEADING_KEYS.contains(&key.as_str()))
            .map(|(key, value)| (key.as_str(), value));

        let mut context = RenderContext::new();
        context.line("<style type=\"text/css\">");
        context.line(format!("#{}{{", css_identifier(map.html_container_id())));
        for (key, value) in leading.chain(remaining) {
            context.line(format!("{}:{};", key, css_value(value)));
        }
        context.line("}");
        context.line("</style>");
        context.into_output()
    }

    /// API loader followed by the inline script building the map
    pub fn render_javascripts(&self, map: &Map) -> Result<String> {
        log::debug!(
            "rendering map {} ({} overlays, {} listeners)",
            map.javascript_variable(),
            map.overlay_count(),
            map.event_manager().len()
        );

        let mut context = RenderContext::new();
        context.line(format!(
            "<script type=\"text/javascript\" src=\"{}\"></script>",
            self.config.api_url()
        ));
        context.line("<script type=\"text/javascript\">");

        let mut output = context.into_output();
        output.push_str(&self.render_map(map)?);
        output.push_str(&self.render_center(map));
        output.push_str(&self.render_bound(map));
        output.push_str(&self.render_markers(map));
        output.push_str(&self.render_info_windows(map));
        output.push_str(&self.render_polylines(map));
        output.push_str(&self.render_polygons(map));
        output.push_str(&self.render_rectangles(map));
        output.push_str(&self.render_circles(map));
        output.push_str(&self.render_ground_overlays(map));
        output.push_str(&self.render_events(map));
        output.push_str("</script>\n");
        Ok(output)
    }

    /// `var <map> = new google.maps.Map(document.getElementById("<container>"), {...});`
    pub fn render_map(&self, map: &Map) -> Result<String> {
        let options = self.map_options(map)?;

        let mut context = RenderContext::new();
        context.declare(
            map.javascript_variable(),
            format!(
                "new {}.Map(document.getElementById({}), {})",
                API_NAMESPACE,
                script::string(map.html_container_id()),
                options
            ),
        );
        Ok(context.into_output())
    }

    /// Map construction options: `mapTypeId` as a constant, then control
    /// options, then the remaining options in insertion order. `zoom` is
    /// left out when the viewport is driven by auto zoom.
    fn map_options(&self, map: &Map) -> Result<JsObject> {
        let mut options = JsObject::new();

        if let Some(value) = map.map_option(MAP_TYPE_ID_OPTION) {
            options.push(MAP_TYPE_ID_OPTION, map_type_id(value)?.to_js());
        }
        if let Some(control) = map.map_type_control() {
            options.push("mapTypeControlOptions", control.to_js());
        }
        if let Some(control) = map.zoom_control() {
            options.push("zoomControlOptions", control.to_js());
        }

        for (key, value) in map.map_options() {
            if key == MAP_TYPE_ID_OPTION || (key == ZOOM_OPTION && map.is_auto_zoom()) {
                continue;
            }
            options.push_value(key.as_str(), value);
        }

        Ok(options)
    }

    /// `<map>.setCenter(...)`, only when a center is set and auto zoom is off
    pub fn render_center(&self, map: &Map) -> String {
        let center = match map.center() {
            Some(center) if !map.is_auto_zoom() => center,
            _ => {
                log::trace!("map {} renders no center", map.javascript_variable());
                return String::new();
            }
        };

        let mut context = RenderContext::new();
        let center = center.to_js();
        context.call(map.javascript_variable(), "setCenter", &[center.as_str()]);
        context.into_output()
    }

    /// Bound declaration followed by `<map>.fitBounds(<bound>)`
    pub fn render_bound(&self, map: &Map) -> String {
        let Some(bound) = map.bound() else {
            return String::new();
        };

        let mut context = RenderContext::new();
        declare_bound(&mut context, bound);
        context.call(
            map.javascript_variable(),
            "fitBounds",
            &[bound.javascript_variable()],
        );
        context.into_output()
    }

    pub fn render_markers(&self, map: &Map) -> String {
        render_overlays(map, map.markers())
    }

    pub fn render_info_windows(&self, map: &Map) -> String {
        render_overlays(map, map.info_windows())
    }

    pub fn render_polylines(&self, map: &Map) -> String {
        render_overlays(map, map.polylines())
    }

    pub fn render_polygons(&self, map: &Map) -> String {
        render_overlays(map, map.polygons())
    }

    pub fn render_rectangles(&self, map: &Map) -> String {
        render_overlays(map, map.rectangles())
    }

    pub fn render_circles(&self, map: &Map) -> String {
        render_overlays(map, map.circles())
    }

    pub fn render_ground_overlays(&self, map: &Map) -> String {
        render_overlays(map, map.ground_overlays())
    }

    /// Listener registrations: dom, dom once, event, event once
    pub fn render_events(&self, map: &Map) -> String {
        let mut context = RenderContext::new();
        for (kind, event) in map.event_manager().iter() {
            render_event(&mut context, kind, event);
        }
        context.into_output()
    }
}

fn render_overlays<T: RenderOverlay>(map: &Map, overlays: &[T]) -> String {
    let mut context = RenderContext::new();
    for overlay in overlays {
        overlay.render(&mut context, map.javascript_variable());
    }
    context.into_output()
}

fn map_type_id(value: &Value) -> Result<MapTypeId> {
    match value {
        Value::String(id) => id.parse(),
        other => Err(MapError::InvalidOption {
            key: MAP_TYPE_ID_OPTION.to_string(),
            reason: format!("expected a map type name, got {}", other),
        }),
    }
}

fn html_attribute(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// Escapes an id for use in a `#id` selector
fn css_identifier(id: &str) -> String {
    let mut escaped = String::with_capacity(id.len());
    for (index, c) in id.chars().enumerate() {
        if index == 0 && c.is_ascii_digit() {
            escaped.push_str(&format!("\\{:x} ", c as u32));
        } else if c.is_ascii_alphanumeric() || c == '-' || c == '_' || !c.is_ascii() {
            escaped.push(c);
        } else {
            escaped.push('\\');
            escaped.push(c);
        }
    }
    escaped
}

fn css_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
