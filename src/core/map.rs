use crate::{
    controls::{MapTypeControl, MapTypeId, ZoomControl},
    core::{
        constants::{
            DEFAULT_CONTAINER_HEIGHT, DEFAULT_CONTAINER_ID, DEFAULT_CONTAINER_WIDTH, DEFAULT_ZOOM,
            MAP_TYPE_ID_OPTION, ZOOM_OPTION,
        },
        geo::{Bound, Coordinate},
        naming, Options,
    },
    events::EventManager,
    overlays::{Circle, GroundOverlay, InfoWindow, Marker, Overlay, Polygon, Polyline, Rectangle},
    Result,
};
use serde::{Deserialize, Serialize};

/// Everything needed to render one map: its container, its options, its
/// overlays and its listeners
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Map {
    #[serde(deserialize_with = "naming::deserialize")]
    javascript_variable: String,
    html_container_id: String,
    map_options: Options,
    center: Option<Coordinate>,
    bound: Option<Bound>,
    /// Let the bound drive the viewport; center and zoom are not rendered
    auto_zoom: bool,
    map_type_control: Option<MapTypeControl>,
    zoom_control: Option<ZoomControl>,
    markers: Vec<Marker>,
    info_windows: Vec<InfoWindow>,
    polylines: Vec<Polyline>,
    polygons: Vec<Polygon>,
    rectangles: Vec<Rectangle>,
    circles: Vec<Circle>,
    ground_overlays: Vec<GroundOverlay>,
    event_manager: EventManager,
    stylesheet_options: Options,
}

impl Default for Map {
    fn default() -> Self {
        let mut map_options = Options::new();
        map_options.insert(
            MAP_TYPE_ID_OPTION.to_string(),
            MapTypeId::default().to_string().into(),
        );
        map_options.insert(ZOOM_OPTION.to_string(), DEFAULT_ZOOM.into());

        let mut stylesheet_options = Options::new();
        stylesheet_options.insert("width".to_string(), DEFAULT_CONTAINER_WIDTH.into());
        stylesheet_options.insert("height".to_string(), DEFAULT_CONTAINER_HEIGHT.into());

        Self {
            javascript_variable: naming::map(),
            html_container_id: DEFAULT_CONTAINER_ID.to_string(),
            map_options,
            center: None,
            bound: None,
            auto_zoom: false,
            map_type_control: None,
            zoom_control: None,
            markers: Vec::new(),
            info_windows: Vec::new(),
            polylines: Vec::new(),
            polygons: Vec::new(),
            rectangles: Vec::new(),
            circles: Vec::new(),
            ground_overlays: Vec::new(),
            event_manager: EventManager::new(),
            stylesheet_options,
        }
    }
}

impl Map {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn javascript_variable(&self) -> &str {
        &self.javascript_variable
    }

    pub fn set_javascript_variable(&mut self, name: impl Into<String>) -> Result<()> {
        self.javascript_variable = crate::core::checked_variable(name.into())?;
        Ok(())
    }

    pub fn html_container_id(&self) -> &str {
        &self.html_container_id
    }

    pub fn set_html_container_id(&mut self, id: impl Into<String>) {
        self.html_container_id = id.into();
    }

    pub fn map_options(&self) -> &Options {
        &self.map_options
    }

    pub fn map_option(&self, key: &str) -> Option<&serde_json::Value> {
        self.map_options.get(key)
    }

    /// Sets a map option; an existing key keeps its position
    pub fn set_map_option(
        &mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) {
        self.map_options.insert(key.into(), value.into());
    }

    pub fn set_map_options(&mut self, options: Options) {
        self.map_options = options;
    }

    pub fn remove_map_option(&mut self, key: &str) -> Option<serde_json::Value> {
        self.map_options.shift_remove(key)
    }

    pub fn set_map_type_id(&mut self, map_type_id: MapTypeId) {
        self.set_map_option(MAP_TYPE_ID_OPTION, map_type_id.to_string());
    }

    pub fn set_zoom(&mut self, zoom: u8) {
        self.set_map_option(ZOOM_OPTION, zoom);
    }

    pub fn center(&self) -> Option<&Coordinate> {
        self.center.as_ref()
    }

    pub fn set_center(&mut self, center: impl Into<Option<Coordinate>>) {
        self.center = center.into();
    }

    pub fn bound(&self) -> Option<&Bound> {
        self.bound.as_ref()
    }

    pub fn set_bound(&mut self, bound: impl Into<Option<Bound>>) {
        self.bound = bound.into();
    }

    pub fn is_auto_zoom(&self) -> bool {
        self.auto_zoom
    }

    pub fn set_auto_zoom(&mut self, auto_zoom: bool) {
        self.auto_zoom = auto_zoom;
    }

    pub fn map_type_control(&self) -> Option<&MapTypeControl> {
        self.map_type_control.as_ref()
    }

    pub fn set_map_type_control(&mut self, control: impl Into<Option<MapTypeControl>>) {
        self.map_type_control = control.into();
    }

    pub fn zoom_control(&self) -> Option<&ZoomControl> {
        self.zoom_control.as_ref()
    }

    pub fn set_zoom_control(&mut self, control: impl Into<Option<ZoomControl>>) {
        self.zoom_control = control.into();
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn add_marker(&mut self, marker: Marker) {
        self.markers.push(marker);
    }

    pub fn info_windows(&self) -> &[InfoWindow] {
        &self.info_windows
    }

    pub fn add_info_window(&mut self, info_window: InfoWindow) {
        self.info_windows.push(info_window);
    }

    pub fn polylines(&self) -> &[Polyline] {
        &self.polylines
    }

    pub fn add_polyline(&mut self, polyline: Polyline) {
        self.polylines.push(polyline);
    }

    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    pub fn add_polygon(&mut self, polygon: Polygon) {
        self.polygons.push(polygon);
    }

    pub fn rectangles(&self) -> &[Rectangle] {
        &self.rectangles
    }

    pub fn add_rectangle(&mut self, rectangle: Rectangle) {
        self.rectangles.push(rectangle);
    }

    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }

    pub fn add_circle(&mut self, circle: Circle) {
        self.circles.push(circle);
    }

    pub fn ground_overlays(&self) -> &[GroundOverlay] {
        &self.ground_overlays
    }

    pub fn add_ground_overlay(&mut self, ground_overlay: GroundOverlay) {
        self.ground_overlays.push(ground_overlay);
    }

    pub fn event_manager(&self) -> &EventManager {
        &self.event_manager
    }

    pub fn event_manager_mut(&mut self) -> &mut EventManager {
        &mut self.event_manager
    }

    pub fn stylesheet_options(&self) -> &Options {
        &self.stylesheet_options
    }

    pub fn set_stylesheet_option(
        &mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) {
        self.stylesheet_options.insert(key.into(), value.into());
    }

    pub fn set_stylesheet_options(&mut self, options: Options) {
        self.stylesheet_options = options;
    }

    /// Every overlay of the map, in render category order
    pub fn overlays(&self) -> impl Iterator<Item = &dyn Overlay> {
        let markers = self.markers.iter().map(|o| o as &dyn Overlay);
        let info_windows = self.info_windows.iter().map(|o| o as &dyn Overlay);
        let polylines = self.polylines.iter().map(|o| o as &dyn Overlay);
        let polygons = self.polygons.iter().map(|o| o as &dyn Overlay);
        let rectangles = self.rectangles.iter().map(|o| o as &dyn Overlay);
        let circles = self.circles.iter().map(|o| o as &dyn Overlay);
        let ground_overlays = self.ground_overlays.iter().map(|o| o as &dyn Overlay);

        markers
            .chain(info_windows)
            .chain(polylines)
            .chain(polygons)
            .chain(rectangles)
            .chain(circles)
            .chain(ground_overlays)
    }

    pub fn overlay_count(&self) -> usize {
        self.overlays().count()
    }

    /// Union of every overlay extent, `None` when nothing has geometry
    ///
    /// Useful together with `set_auto_zoom(true)` to frame all overlays.
    pub fn overlay_bound(&self) -> Option<Bound> {
        self.overlays()
            .filter_map(|overlay| overlay.extent())
            .reduce(|acc, extent| acc.union(&extent))
    }
}
