//! Google Maps API names and the defaults used when a model leaves them unset.
//! Keeping them in a single place makes it easier to follow API renames.

/// Namespace every generated constructor call lives under.
pub const API_NAMESPACE: &str = "google.maps";

/// Default loader URL of the v3 JavaScript API.
pub const DEFAULT_API_URL: &str = "http://maps.google.com/maps/api/js";

/// Secure loader URL, used when the configuration asks for https.
pub const DEFAULT_SECURE_API_URL: &str = "https://maps.google.com/maps/api/js";

/// Container element id when none is configured.
pub const DEFAULT_CONTAINER_ID: &str = "map_canvas";

/// Container dimensions when no stylesheet options are configured.
pub const DEFAULT_CONTAINER_WIDTH: &str = "300px";
pub const DEFAULT_CONTAINER_HEIGHT: &str = "300px";

/// Initial zoom level of a new map.
pub const DEFAULT_ZOOM: u8 = 3;

/// Event that opens a marker's info window when auto-open is enabled.
pub const DEFAULT_OPEN_EVENT: &str = "click";

/// Map option keys with dedicated rendering.
pub const MAP_TYPE_ID_OPTION: &str = "mapTypeId";
pub const ZOOM_OPTION: &str = "zoom";

/// Stylesheet declarations always emitted before the others.
pub const STYLESHEET_LEADING_KEYS: [&str; 2] = ["width", "height"];
