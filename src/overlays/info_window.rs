use crate::{
    core::{
        constants::DEFAULT_OPEN_EVENT,
        geo::{Bound, Coordinate},
        naming, Options,
    },
    overlays::Overlay,
};
use serde::{Deserialize, Serialize};

fn default_open_event() -> String {
    DEFAULT_OPEN_EVENT.to_string()
}

/// A popup bubble, either standalone on the map or attached to a marker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfoWindow {
    #[serde(default = "naming::info_window", deserialize_with = "naming::deserialize")]
    javascript_variable: String,
    /// Anchor position; unused when the window belongs to a marker
    #[serde(default)]
    pub position: Option<Coordinate>,
    /// HTML content of the bubble
    pub content: String,
    /// Open the window as soon as the map is rendered
    #[serde(default)]
    pub open: bool,
    /// Open the window when `open_event` fires on the owning marker
    #[serde(default)]
    pub auto_open: bool,
    #[serde(default = "default_open_event")]
    pub open_event: String,
    #[serde(default)]
    options: Options,
}

impl InfoWindow {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            javascript_variable: naming::info_window(),
            position: None,
            content: content.into(),
            open: false,
            auto_open: false,
            open_event: default_open_event(),
            options: Options::new(),
        }
    }

    pub fn with_position(mut self, position: Coordinate) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_open(mut self, open: bool) -> Self {
        self.open = open;
        self
    }

    /// Opens the window whenever `event` fires on the owning marker
    pub fn with_auto_open(mut self, event: impl Into<String>) -> Self {
        self.auto_open = true;
        self.open_event = event.into();
        self
    }
}

impl_overlay_accessors!(InfoWindow);

impl Overlay for InfoWindow {
    fn extent(&self) -> Option<Bound> {
        self.position.and_then(|position| Bound::from_coordinates(&[position]))
    }
}
