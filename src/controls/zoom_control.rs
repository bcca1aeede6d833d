use crate::controls::ControlPosition;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoomControlStyle {
    #[default]
    Default,
    Large,
    Small,
}

impl ZoomControlStyle {
    /// Name of the `google.maps.ZoomControlStyle` constant
    pub fn constant(&self) -> &'static str {
        match self {
            ZoomControlStyle::Default => "DEFAULT",
            ZoomControlStyle::Large => "LARGE",
            ZoomControlStyle::Small => "SMALL",
        }
    }
}

/// Configuration of the zoom buttons
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ZoomControl {
    #[serde(default)]
    pub position: ControlPosition,
    #[serde(default)]
    pub style: ZoomControlStyle,
}

impl ZoomControl {
    pub fn new(position: ControlPosition, style: ZoomControlStyle) -> Self {
        Self { position, style }
    }
}
