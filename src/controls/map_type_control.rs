use crate::controls::{ControlPosition, MapTypeId};
use serde::{Deserialize, Serialize};

/// Look of the map type selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MapTypeControlStyle {
    #[default]
    Default,
    DropdownMenu,
    HorizontalBar,
}

impl MapTypeControlStyle {
    /// Name of the `google.maps.MapTypeControlStyle` constant
    pub fn constant(&self) -> &'static str {
        match self {
            MapTypeControlStyle::Default => "DEFAULT",
            MapTypeControlStyle::DropdownMenu => "DROPDOWN_MENU",
            MapTypeControlStyle::HorizontalBar => "HORIZONTAL_BAR",
        }
    }
}

/// Configuration of the map type selector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapTypeControl {
    /// Map types offered, in display order
    pub map_type_ids: Vec<MapTypeId>,
    #[serde(default)]
    pub position: ControlPosition,
    #[serde(default)]
    pub style: MapTypeControlStyle,
}

impl MapTypeControl {
    pub fn new(
        map_type_ids: Vec<MapTypeId>,
        position: ControlPosition,
        style: MapTypeControlStyle,
    ) -> Self {
        Self {
            map_type_ids,
            position,
            style,
        }
    }
}

impl Default for MapTypeControl {
    fn default() -> Self {
        Self::new(
            vec![MapTypeId::Roadmap, MapTypeId::Satellite],
            ControlPosition::TopRight,
            MapTypeControlStyle::Default,
        )
    }
}
