use crate::MapError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Base map types offered by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapTypeId {
    Hybrid,
    #[default]
    Roadmap,
    Satellite,
    Terrain,
}

impl MapTypeId {
    pub const ALL: [MapTypeId; 4] = [
        MapTypeId::Hybrid,
        MapTypeId::Roadmap,
        MapTypeId::Satellite,
        MapTypeId::Terrain,
    ];

    /// Name of the `google.maps.MapTypeId` constant
    pub fn constant(&self) -> &'static str {
        match self {
            MapTypeId::Hybrid => "HYBRID",
            MapTypeId::Roadmap => "ROADMAP",
            MapTypeId::Satellite => "SATELLITE",
            MapTypeId::Terrain => "TERRAIN",
        }
    }
}

impl std::fmt::Display for MapTypeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MapTypeId::Hybrid => write!(f, "hybrid"),
            MapTypeId::Roadmap => write!(f, "roadmap"),
            MapTypeId::Satellite => write!(f, "satellite"),
            MapTypeId::Terrain => write!(f, "terrain"),
        }
    }
}

impl FromStr for MapTypeId {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MapTypeId::ALL
            .into_iter()
            .find(|id| id.constant().eq_ignore_ascii_case(s))
            .ok_or_else(|| MapError::InvalidMapTypeId(s.to_string()))
    }
}
