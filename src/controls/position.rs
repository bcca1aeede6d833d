use serde::{Deserialize, Serialize};

/// Anchor of a control inside the map container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlPosition {
    BottomCenter,
    BottomLeft,
    BottomRight,
    LeftBottom,
    LeftCenter,
    LeftTop,
    RightBottom,
    RightCenter,
    RightTop,
    TopCenter,
    TopLeft,
    #[default]
    TopRight,
}

impl ControlPosition {
    /// Name of the `google.maps.ControlPosition` constant
    pub fn constant(&self) -> &'static str {
        match self {
            ControlPosition::BottomCenter => "BOTTOM_CENTER",
            ControlPosition::BottomLeft => "BOTTOM_LEFT",
            ControlPosition::BottomRight => "BOTTOM_RIGHT",
            ControlPosition::LeftBottom => "LEFT_BOTTOM",
            ControlPosition::LeftCenter => "LEFT_CENTER",
            ControlPosition::LeftTop => "LEFT_TOP",
            ControlPosition::RightBottom => "RIGHT_BOTTOM",
            ControlPosition::RightCenter => "RIGHT_CENTER",
            ControlPosition::RightTop => "RIGHT_TOP",
            ControlPosition::TopCenter => "TOP_CENTER",
            ControlPosition::TopLeft => "TOP_LEFT",
            ControlPosition::TopRight => "TOP_RIGHT",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(ControlPosition::BottomCenter.constant(), "BOTTOM_CENTER");
        assert_eq!(ControlPosition::default().constant(), "TOP_RIGHT");
    }

    #[test]
    fn test_deserialize_snake_case() {
        let position: ControlPosition = serde_json::from_str(r#""left_top""#).unwrap();
        assert_eq!(position, ControlPosition::LeftTop);
    }
}
