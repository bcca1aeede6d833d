use crate::{
    core::{
        geo::{Bound, Coordinate},
        naming, Options,
    },
    overlays::{InfoWindow, MarkerImage, MarkerShape, Overlay},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Animation {
    Bounce,
    Drop,
}

impl Animation {
    /// Name of the `google.maps.Animation` constant
    pub fn constant(&self) -> &'static str {
        match self {
            Animation::Bounce => "BOUNCE",
            Animation::Drop => "DROP",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    #[serde(default = "naming::marker", deserialize_with = "naming::deserialize")]
    javascript_variable: String,
    pub position: Coordinate,
    #[serde(default)]
    pub animation: Option<Animation>,
    #[serde(default)]
    pub icon: Option<MarkerImage>,
    #[serde(default)]
    pub shadow: Option<MarkerImage>,
    #[serde(default)]
    pub shape: Option<MarkerShape>,
    #[serde(default)]
    pub info_window: Option<InfoWindow>,
    #[serde(default)]
    options: Options,
}

impl Marker {
    pub fn new(position: Coordinate) -> Self {
        Self {
            javascript_variable: naming::marker(),
            position,
            animation: None,
            icon: None,
            shadow: None,
            shape: None,
            info_window: None,
            options: Options::new(),
        }
    }

    pub fn with_animation(mut self, animation: Animation) -> Self {
        self.animation = Some(animation);
        self
    }

    pub fn with_icon(mut self, icon: MarkerImage) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn with_shadow(mut self, shadow: MarkerImage) -> Self {
        self.shadow = Some(shadow);
        self
    }

    pub fn with_shape(mut self, shape: MarkerShape) -> Self {
        self.shape = Some(shape);
        self
    }

    pub fn with_info_window(mut self, info_window: InfoWindow) -> Self {
        self.info_window = Some(info_window);
        self
    }

    pub fn position(&self) -> Coordinate {
        self.position
    }

    pub fn set_position(&mut self, position: Coordinate) {
        self.position = position;
    }
}

impl_overlay_accessors!(Marker);

impl Overlay for Marker {
    fn extent(&self) -> Option<Bound> {
        Bound::from_coordinates(&[self.position])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_builder() {
        let marker = Marker::new(Coordinate::new(1.0, 2.0, false))
            .with_animation(Animation::Drop)
            .with_icon(MarkerImage::new("icon.png"))
            .with_info_window(InfoWindow::new("hi"));

        assert_eq!(marker.position().longitude, 2.0);
        assert_eq!(marker.animation, Some(Animation::Drop));
        assert_eq!(marker.icon.as_ref().map(|i| i.url.as_str()), Some("icon.png"));
        assert!(marker.shadow.is_none());
        assert!(marker.info_window.is_some());
    }

    #[test]
    fn test_marker_extent_is_its_position() {
        let marker = Marker::new(Coordinate::new(4.0, 5.0, true));
        let extent = marker.extent().unwrap();
        assert_eq!(extent.south_west, marker.position);
        assert_eq!(extent.north_east, marker.position);
    }

    #[test]
    fn test_marker_from_json() {
        let marker: Marker = serde_json::from_str(
            r#"{
                "position": {"latitude": 1.0, "longitude": 2.0},
                "animation": "bounce",
                "options": {"title": "Home", "clickable": false}
            }"#,
        )
        .unwrap();

        assert_eq!(marker.animation, Some(Animation::Bounce));
        assert_eq!(marker.options()["title"], "Home");
        assert!(marker.javascript_variable().starts_with("marker_"));
    }
}
