//! Styling of the shared chrome views.

use crate::color::Color;
use crate::rect::Rect;
use serde::Deserialize;

/// Styling inputs for [`NavigationView`](crate::NavigationView) and
/// [`ContentView`](crate::ContentView).
///
/// The screen is split horizontally at `navigation_height`: the band above is the navigation
/// region, everything below is content.
///
/// Missing fields in a deserialized document keep their default values.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChromeConfig {
    pub navigation_height: f64,
    pub navigation_fill: Color,
    pub content_fill: Color,
}

impl Default for ChromeConfig {
    fn default() -> Self {
        ChromeConfig {
            navigation_height: 60.,
            navigation_fill: Color::DARK_GRAY,
            content_fill: Color::BROWN,
        }
    }
}

impl ChromeConfig {
    pub fn from_json(json: &str) -> Result<ChromeConfig, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The navigation band for a screen with the given bounds.
    pub fn navigation_frame(&self, bounds: Rect) -> Rect {
        Rect::from_xywh(0., 0., bounds.width(), self.navigation_height)
    }

    /// Everything below the navigation band.
    ///
    /// Screens shorter than the navigation band get a zero-height content region.
    pub fn content_frame(&self, bounds: Rect) -> Rect {
        Rect::from_xywh(
            0.,
            self.navigation_height,
            bounds.width(),
            (bounds.height() - self.navigation_height).max(0.),
        )
    }
}
