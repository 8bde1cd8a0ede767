//! Colors.

use serde::Deserialize;

/// An RGBA color with components in `0..=1`.
///
/// The default color is fully transparent.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    #[serde(default = "opaque")]
    pub a: f64,
}

fn opaque() -> f64 {
    1.
}

impl Color {
    pub const CLEAR: Color = Color::rgba(0., 0., 0., 0.);
    pub const BLACK: Color = Color::gray(0.);
    pub const WHITE: Color = Color::gray(1.);
    pub const DARK_GRAY: Color = Color::gray(1. / 3.);
    pub const RED: Color = Color::rgb(1., 0., 0.);
    pub const BROWN: Color = Color::rgb(0.6, 0.4, 0.2);

    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Color {
        Color { r, g, b, a }
    }

    /// An opaque color.
    pub const fn rgb(r: f64, g: f64, b: f64) -> Color {
        Color::rgba(r, g, b, 1.)
    }

    /// An opaque gray with the given white level.
    pub const fn gray(white: f64) -> Color {
        Color::rgb(white, white, white)
    }

    /// Returns true if the color has no visible contribution.
    pub fn is_clear(&self) -> bool {
        self.a == 0.
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_clear() {
        assert!(Color::default().is_clear());
        assert_eq!(Color::default(), Color::CLEAR);
        assert!(!Color::DARK_GRAY.is_clear());
    }

    #[test]
    fn alpha_defaults_to_opaque_when_deserialized() {
        let color: Color = serde_json::from_str(r#"{ "r": 0.5, "g": 0.25, "b": 0 }"#).unwrap();
        assert_eq!(color, Color::rgb(0.5, 0.25, 0.));
    }
}
