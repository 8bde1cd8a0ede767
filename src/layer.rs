use crate::color::Color;

/// Backing-layer properties of a view.
///
/// Reached through the `layer` field of [`ViewProps`](crate::ViewProps), e.g.
/// `key_path!(ViewProps, layer.corner_radius)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layer {
    /// Corner radius.
    pub corner_radius: f64,

    /// Border (width, color).
    pub border: Option<(f64, Color)>,

    /// Whether contents will be clipped to the layer’s bounds.
    pub clip_contents: bool,

    /// Layer opacity.
    pub opacity: f64,
}

impl Default for Layer {
    fn default() -> Self {
        Layer {
            corner_radius: 0.,
            border: None,
            clip_contents: false,
            opacity: 1.,
        }
    }
}
