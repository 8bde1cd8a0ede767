//! Basic view kinds.

use crate::builder::{Attachable, Composite};
use crate::error::BuildError;
use crate::impl_element;
use crate::rect::Rect;
use crate::view::{AnyView, OptionalView};

/// A view that can be styled and attached to a parent, but does not take children.
#[derive(Debug, Clone)]
pub struct BareView {
    view: AnyView,
}

impl_element!(BareView);
impl Attachable for BareView {}

impl BareView {
    pub fn new() -> BareView {
        BareView::with_frame(Rect::zero())
    }

    pub fn with_frame(frame: Rect) -> BareView {
        BareView {
            view: AnyView::new("BareView", frame),
        }
    }

    /// Views cannot be restored from an archive.
    pub fn decode(archive: &[u8]) -> Result<BareView, BuildError> {
        AnyView::decode(archive).map(|view| BareView { view })
    }
}

impl Default for BareView {
    fn default() -> BareView {
        BareView::new()
    }
}

/// A container view: it can be styled, attached to a parent, and given children.
#[derive(Debug, Clone)]
pub struct View {
    view: AnyView,
}

impl_element!(View);
impl Attachable for View {}
impl Composite for View {}

impl View {
    pub fn new() -> View {
        View::with_frame(Rect::zero())
    }

    pub fn with_frame(frame: Rect) -> View {
        View::from_view(AnyView::new("View", frame))
    }

    /// Creates a zero-sized container holding `custom_view`.
    ///
    /// # Panics
    /// If `custom_view` is absent.
    #[track_caller]
    pub fn with_custom_view(custom_view: impl OptionalView) -> View {
        View::new().add_child(custom_view)
    }

    /// Views cannot be restored from an archive.
    pub fn decode(archive: &[u8]) -> Result<View, BuildError> {
        AnyView::decode(archive).map(View::from_view)
    }

    fn from_view(view: AnyView) -> View {
        View { view }
    }
}

impl Default for View {
    fn default() -> View {
        View::new()
    }
}

/// The display surface: the root of a composed tree.
///
/// A window has no superview and is not a container; views attach themselves to it with
/// [`Attachable::add_to`].
#[derive(Debug, Clone)]
pub struct Window {
    view: AnyView,
}

impl_element!(Window);

impl Window {
    pub fn new(frame: Rect) -> Window {
        Window {
            view: AnyView::new("Window", frame),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::Settable;
    use crate::color::Color;
    use crate::key_path::paths;
    use crate::view::AsView;

    #[test]
    fn chained_calls_keep_the_concrete_type() {
        let parent = View::new();
        // every step must still be a `View`, or `add_child` would not resolve
        let view: View = View::new()
            .with(paths::frame(), Rect::from_xywh(0., 0., 10., 10.))
            .add_to(&parent)
            .with(paths::background(), Color::RED)
            .add_child(BareView::new())
            .with(paths::hidden(), true);

        assert!(view.as_view().superview().unwrap().ptr_eq(parent.as_view()));
        assert_eq!(view.as_view().background(), Color::RED);
        assert!(view.as_view().props().hidden);
        assert_eq!(view.as_view().subviews().len(), 1);
    }

    #[test]
    fn custom_view_is_the_only_child() {
        let custom = BareView::new();
        let view = View::with_custom_view(&custom);
        let subviews = view.as_view().subviews();
        assert_eq!(subviews.len(), 1);
        assert!(subviews[0].ptr_eq(custom.as_view()));
        assert_eq!(view.as_view().frame(), Rect::zero());
    }

    #[test]
    #[should_panic(expected = "child view is nil")]
    fn custom_view_must_be_present() {
        View::with_custom_view(None::<BareView>);
    }

    #[test]
    #[should_panic(expected = "parent view is nil")]
    fn attaching_to_an_absent_parent_aborts() {
        let window: Option<Window> = None;
        BareView::new().add_to(window.as_ref());
    }

    #[test]
    fn views_attach_to_windows() {
        let window = Window::new(Rect::from_xywh(0., 0., 320., 480.));
        let view = BareView::new().add_to(&window);
        assert_eq!(window.as_view().subviews().len(), 1);
        assert!(view.as_view().superview().unwrap().ptr_eq(window.as_view()));
    }

    #[test]
    fn kinds_are_named_for_descriptions() {
        assert_eq!(BareView::new().as_view().kind(), "BareView");
        assert_eq!(View::new().as_view().kind(), "View");
        assert!(BareView::decode(&[]).is_err());
        assert!(View::decode(&[]).is_err());
    }
}
