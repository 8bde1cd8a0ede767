//! The launch-time composition of the demo UI.

use crate::builder::{Attachable, Composite, Settable};
use crate::chrome::BaseView;
use crate::color::Color;
use crate::elements::{BareView, View, Window};
use crate::host::{AppDelegate, Platform};
use crate::key_path::paths;
use crate::rect::Rect;
use crate::registry::Registry;
use crate::view::{AnyView, AsView};
use tracing::{debug, info, warn};

/// The composed tree.
#[derive(Debug, Clone)]
pub struct Composition {
    /// The mounted root.
    pub window: Window,
    /// Full-screen view holding the shared chrome; attached to `window`.
    pub base: BaseView,
    /// The decorated overlay; attached to `base`.
    pub overlay: View,
}

/// Builds the demo tree and mounts it on `platform`.
///
/// The window is made key and visible only after every view has been styled and attached.
///
/// # Panics
/// If an attachment fails; a partially composed tree is never mounted.
pub fn compose<P: Platform + ?Sized>(platform: &P, registry: &Registry) -> Composition {
    let window = Window::new(platform.bounds());

    let base = BaseView::with_registry(platform, registry).add_to(&window);

    let overlay = View::new()
        .with(paths::frame(), window.as_view().bounds())
        .with(paths::background(), Color::RED)
        .with(paths::corner_radius(), 16.)
        .add_child(block(Rect::from_xywh(50., 50., 100., 100.)))
        .add_children(vec![
            block(Rect::from_xywh(50., 100., 50., 30.)),
            block(Rect::from_xywh(350., 50., 100., 300.)),
            block(Rect::from_xywh(450., 450., 100., 300.)),
        ])
        .add_to(&base);

    platform.make_key_and_visible(&window);
    info!(
        views = count(window.as_view()),
        bounds = ?window.as_view().bounds(),
        "composition mounted"
    );

    Composition {
        window,
        base,
        overlay,
    }
}

fn block(frame: Rect) -> BareView {
    BareView::new()
        .with(paths::frame(), frame)
        .with(paths::background(), Color::BLACK)
}

fn count(view: &AnyView) -> usize {
    1 + view.subviews().iter().map(count).sum::<usize>()
}

/// The application delegate that runs [`compose`] at launch.
#[derive(Debug)]
pub struct BareApp<'r> {
    registry: &'r Registry,
    composition: Option<Composition>,
}

impl BareApp<'static> {
    /// An app drawing its chrome from the process-wide registry.
    pub fn new() -> BareApp<'static> {
        BareApp::with_registry(Registry::global())
    }
}

impl Default for BareApp<'static> {
    fn default() -> Self {
        BareApp::new()
    }
}

impl<'r> BareApp<'r> {
    pub fn with_registry(registry: &'r Registry) -> BareApp<'r> {
        BareApp {
            registry,
            composition: None,
        }
    }

    pub fn composition(&self) -> Option<&Composition> {
        self.composition.as_ref()
    }
}

impl<'r> AppDelegate for BareApp<'r> {
    fn did_finish_launching(&mut self, platform: &dyn Platform) -> bool {
        if self.composition.is_some() {
            warn!("already launched; keeping the existing composition");
            return true;
        }
        self.composition = Some(compose(platform, self.registry));
        true
    }

    fn will_resign_active(&mut self) {
        debug!("will resign active");
    }

    fn did_enter_background(&mut self) {
        debug!("did enter background");
    }

    fn will_enter_foreground(&mut self) {
        debug!("will enter foreground");
    }

    fn did_become_active(&mut self) {
        debug!("did become active");
    }

    fn will_terminate(&mut self) {
        debug!("will terminate");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::HeadlessPlatform;

    #[test]
    fn launching_twice_mounts_once() {
        let registry = Registry::default();
        let platform = HeadlessPlatform::new(Rect::from_xywh(0., 0., 375., 667.));
        let mut app = BareApp::with_registry(&registry);

        assert!(app.did_finish_launching(&platform));
        assert!(app.did_finish_launching(&platform));
        assert_eq!(platform.mount_count(), 1);

        let composition = app.composition().unwrap();
        let key_window = platform.key_window().unwrap();
        assert!(key_window.as_view().ptr_eq(composition.window.as_view()));
    }

    #[test]
    fn the_tree_has_nine_views() {
        let registry = Registry::default();
        let platform = HeadlessPlatform::new(Rect::from_xywh(0., 0., 375., 667.));
        let composition = compose(&platform, &registry);
        // window, base, navigation, content, overlay, four blocks
        assert_eq!(count(composition.window.as_view()), 9);
    }
}
