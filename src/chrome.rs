//! The shared chrome: navigation and content regions, and the base view that holds them.

use crate::builder::{Attachable, Composite, Settable};
use crate::config::ChromeConfig;
use crate::host::Screen;
use crate::impl_element;
use crate::key_path::paths;
use crate::rect::Rect;
use crate::registry::{Registry, StyledKind};
use crate::view::AnyView;

/// The navigation band along the top of the screen.
#[derive(Debug, Clone)]
pub struct NavigationView {
    view: AnyView,
}

impl_element!(NavigationView);
impl Attachable for NavigationView {}
impl Composite for NavigationView {}

impl NavigationView {
    fn new() -> NavigationView {
        NavigationView {
            view: AnyView::new("NavigationView", Rect::zero()),
        }
    }
}

impl StyledKind for NavigationView {
    fn build(bounds: Rect, chrome: &ChromeConfig) -> Self {
        NavigationView::new()
            .with(paths::frame(), chrome.navigation_frame(bounds))
            .with(paths::background(), chrome.navigation_fill)
    }
}

/// The region below the navigation band.
#[derive(Debug, Clone)]
pub struct ContentView {
    view: AnyView,
}

impl_element!(ContentView);
impl Attachable for ContentView {}
impl Composite for ContentView {}

impl ContentView {
    fn new() -> ContentView {
        ContentView {
            view: AnyView::new("ContentView", Rect::zero()),
        }
    }
}

impl StyledKind for ContentView {
    fn build(bounds: Rect, chrome: &ChromeConfig) -> Self {
        ContentView::new()
            .with(paths::frame(), chrome.content_frame(bounds))
            .with(paths::background(), chrome.content_fill)
    }
}

/// A full-screen view holding the shared navigation and content regions, in that order.
///
/// The regions are shared: creating another base view moves them into the new one.
#[derive(Debug, Clone)]
pub struct BaseView {
    view: AnyView,
    navigation_view: NavigationView,
    content_view: ContentView,
}

impl_element!(BaseView);
impl Attachable for BaseView {}

impl BaseView {
    /// Creates a base view from the process-wide registry.
    pub fn new<S: Screen + ?Sized>(screen: &S) -> BaseView {
        BaseView::with_registry(screen, Registry::global())
    }

    pub fn with_registry<S: Screen + ?Sized>(screen: &S, registry: &Registry) -> BaseView {
        let view = AnyView::new("BaseView", screen.bounds());
        let navigation_view = registry.shared::<NavigationView, _>(screen).add_to(&view);
        let content_view = registry.shared::<ContentView, _>(screen).add_to(&view);

        BaseView {
            view,
            navigation_view,
            content_view,
        }
    }

    pub fn navigation_view(&self) -> &NavigationView {
        &self.navigation_view
    }

    pub fn content_view(&self) -> &ContentView {
        &self.content_view
    }
}
