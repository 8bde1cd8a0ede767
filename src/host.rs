//! The boundary to the platform: screen, window mounting, and application lifecycle.

use crate::elements::Window;
use crate::rect::Rect;
use crate::view::AsView;
use crossbeam::channel::{self, Receiver, Sender};
use parking_lot::{Mutex, RwLock};
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{debug, info};

/// A display surface.
pub trait Screen {
    /// The current bounds of the screen.
    fn bounds(&self) -> Rect;
}

/// A fixed-size screen.
impl Screen for Rect {
    fn bounds(&self) -> Rect {
        *self
    }
}

/// Services the platform provides to a composed tree.
pub trait Platform: Screen {
    /// Makes `window` the visible root of the display.
    fn make_key_and_visible(&self, window: &Window);
}

/// A platform without a display, for tests and tooling.
///
/// Screen bounds can be changed at any time; the most recently mounted window is retained.
#[derive(Debug)]
pub struct HeadlessPlatform {
    bounds: RwLock<Rect>,
    key_window: Mutex<Option<Window>>,
    mounts: AtomicUsize,
}

impl HeadlessPlatform {
    pub fn new(bounds: Rect) -> HeadlessPlatform {
        HeadlessPlatform {
            bounds: RwLock::new(bounds),
            key_window: Mutex::new(None),
            mounts: AtomicUsize::new(0),
        }
    }

    /// Simulates a screen change (e.g. a rotation).
    pub fn set_bounds(&self, bounds: Rect) {
        *self.bounds.write() = bounds;
    }

    pub fn key_window(&self) -> Option<Window> {
        self.key_window.lock().clone()
    }

    /// How many times a window has been made key and visible.
    pub fn mount_count(&self) -> usize {
        self.mounts.load(Ordering::SeqCst)
    }
}

impl Screen for HeadlessPlatform {
    fn bounds(&self) -> Rect {
        *self.bounds.read()
    }
}

impl Platform for HeadlessPlatform {
    fn make_key_and_visible(&self, window: &Window) {
        debug!(window = ?window.as_view(), "making window key and visible");
        *self.key_window.lock() = Some(window.clone());
        self.mounts.fetch_add(1, Ordering::SeqCst);
    }
}

/// Application lifecycle notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleEvent {
    WillResignActive,
    DidEnterBackground,
    WillEnterForeground,
    DidBecomeActive,
    WillTerminate,
}

/// Receives the launch call and lifecycle notifications.
///
/// Lifecycle hooks do nothing unless overridden.
pub trait AppDelegate {
    /// Called once the platform is ready; composes and mounts the UI.
    ///
    /// Returns false if launching failed.
    fn did_finish_launching(&mut self, platform: &dyn Platform) -> bool;

    fn will_resign_active(&mut self) {}

    fn did_enter_background(&mut self) {}

    fn will_enter_foreground(&mut self) {}

    fn did_become_active(&mut self) {}

    fn will_terminate(&mut self) {}
}

/// Connects an application delegate to a platform.
pub struct Host<P> {
    platform: P,
    event_send: Sender<LifecycleEvent>,
    event_recv: Receiver<LifecycleEvent>,
}

impl<P: Platform> Host<P> {
    pub fn new(platform: P) -> Host<P> {
        let (event_send, event_recv) = channel::unbounded();

        Host {
            platform,
            event_send,
            event_recv,
        }
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    /// Returns a sender for lifecycle events; platform callbacks post here.
    pub fn events(&self) -> Sender<LifecycleEvent> {
        self.event_send.clone()
    }

    /// Launches the application.
    pub fn launch(&self, delegate: &mut impl AppDelegate) -> bool {
        info!(bounds = ?self.platform.bounds(), "launching");
        delegate.did_finish_launching(&self.platform)
    }

    /// Delivers all pending lifecycle events to the delegate, in order.
    ///
    /// Returns the number of events delivered.
    pub fn poll(&self, delegate: &mut impl AppDelegate) -> usize {
        let mut delivered = 0;
        for event in self.event_recv.try_iter() {
            debug!(?event, "lifecycle event");
            match event {
                LifecycleEvent::WillResignActive => delegate.will_resign_active(),
                LifecycleEvent::DidEnterBackground => delegate.did_enter_background(),
                LifecycleEvent::WillEnterForeground => delegate.will_enter_foreground(),
                LifecycleEvent::DidBecomeActive => delegate.did_become_active(),
                LifecycleEvent::WillTerminate => delegate.will_terminate(),
            }
            delivered += 1;
        }
        delivered
    }
}
