//! Shared, pre-styled view instances.

use crate::config::ChromeConfig;
use crate::error::{fatal, BuildError};
use crate::host::Screen;
use crate::rect::Rect;
use core::any::{type_name, Any, TypeId};
use parking_lot::Mutex;
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, OnceLock};
use tracing::debug;

/// A view kind with one shared, pre-styled instance per registry.
///
/// `build` must be deterministic in its inputs: it runs at most once per registry, on first
/// access, and its result is handed out unchanged from then on.
pub trait StyledKind: Clone + Send + Sync + 'static {
    /// Constructs and styles the instance for a screen with the given bounds.
    fn build(bounds: Rect, chrome: &ChromeConfig) -> Self;

    /// The instance from the process-wide registry.
    fn shared<S: Screen + ?Sized>(screen: &S) -> Self {
        Registry::global().shared(screen)
    }
}

type Slot = Arc<OnceLock<Box<dyn Any + Send + Sync>>>;

thread_local! {
    /// (registry address, kind) pairs whose builder is running on this thread.
    static BUILDING: RefCell<HashSet<(usize, TypeId)>> = RefCell::new(HashSet::new());
}

/// Marks a kind as being built on the current thread until dropped.
struct Building((usize, TypeId));

impl Building {
    /// Returns `None` if the kind is already being built on this thread.
    fn enter(registry: &Registry, kind: TypeId) -> Option<Building> {
        let key = (registry as *const Registry as usize, kind);
        BUILDING
            .with(|building| building.borrow_mut().insert(key))
            .then(|| Building(key))
    }
}

impl Drop for Building {
    fn drop(&mut self) {
        BUILDING.with(|building| {
            building.borrow_mut().remove(&self.0);
        });
    }
}

/// Lazily constructed instances of [`StyledKind`]s, one per kind.
///
/// Construction is single-flight per kind: concurrent first accesses to the same kind build it
/// exactly once, and everyone gets the same instance. Different kinds build independently.
#[derive(Debug)]
pub struct Registry {
    chrome: ChromeConfig,
    slots: Mutex<HashMap<TypeId, Slot>>,
}

impl Registry {
    pub fn new(chrome: ChromeConfig) -> Registry {
        Registry {
            chrome,
            slots: Mutex::new(HashMap::new()),
        }
    }

    /// The process-wide registry, using the default chrome.
    pub fn global() -> &'static Registry {
        static GLOBAL: OnceLock<Registry> = OnceLock::new();
        GLOBAL.get_or_init(|| Registry::new(ChromeConfig::default()))
    }

    pub fn chrome(&self) -> &ChromeConfig {
        &self.chrome
    }

    /// Returns the shared instance of `K`, building it on first access.
    ///
    /// The screen is only consulted by the first access; later bounds changes do not affect an
    /// instance that already exists.
    ///
    /// # Panics
    /// If `K::build` accesses `K` in the same registry, directly or through other kinds.
    pub fn shared<K: StyledKind, S: Screen + ?Sized>(&self, screen: &S) -> K {
        let kind = TypeId::of::<K>();
        // the map lock must not be held while building: builders may access other kinds
        let slot = self.slot(kind);
        let instance = match slot.get() {
            Some(instance) => instance,
            None => {
                let _building = match Building::enter(self, kind) {
                    Some(building) => building,
                    None => fatal(BuildError::ReentrantBuild {
                        kind: type_name::<K>(),
                    }),
                };
                slot.get_or_init(|| {
                    let bounds = screen.bounds();
                    debug!(kind = type_name::<K>(), ?bounds, "building shared instance");
                    let instance: Box<dyn Any + Send + Sync> =
                        Box::new(K::build(bounds, &self.chrome));
                    instance
                })
            }
        };
        match instance.downcast_ref::<K>() {
            Some(instance) => instance.clone(),
            // slots are keyed by the TypeId of the kind they hold
            None => unreachable!("registry slot for {} holds another kind", type_name::<K>()),
        }
    }

    /// Returns true if `K` has been built.
    pub fn is_initialized<K: StyledKind>(&self) -> bool {
        self.slots
            .lock()
            .get(&TypeId::of::<K>())
            .map_or(false, |slot| slot.get().is_some())
    }

    /// The number of kinds that have been built.
    pub fn len(&self) -> usize {
        self.slots
            .lock()
            .values()
            .filter(|slot| slot.get().is_some())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn slot(&self, kind: TypeId) -> Slot {
        Arc::clone(self.slots.lock().entry(kind).or_default())
    }
}

impl Default for Registry {
    fn default() -> Self {
        Registry::new(ChromeConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Barrier;
    use std::thread;
    use std::time::Duration;

    static BUILDS: AtomicUsize = AtomicUsize::new(0);

    #[derive(Debug, Clone, PartialEq)]
    struct Slow(Rect);

    impl StyledKind for Slow {
        fn build(bounds: Rect, _chrome: &ChromeConfig) -> Self {
            BUILDS.fetch_add(1, Ordering::SeqCst);
            thread::sleep(Duration::from_millis(20));
            Slow(bounds)
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Height(f64);

    impl StyledKind for Height {
        fn build(_bounds: Rect, chrome: &ChromeConfig) -> Self {
            Height(chrome.navigation_height)
        }
    }

    #[test]
    fn concurrent_first_access_builds_once() {
        let registry = Registry::default();
        let screen = Rect::from_xywh(0., 0., 100., 100.);
        let barrier = Barrier::new(8);

        let (registry, barrier, screen) = (&registry, &barrier, &screen);

        let results: Vec<Slow> = crossbeam::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(move |_| {
                    scope.spawn(move |_| {
                        barrier.wait();
                        registry.shared::<Slow, _>(screen)
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        })
        .unwrap();

        assert_eq!(BUILDS.load(Ordering::SeqCst), 1);
        assert!(results.iter().all(|slow| *slow == Slow(*screen)));
    }

    #[test]
    fn kinds_are_independent() {
        let registry = Registry::new(ChromeConfig {
            navigation_height: 44.,
            ..ChromeConfig::default()
        });
        assert!(registry.is_empty());
        assert_eq!(registry.shared::<Height, _>(&Rect::zero()), Height(44.));
        assert!(registry.is_initialized::<Height>());
        assert!(!registry.is_initialized::<Slow>());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn later_screens_are_ignored() {
        #[derive(Debug, Clone, PartialEq)]
        struct Measured(Rect);
        impl StyledKind for Measured {
            fn build(bounds: Rect, _chrome: &ChromeConfig) -> Self {
                Measured(bounds)
            }
        }

        let registry = Registry::default();
        let first = Rect::from_xywh(0., 0., 320., 480.);
        let second = Rect::from_xywh(0., 0., 480., 320.);
        assert_eq!(registry.shared::<Measured, _>(&first), Measured(first));
        assert_eq!(registry.shared::<Measured, _>(&second), Measured(first));
    }

    #[derive(Debug, Clone)]
    struct Recursive;

    impl StyledKind for Recursive {
        fn build(bounds: Rect, _chrome: &ChromeConfig) -> Self {
            Recursive::shared(&bounds)
        }
    }

    #[test]
    #[should_panic(expected = "was accessed while it was being built")]
    fn a_kind_built_from_itself_aborts() {
        Recursive::shared(&Rect::zero());
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Outer(f64);

    impl StyledKind for Outer {
        fn build(_bounds: Rect, chrome: &ChromeConfig) -> Self {
            // the same kind in another registry is a separate build
            let inner = Registry::new(ChromeConfig {
                navigation_height: chrome.navigation_height * 2.,
                ..ChromeConfig::default()
            });
            let Height(height) = inner.shared::<Height, _>(&Rect::zero());
            Outer(height)
        }
    }

    #[test]
    fn builders_may_access_other_kinds_and_registries() {
        let registry = Registry::default();
        assert_eq!(registry.shared::<Outer, _>(&Rect::zero()), Outer(120.));
        assert!(!registry.is_initialized::<Height>());
        // the in-progress marker is cleared once the build finishes
        assert_eq!(registry.shared::<Height, _>(&Rect::zero()), Height(60.));
    }

    #[test]
    fn same_shaped_kinds_get_separate_slots() {
        #[derive(Debug, Clone, PartialEq)]
        struct Left(Rect);
        impl StyledKind for Left {
            fn build(bounds: Rect, _chrome: &ChromeConfig) -> Self {
                Left(bounds)
            }
        }
        #[derive(Debug, Clone, PartialEq)]
        struct Right(Rect);
        impl StyledKind for Right {
            fn build(_bounds: Rect, _chrome: &ChromeConfig) -> Self {
                Right(Rect::zero())
            }
        }

        let registry = Registry::default();
        let screen = Rect::from_xywh(0., 0., 1., 1.);
        assert_eq!(registry.shared::<Left, _>(&screen), Left(screen));
        assert_eq!(registry.shared::<Right, _>(&screen), Right(Rect::zero()));
        assert_eq!(registry.len(), 2);
    }
}
