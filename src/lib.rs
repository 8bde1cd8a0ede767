//! Fluent view-tree composition.
//!
//! # Conceptual overview
//! Bare builds view hierarchies with chained construction calls instead of step-by-step mutation.
//! A tree is composed once, at launch, and then handed to the platform to display.
//!
//! ## Views
//! Every view is backed by an [`AnyView`]: a shared handle to a node with an id, a set of
//! properties ([`ViewProps`]: frame, background fill, layer properties), an ordered list of
//! subviews and a weak reference to its superview. Typed view kinds such as [`BareView`] and
//! [`View`] wrap a handle and decide which builder capabilities they offer. Cloning a view clones
//! the handle, not the view.
//!
//! A view has at most one superview. Adding a view that already has one moves it, and adding a
//! view to itself or to one of its descendants is rejected.
//!
//! ## Capabilities
//! - [`Settable`]: `with(key_path, value)` assigns a property through a [`KeyPath`], a typed
//!   reference to a field of the view’s property record. The value must have the field’s type.
//! - [`Attachable`]: `add_to(parent)` inserts the view into a parent.
//! - [`Composite`]: `add_child(child)` and `add_children(children)` insert children, in order.
//!
//! All of them take the receiver by value and return it with its concrete type, so a chain never
//! loses access to what the kind can do:
//!
//! ```text
//! View::new()
//!     .with(paths::frame(), window.as_view().bounds())
//!     .with(paths::background(), Color::RED)
//!     .add_child(BareView::new().with(paths::background(), Color::BLACK))
//!     .add_to(&base);
//! ```
//!
//! `add` operations accept `Option`s, since a reference to the other side may legitimately be
//! unresolved in calling code. An absent reference is a bug in the composition, so the fluent
//! methods panic on it; `try_` variants return a [`BuildError`] instead.
//!
//! ## Shared chrome
//! Kinds implementing [`StyledKind`] have one lazily built, pre-styled instance per
//! [`Registry`]. The navigation band ([`NavigationView`]) and the content region
//! ([`ContentView`]) are styled from the screen bounds at first access and from a
//! [`ChromeConfig`]; afterwards the same instance is returned no matter how the screen changed.
//!
//! ## Platform
//! The platform is reached through [`Screen`] (current bounds) and [`Platform`] (mounting the
//! root window). A [`Host`] launches an [`AppDelegate`] and forwards lifecycle events to it.
//! [`HeadlessPlatform`] stands in for a real display.
//!
//! ## Coordinate System
//! The origin is at the top left corner of the screen, and positive y points down.

pub mod color;
mod builder;
mod chrome;
mod compose;
mod config;
mod elements;
mod error;
mod host;
mod key_path;
mod layer;
mod rect;
mod registry;
mod view;

pub use builder::{Attachable, Composite, Settable};
pub use chrome::{BaseView, ContentView, NavigationView};
pub use color::Color;
pub use compose::{compose, BareApp, Composition};
pub use config::ChromeConfig;
pub use elements::{BareView, View, Window};
pub use error::{BuildError, Missing};
pub use host::{AppDelegate, HeadlessPlatform, Host, LifecycleEvent, Platform, Screen};
pub use key_path::{paths, KeyPath};
pub use layer::Layer;
pub use rect::Rect;
pub use registry::{Registry, StyledKind};
pub use view::{AnyView, AsView, OptionalView, ViewId, ViewProps};
