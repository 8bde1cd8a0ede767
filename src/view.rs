use crate::color::Color;
use crate::error::BuildError;
use crate::layer::Layer;
use crate::rect::Rect;
use core::fmt::{self, Write};
use core::mem;
use parking_lot::{const_mutex, Mutex, RwLock};
use std::sync::{Arc, Weak};
use tracing::debug;
use uuid::Uuid;

/// A unique identifier for a view.
///
/// (this is just a UUID)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ViewId(Uuid);

impl ViewId {
    pub(crate) fn new() -> ViewId {
        ViewId(Uuid::new_v4())
    }
}

/// The settable properties of a view.
///
/// This is the key-path root of every view kind in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewProps {
    /// Position and size in the superview’s coordinate system.
    pub frame: Rect,

    /// Fill for the view’s bounds.
    pub background: Color,

    /// Backing-layer properties.
    pub layer: Layer,

    pub hidden: bool,
}

impl ViewProps {
    pub fn with_frame(frame: Rect) -> ViewProps {
        ViewProps {
            frame,
            ..ViewProps::default()
        }
    }
}

/// Held across structural edits so a cycle check and the attach it guards cannot interleave
/// with another thread's edit.
static STRUCTURE: Mutex<()> = const_mutex(());

struct Node {
    id: ViewId,
    kind: &'static str,
    props: RwLock<ViewProps>,
    /// Non-owning; the superview owns this node through its subview list.
    superview: RwLock<Weak<Node>>,
    subviews: RwLock<Vec<AnyView>>,
}

/// A shared handle to a view of any kind.
///
/// Cloning the handle does not clone the view: clones compare equal under [`AnyView::ptr_eq`].
#[derive(Clone)]
pub struct AnyView(Arc<Node>);

impl AnyView {
    /// Creates an empty, detached view.
    ///
    /// `kind` names the view kind in logs and descriptions.
    pub fn new(kind: &'static str, frame: Rect) -> AnyView {
        AnyView(Arc::new(Node {
            id: ViewId::new(),
            kind,
            props: RwLock::new(ViewProps::with_frame(frame)),
            superview: RwLock::new(Weak::new()),
            subviews: RwLock::new(Vec::new()),
        }))
    }

    /// Views cannot be restored from an archive.
    pub fn decode(archive: &[u8]) -> Result<AnyView, BuildError> {
        let _ = archive;
        Err(BuildError::UnimplementedDecoding)
    }

    pub fn id(&self) -> ViewId {
        self.0.id
    }

    pub fn kind(&self) -> &'static str {
        self.0.kind
    }

    /// Returns a snapshot of the view’s properties.
    pub fn props(&self) -> ViewProps {
        *self.0.props.read()
    }

    pub fn frame(&self) -> Rect {
        self.0.props.read().frame
    }

    /// The frame moved to the origin.
    pub fn bounds(&self) -> Rect {
        self.frame().bounds()
    }

    pub fn background(&self) -> Color {
        self.0.props.read().background
    }

    /// Runs `f` with exclusive access to the view’s properties.
    pub fn update_props<R>(&self, f: impl FnOnce(&mut ViewProps) -> R) -> R {
        f(&mut *self.0.props.write())
    }

    pub fn superview(&self) -> Option<AnyView> {
        self.0.superview.read().upgrade().map(AnyView)
    }

    /// Returns the subviews in insertion order.
    pub fn subviews(&self) -> Vec<AnyView> {
        self.0.subviews.read().clone()
    }

    /// Returns true if both handles refer to the same view.
    pub fn ptr_eq(&self, other: &AnyView) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Returns true if this view is `ancestor` or one of its descendants.
    pub fn is_descendant_of(&self, ancestor: &AnyView) -> bool {
        let mut current = Some(self.clone());
        while let Some(view) = current {
            if view.ptr_eq(ancestor) {
                return true;
            }
            current = view.superview();
        }
        false
    }

    pub(crate) fn check_subview(&self, child: &AnyView) -> Result<(), BuildError> {
        if self.is_descendant_of(child) {
            return Err(BuildError::WouldCycle {
                parent: self.id(),
                child: child.id(),
            });
        }
        Ok(())
    }

    /// Appends `child` to this view’s subviews.
    ///
    /// A child that already has a superview is moved: it is removed from its current superview
    /// first (even if that is this view, in which case it ends up last).
    pub fn add_subview(&self, child: &AnyView) -> Result<(), BuildError> {
        {
            let _structure = STRUCTURE.lock();
            self.check_subview(child)?;
            child.detach();

            self.0.subviews.write().push(child.clone());
            *child.0.superview.write() = Arc::downgrade(&self.0);
        }

        debug!(parent = ?self, child = ?child, "added subview");
        Ok(())
    }

    /// Detaches this view from its superview, if it has one.
    pub fn remove_from_superview(&self) {
        let _structure = STRUCTURE.lock();
        self.detach();
    }

    fn detach(&self) {
        let superview = mem::replace(&mut *self.0.superview.write(), Weak::new());
        if let Some(superview) = superview.upgrade() {
            superview
                .subviews
                .write()
                .retain(|view| !Arc::ptr_eq(&view.0, &self.0));
        }
    }

    /// Returns an indented, multi-line description of this view and all of its descendants.
    pub fn describe(&self) -> String {
        let mut out = String::new();
        self.describe_into(&mut out, 0);
        out
    }

    fn describe_into(&self, out: &mut String, depth: usize) {
        let props = self.props();
        let Rect { origin, size } = props.frame;
        let Color { r, g, b, a } = props.background;
        // writing into a String never fails
        let _ = writeln!(
            out,
            "{:indent$}{} frame=({}, {}, {}, {}) background=({:.2}, {:.2}, {:.2}, {:.2})",
            "",
            self.kind(),
            origin.x,
            origin.y,
            size.x,
            size.y,
            r,
            g,
            b,
            a,
            indent = depth * 2,
        );
        for subview in self.subviews() {
            subview.describe_into(out, depth + 1);
        }
    }
}

impl fmt::Debug for AnyView {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct(self.kind())
            .field("id", &self.id())
            .field("frame", &self.frame())
            .field("subviews", &self.0.subviews.read().len())
            .finish()
    }
}

/// Typed view kinds that are backed by an [`AnyView`].
pub trait AsView {
    fn as_view(&self) -> &AnyView;
}

impl AsView for AnyView {
    fn as_view(&self) -> &AnyView {
        self
    }
}

/// A reference to a view that may be absent.
///
/// Implemented for every view kind, references to them, and `Option`s of those, so `add`
/// operations can be handed `None` the same way they are handed a view.
pub trait OptionalView {
    fn into_view(self) -> Option<AnyView>;
}

impl OptionalView for AnyView {
    fn into_view(self) -> Option<AnyView> {
        Some(self)
    }
}

impl<'a> OptionalView for &'a AnyView {
    fn into_view(self) -> Option<AnyView> {
        Some(self.clone())
    }
}

impl<T: OptionalView> OptionalView for Option<T> {
    fn into_view(self) -> Option<AnyView> {
        self.and_then(OptionalView::into_view)
    }
}

/// Implements the plumbing traits for a view kind.
///
/// The kind must be a struct with a `view: AnyView` field. This implements [`AsView`],
/// [`Settable`](crate::Settable) (rooted at [`ViewProps`]), [`OptionalView`] for the kind and
/// references to it, and conversion into [`AnyView`]. Capabilities (`Attachable`, `Composite`) are
/// opted into separately with empty impls.
///
/// ```text
/// pub struct Badge {
///     view: AnyView,
/// }
/// impl_element!(Badge);
/// impl Attachable for Badge {}
/// ```
#[macro_export]
macro_rules! impl_element {
    ($ty:ty) => {
        impl $crate::AsView for $ty {
            fn as_view(&self) -> &$crate::AnyView {
                &self.view
            }
        }

        impl $crate::Settable for $ty {
            type Root = $crate::ViewProps;

            fn modify<R>(&self, f: impl FnOnce(&mut $crate::ViewProps) -> R) -> R {
                self.view.update_props(f)
            }
        }

        impl $crate::OptionalView for $ty {
            fn into_view(self) -> Option<$crate::AnyView> {
                Some(self.view)
            }
        }

        impl<'a> $crate::OptionalView for &'a $ty {
            fn into_view(self) -> Option<$crate::AnyView> {
                Some(self.view.clone())
            }
        }

        impl From<$ty> for $crate::AnyView {
            fn from(element: $ty) -> $crate::AnyView {
                element.view
            }
        }
    };
}
