//! Typed references to fields.

use core::fmt;
use std::borrow::Cow;
use std::sync::Arc;

type Closure<Root, Value> = dyn for<'a> Fn(&'a mut Root) -> &'a mut Value + Send + Sync;

enum Projection<Root, Value> {
    /// A plain field access, called directly.
    Field(for<'a> fn(&'a mut Root) -> &'a mut Value),
    /// Anything else, such as a composition of key paths.
    Closure(Arc<Closure<Root, Value>>),
}

impl<Root, Value> Projection<Root, Value> {
    fn project<'a>(&self, root: &'a mut Root) -> &'a mut Value {
        match self {
            Projection::Field(field) => field(root),
            Projection::Closure(closure) => (**closure)(root),
        }
    }
}

impl<Root, Value> Clone for Projection<Root, Value> {
    fn clone(&self) -> Self {
        match self {
            Projection::Field(field) => Projection::Field(*field),
            Projection::Closure(closure) => Projection::Closure(Arc::clone(closure)),
        }
    }
}

/// A reference to a field of type `Value` somewhere inside a `Root`.
///
/// The value type is fixed when the key path is created, so handing a mismatched value to
/// [`Settable::with`](crate::Settable::with) is a type error rather than a runtime failure.
/// Usually created with [`key_path!`](crate::key_path).
pub struct KeyPath<Root, Value> {
    name: Cow<'static, str>,
    project: Projection<Root, Value>,
}

impl<Root, Value> KeyPath<Root, Value> {
    /// A key path that projects through a plain function, as [`key_path!`](crate::key_path) does.
    pub fn field(
        name: &'static str,
        project: for<'a> fn(&'a mut Root) -> &'a mut Value,
    ) -> KeyPath<Root, Value> {
        KeyPath {
            name: Cow::Borrowed(name),
            project: Projection::Field(project),
        }
    }
}

impl<Root: 'static, Value: 'static> KeyPath<Root, Value> {
    pub fn new<F>(name: impl Into<Cow<'static, str>>, project: F) -> KeyPath<Root, Value>
    where
        F: for<'a> Fn(&'a mut Root) -> &'a mut Value + Send + Sync + 'static,
    {
        KeyPath {
            name: name.into(),
            project: Projection::Closure(Arc::new(project)),
        }
    }

    /// Extends this key path by a key path rooted at its value.
    pub fn appending<Next: 'static>(self, next: KeyPath<Value, Next>) -> KeyPath<Root, Next> {
        let name = format!("{}.{}", self.name, next.name);
        let (outer, inner) = (self.project, next.project);
        KeyPath::<Root, Next>::new(name, move |root| inner.project(outer.project(root)))
    }
}

impl<Root, Value> KeyPath<Root, Value> {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Projects `root` onto the referenced field.
    pub fn get<'a>(&self, root: &'a mut Root) -> &'a mut Value {
        self.project.project(root)
    }

    /// Overwrites the referenced field.
    pub fn set(&self, root: &mut Root, value: Value) {
        *self.get(root) = value;
    }
}

impl<Root, Value> Clone for KeyPath<Root, Value> {
    fn clone(&self) -> Self {
        KeyPath {
            name: self.name.clone(),
            project: self.project.clone(),
        }
    }
}

impl<Root, Value> fmt::Debug for KeyPath<Root, Value> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "KeyPath(\\.{})", self.name)
    }
}

/// Creates a [`KeyPath`] to a (possibly nested) field.
///
/// ```text
/// key_path!(ViewProps, frame)                // KeyPath<ViewProps, Rect>
/// key_path!(ViewProps, layer.corner_radius)  // KeyPath<ViewProps, f64>
/// ```
#[macro_export]
macro_rules! key_path {
    ($root:ty, $first:ident $(. $rest:ident)*) => {
        $crate::KeyPath::<$root, _>::field(
            concat!(stringify!($first) $(, ".", stringify!($rest))*),
            |root: &mut $root| &mut root.$first $(.$rest)*,
        )
    };
}

/// Key paths into [`ViewProps`](crate::ViewProps).
pub mod paths {
    use crate::color::Color;
    use crate::key_path::KeyPath;
    use crate::rect::Rect;
    use crate::view::ViewProps;

    pub fn frame() -> KeyPath<ViewProps, Rect> {
        key_path!(ViewProps, frame)
    }

    pub fn background() -> KeyPath<ViewProps, Color> {
        key_path!(ViewProps, background)
    }

    pub fn hidden() -> KeyPath<ViewProps, bool> {
        key_path!(ViewProps, hidden)
    }

    pub fn corner_radius() -> KeyPath<ViewProps, f64> {
        key_path!(ViewProps, layer.corner_radius)
    }

    pub fn border() -> KeyPath<ViewProps, Option<(f64, Color)>> {
        key_path!(ViewProps, layer.border)
    }

    pub fn clip_contents() -> KeyPath<ViewProps, bool> {
        key_path!(ViewProps, layer.clip_contents)
    }

    pub fn opacity() -> KeyPath<ViewProps, f64> {
        key_path!(ViewProps, layer.opacity)
    }
}
