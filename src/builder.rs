//! Builder capabilities.
//!
//! Every method here takes the receiver by value and hands it back with its concrete type, so a
//! chain like `View::new().with(..).add_child(..).add_to(..)` keeps access to everything `View`
//! can do at every step.

use crate::error::{fatal, BuildError, Missing};
use crate::key_path::KeyPath;
use crate::view::{AnyView, AsView, OptionalView, ViewProps};
use tracing::trace;

/// Types whose fields can be assigned through a [`KeyPath`].
pub trait Settable: Sized {
    /// The record that key paths for this type start from.
    type Root;

    /// Runs `f` with exclusive access to the root record.
    fn modify<R>(&self, f: impl FnOnce(&mut Self::Root) -> R) -> R;

    /// Assigns `value` to the field referenced by `path`.
    fn with<V>(self, path: KeyPath<Self::Root, V>, value: V) -> Self {
        trace!(path = path.name(), "set");
        self.modify(|root| path.set(root, value));
        self
    }
}

impl Settable for AnyView {
    type Root = ViewProps;

    fn modify<R>(&self, f: impl FnOnce(&mut ViewProps) -> R) -> R {
        self.update_props(f)
    }
}

/// Views that can insert themselves into a parent.
pub trait Attachable: AsView + Sized {
    /// Appends this view to `parent`’s subviews.
    ///
    /// # Panics
    /// If `parent` is absent, or if it is this view or one of its descendants.
    #[track_caller]
    fn add_to(self, parent: impl OptionalView) -> Self {
        match self.try_add_to(parent) {
            Ok(this) => this,
            Err(err) => fatal(err),
        }
    }

    /// Fallible form of [`add_to`](Attachable::add_to).
    fn try_add_to(self, parent: impl OptionalView) -> Result<Self, BuildError> {
        let parent = parent
            .into_view()
            .ok_or_else(|| BuildError::missing(Missing::Parent))?;
        parent.add_subview(self.as_view())?;
        Ok(self)
    }
}

impl Attachable for AnyView {}

/// Views that accept subviews.
pub trait Composite: AsView + Sized {
    /// Appends `child` to this view’s subviews.
    ///
    /// # Panics
    /// If `child` is absent, or if it is this view or one of its ancestors.
    #[track_caller]
    fn add_child(self, child: impl OptionalView) -> Self {
        match self.try_add_child(child) {
            Ok(this) => this,
            Err(err) => fatal(err),
        }
    }

    /// Appends every child, in order.
    ///
    /// # Panics
    /// Under the same conditions as [`add_child`](Composite::add_child); nothing is attached if any
    /// child fails.
    #[track_caller]
    fn add_children<I>(self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: OptionalView,
    {
        match self.try_add_children(children) {
            Ok(this) => this,
            Err(err) => fatal(err),
        }
    }

    /// Fallible form of [`add_child`](Composite::add_child).
    fn try_add_child(self, child: impl OptionalView) -> Result<Self, BuildError> {
        let child = child
            .into_view()
            .ok_or_else(|| BuildError::missing(Missing::Child))?;
        self.as_view().add_subview(&child)?;
        Ok(self)
    }

    /// Fallible form of [`add_children`](Composite::add_children).
    ///
    /// Every child is resolved and checked before the first one is attached, so an error leaves
    /// the tree untouched.
    fn try_add_children<I>(self, children: I) -> Result<Self, BuildError>
    where
        I: IntoIterator,
        I::Item: OptionalView,
    {
        let children = children
            .into_iter()
            .map(|child| -> Result<AnyView, BuildError> {
                let child = child
                    .into_view()
                    .ok_or_else(|| BuildError::missing(Missing::Child))?;
                self.as_view().check_subview(&child)?;
                Ok(child)
            })
            .collect::<Result<Vec<_>, BuildError>>()?;

        for child in &children {
            self.as_view().add_subview(child)?;
        }
        Ok(self)
    }
}

impl Composite for AnyView {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::key_path::paths;
    use crate::rect::Rect;

    fn view() -> AnyView {
        AnyView::new("Test", Rect::zero())
    }

    #[test]
    fn with_sets_the_field_and_returns_the_receiver() {
        let target = view();
        let returned = target
            .clone()
            .with(paths::background(), Color::RED)
            .with(paths::corner_radius(), 16.);
        assert!(returned.ptr_eq(&target));
        assert_eq!(target.background(), Color::RED);
        assert_eq!(target.props().layer.corner_radius, 16.);
    }

    #[test]
    fn try_add_to_reports_a_missing_parent() {
        let err = view().try_add_to(None::<AnyView>).unwrap_err();
        assert_eq!(err, BuildError::missing(Missing::Parent));
        assert_eq!(err.to_string(), "parent view is nil");
    }

    #[test]
    #[should_panic(expected = "child view is nil")]
    fn add_child_aborts_on_a_missing_child() {
        view().add_child(None::<&AnyView>);
    }

    #[test]
    fn failed_add_children_attaches_nothing() {
        let parent = view();
        let children = vec![Some(view()), None, Some(view())];
        let err = parent.clone().try_add_children(children).unwrap_err();
        assert_eq!(err, BuildError::missing(Missing::Child));
        assert!(parent.subviews().is_empty());
    }

    #[test]
    fn add_children_rejects_an_ancestor_before_attaching() {
        let root = view();
        let child = view().add_to(&root);
        let sibling = view();

        let err = child
            .clone()
            .try_add_children(vec![sibling.clone(), root.clone()])
            .unwrap_err();
        assert!(matches!(err, BuildError::WouldCycle { .. }));
        assert!(sibling.superview().is_none());
        assert!(child.subviews().is_empty());
    }

    #[test]
    #[should_panic(expected = "would create a cycle")]
    fn add_to_a_descendant_aborts() {
        let root = view();
        let child = view().add_to(&root);
        root.add_to(&child);
    }

    #[test]
    #[should_panic(expected = "would create a cycle")]
    fn add_child_of_an_ancestor_aborts() {
        let root = view();
        let child = view().add_to(&root);
        let grandchild = view().add_to(&child);
        grandchild.add_child(&root);
    }
}
