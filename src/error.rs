//! Composition errors.

use crate::view::ViewId;
use core::fmt;
use thiserror::Error;

/// Which side of an attachment was absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Missing {
    Parent,
    Child,
}

impl fmt::Display for Missing {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Missing::Parent => write!(f, "parent"),
            Missing::Child => write!(f, "child"),
        }
    }
}

/// Errors that may occur while composing a view tree.
///
/// The fluent builder methods treat every one of these as fatal; the `try_` variants return them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BuildError {
    /// An `add` operation was given an absent view.
    #[error("{missing} view is nil")]
    MissingParentOrChild { missing: Missing },

    /// The child is the parent itself or one of its ancestors.
    #[error("adding {child:?} to {parent:?} would create a cycle")]
    WouldCycle { parent: ViewId, child: ViewId },

    /// A shared instance was requested while it was being built on the same thread.
    #[error("{kind} was accessed while it was being built")]
    ReentrantBuild { kind: &'static str },

    /// View trees cannot be restored from archived state.
    #[error("decoding views from an archive has not been implemented")]
    UnimplementedDecoding,
}

impl BuildError {
    pub(crate) fn missing(missing: Missing) -> BuildError {
        BuildError::MissingParentOrChild { missing }
    }
}

/// Aborts composition with the given error.
#[track_caller]
pub(crate) fn fatal(err: BuildError) -> ! {
    tracing::error!(%err, "composition aborted");
    panic!("{}", err)
}
