//! Conversion failures.

use crate::node::TypeKind;
use crate::path::NodePath;

/// Errors raised while converting a node tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    /// A node's kind has no entry in the dispatcher's converter table.
    #[error("no converter registered for {kind} at {}", display_path(.path))]
    NoSuchConverter { kind: TypeKind, path: NodePath },
}

impl ConvertError {
    /// Returns the kind that could not be converted.
    pub fn kind(&self) -> TypeKind {
        match self {
            ConvertError::NoSuchConverter { kind, .. } => *kind,
        }
    }

    /// Returns the path of the node that failed.
    pub fn path(&self) -> &NodePath {
        match self {
            ConvertError::NoSuchConverter { path, .. } => path,
        }
    }
}

fn display_path(path: &NodePath) -> String {
    if path.is_root() {
        "(root)".to_string()
    } else {
        path.to_string()
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<ConvertError>();
    assert_sync::<ConvertError>();
};
