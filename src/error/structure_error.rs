//! Structural problems found in a schema node tree.
//!
//! This module provides [`StructureError`] for a single malformed node and
//! [`StructureErrors`] for accumulating every problem found in one pass.

use std::fmt::{self, Display};

use stillwater::prelude::*;

use crate::path::NodePath;

/// A single structural problem with its location.
///
/// # Example
///
/// ```rust
/// use draftsman::{NodePath, StructureError};
///
/// let error = StructureError::new(
///     NodePath::root().push_property("tags"),
///     "array must have exactly one item schema",
/// )
/// .with_code("array_items");
///
/// assert_eq!(error.code, "array_items");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StructureError {
    /// The path to the offending node.
    pub path: NodePath,
    /// Human-readable description of the problem.
    pub message: String,
    /// Machine-readable error code (e.g., `duplicate_property`).
    pub code: String,
}

impl StructureError {
    /// Creates a new error; the code defaults to "structure_error".
    pub fn new(path: NodePath, message: impl Into<String>) -> Self {
        Self {
            path,
            message: message.into(),
            code: "structure_error".to_string(),
        }
    }

    /// Sets the error code and returns self for chaining.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }
}

impl Display for StructureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path_str = if self.path.is_root() {
            "(root)".to_string()
        } else {
            self.path.to_string()
        };

        write!(f, "{}: {}", path_str, self.message)
    }
}

impl std::error::Error for StructureError {}

/// A non-empty collection of structural errors.
///
/// `StructureErrors` implements `Semigroup`, so the results of checking
/// sibling nodes can be combined:
///
/// ```rust
/// use draftsman::{NodePath, StructureError, StructureErrors};
/// use stillwater::prelude::*;
///
/// let left = StructureErrors::single(StructureError::new(NodePath::root(), "a"));
/// let right = StructureErrors::single(StructureError::new(NodePath::root(), "b"));
///
/// assert_eq!(left.combine(right).len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StructureErrors(NonEmptyVec<StructureError>);

impl StructureErrors {
    /// Creates a collection containing a single error.
    pub fn single(error: StructureError) -> Self {
        Self(NonEmptyVec::singleton(error))
    }

    /// Creates a collection from a vec, or `None` if the vec is empty.
    pub fn from_vec(errors: Vec<StructureError>) -> Option<Self> {
        let mut errors = errors.into_iter();
        let head = Self::single(errors.next()?);
        Some(errors.fold(head, |acc, error| acc.combine(Self::single(error))))
    }

    /// Returns the number of errors in this collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; the collection is never empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns an iterator over the contained errors.
    pub fn iter(&self) -> impl Iterator<Item = &StructureError> {
        self.0.iter()
    }

    /// Returns all errors at the specified path.
    pub fn at_path(&self, path: &NodePath) -> Vec<&StructureError> {
        self.0.iter().filter(|e| &e.path == path).collect()
    }

    /// Returns all errors with the specified code.
    pub fn with_code(&self, code: &str) -> Vec<&StructureError> {
        self.0.iter().filter(|e| e.code == code).collect()
    }

    /// Returns the first error in the collection.
    pub fn first(&self) -> &StructureError {
        self.0.head()
    }

    /// Converts this collection into a `Vec<StructureError>`.
    pub fn into_vec(self) -> Vec<StructureError> {
        self.0.into_vec()
    }
}

impl Semigroup for StructureErrors {
    fn combine(self, other: Self) -> Self {
        StructureErrors(self.0.combine(other.0))
    }
}

impl Display for StructureErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Schema tree has {} structural error(s):", self.len())?;
        for (i, error) in self.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for StructureErrors {}

impl IntoIterator for StructureErrors {
    type Item = StructureError;
    type IntoIter = std::vec::IntoIter<StructureError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_vec().into_iter()
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<StructureErrors>();
    assert_sync::<StructureErrors>();
};
