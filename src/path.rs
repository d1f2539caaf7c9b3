//! Paths locating nodes inside a schema tree.
//!
//! This module provides [`NodePath`] and [`PathSegment`] for describing where a
//! node sits relative to the root it was reached from, e.g. `list[].inner.a`.

use std::fmt::{self, Display};

/// A segment of a node path.
///
/// Object nodes are entered through a named property, array nodes through
/// their single item schema.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// A property of an object node (e.g., `user`, `email`)
    Property(String),
    /// The item schema of an array node, rendered as `[]`
    Items,
}

impl PathSegment {
    /// Creates a new property segment.
    pub fn property(name: impl Into<String>) -> Self {
        PathSegment::Property(name.into())
    }
}

/// A path to a node in a schema tree.
///
/// `NodePath` represents locations like `users[].email` and provides
/// methods for building paths incrementally.
///
/// # Example
///
/// ```rust
/// use draftsman::NodePath;
///
/// let path = NodePath::root()
///     .push_property("users")
///     .push_items()
///     .push_property("email");
///
/// assert_eq!(path.to_string(), "users[].email");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct NodePath {
    segments: Vec<PathSegment>,
}

impl NodePath {
    /// Creates an empty path representing the root node.
    pub fn root() -> Self {
        Self::default()
    }

    /// Returns a new path with `segment` appended.
    ///
    /// This method leaves `self` untouched and returns a new path.
    pub fn push(&self, segment: PathSegment) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment);
        Self { segments }
    }

    /// Returns a new path with a property segment appended.
    pub fn push_property(&self, name: impl Into<String>) -> Self {
        self.push(PathSegment::Property(name.into()))
    }

    /// Returns a new path with an item segment appended.
    pub fn push_items(&self) -> Self {
        self.push(PathSegment::Items)
    }

    /// Returns true if this is the root path (no segments).
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the number of segments in this path.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if this path has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns an iterator over the path segments.
    pub fn segments(&self) -> impl Iterator<Item = &PathSegment> {
        self.segments.iter()
    }

    /// Returns the last segment, or None if this is root.
    pub fn last(&self) -> Option<&PathSegment> {
        self.segments.last()
    }
}

impl Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Property(name) => {
                    if i > 0 {
                        write!(f, ".")?;
                    }
                    write!(f, "{}", name)?;
                }
                PathSegment::Items => write!(f, "[]")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_path_is_empty() {
        let path = NodePath::root();
        assert!(path.is_root());
        assert!(path.is_empty());
        assert_eq!(path.len(), 0);
        assert_eq!(path.to_string(), "");
    }

    #[test]
    fn test_single_property() {
        let path = NodePath::root().push_property("user");
        assert_eq!(path.to_string(), "user");
        assert_eq!(path.len(), 1);
    }

    #[test]
    fn test_root_items() {
        let path = NodePath::root().push_items();
        assert_eq!(path.to_string(), "[]");
    }

    #[test]
    fn test_items_then_property() {
        let path = NodePath::root()
            .push_property("list")
            .push_items()
            .push_property("inner")
            .push_property("a");
        assert_eq!(path.to_string(), "list[].inner.a");
    }

    #[test]
    fn test_nested_arrays() {
        let path = NodePath::root()
            .push_property("matrix")
            .push_items()
            .push_items();
        assert_eq!(path.to_string(), "matrix[][]");
    }

    #[test]
    fn test_path_immutability() {
        let base = NodePath::root().push_property("users");
        let items = base.push_items();

        assert_eq!(base.to_string(), "users");
        assert_eq!(items.to_string(), "users[]");
    }

    #[test]
    fn test_last_segment() {
        let path = NodePath::root().push_property("users").push_items();
        assert_eq!(path.last(), Some(&PathSegment::Items));
        assert_eq!(NodePath::root().last(), None);
    }

    #[test]
    fn test_segments_iterator() {
        let path = NodePath::root()
            .push_property("a")
            .push_items()
            .push(PathSegment::property("b"));

        let segments: Vec<_> = path.segments().collect();
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0], &PathSegment::Property("a".to_string()));
        assert_eq!(segments[1], &PathSegment::Items);
        assert_eq!(segments[2], &PathSegment::Property("b".to_string()));
    }

    #[test]
    fn test_equality() {
        let path1 = NodePath::root().push_property("a").push_items();
        let path2 = NodePath::root().push_property("a").push_items();
        let path3 = NodePath::root().push_property("b").push_items();

        assert_eq!(path1, path2);
        assert_ne!(path1, path3);
    }
}
