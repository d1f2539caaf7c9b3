//! Integration tests for NodePath.

use draftsman::{NodePath, PathSegment};

#[test]
fn test_path_construction_and_display() {
    assert_eq!(NodePath::root().to_string(), "");
    assert_eq!(NodePath::root().push_property("name").to_string(), "name");
    assert_eq!(NodePath::root().push_items().to_string(), "[]");

    let path = NodePath::root()
        .push_property("orders")
        .push_items()
        .push_property("lines")
        .push_items()
        .push_property("sku");
    assert_eq!(path.to_string(), "orders[].lines[].sku");
}

#[test]
fn test_path_segments_preserved() {
    let path = NodePath::root()
        .push_property("data")
        .push_items()
        .push(PathSegment::property("value"));

    let segments: Vec<&PathSegment> = path.segments().collect();
    assert_eq!(segments.len(), 3);

    match &segments[0] {
        PathSegment::Property(name) => assert_eq!(name, "data"),
        _ => panic!("Expected Property segment"),
    }
    assert_eq!(segments[1], &PathSegment::Items);
    assert_eq!(path.last(), Some(&PathSegment::Property("value".to_string())));
}

#[test]
fn test_path_is_immutable() {
    let base = NodePath::root().push_property("items");

    let element = base.push_items();
    let sibling = base.push_property("count");

    assert_eq!(base.to_string(), "items");
    assert_eq!(element.to_string(), "items[]");
    assert_eq!(sibling.to_string(), "items.count");
}

#[test]
fn test_path_equality() {
    let path1 = NodePath::root().push_property("a").push_items();
    let path2 = NodePath::root().push_property("a").push_items();
    let path3 = NodePath::root().push_property("a");
    let path4 = NodePath::root().push_property("b").push_items();

    assert_eq!(path1, path2);
    assert_ne!(path1, path3);
    assert_ne!(path1, path4);
}

#[test]
fn test_root_path_properties() {
    let root = NodePath::root();

    assert!(root.is_root());
    assert!(root.is_empty());
    assert_eq!(root.len(), 0);
    assert_eq!(root.last(), None);
    assert_eq!(root, NodePath::default());
}
