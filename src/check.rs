//! Structural checks for schema node trees.
//!
//! Conversion assumes a well-formed tree and never calls these checks itself.
//! Callers that build trees from untrusted declarations can run
//! [`check_tree`] first; it walks the whole tree and reports every problem
//! instead of stopping at the first.

use std::collections::HashSet;

use stillwater::Validation;

use crate::error::{StructureError, StructureErrors};
use crate::node::SchemaNode;
use crate::path::NodePath;
use crate::CheckResult;

/// Checks that a tree has the shape the converters expect.
///
/// Reported codes:
/// - `array_items`: an array node without exactly one child
/// - `unnamed_property`: an object child with an empty name
/// - `duplicate_property`: two object children with the same name
/// - `leaf_children`: a leaf node with children
/// - `scale_not_applicable`: a scale on a non-decimal node
///
/// # Example
///
/// ```rust
/// use draftsman::{check_tree, Schema};
///
/// let schema = Schema::object()
///     .field("id", Schema::integer())
///     .field("id", Schema::string());
///
/// let result = check_tree(&schema);
/// assert!(result.is_failure());
/// ```
pub fn check_tree(root: &SchemaNode) -> CheckResult {
    let mut errors = Vec::new();
    check_node(root, &NodePath::root(), &mut errors);

    match StructureErrors::from_vec(errors) {
        Some(errors) => Validation::Failure(errors),
        None => Validation::Success(()),
    }
}

impl SchemaNode {
    /// Runs [`check_tree`] on this node.
    pub fn check(&self) -> CheckResult {
        check_tree(self)
    }
}

fn check_node(node: &SchemaNode, path: &NodePath, errors: &mut Vec<StructureError>) {
    let kind = node.kind();

    if kind.is_array() {
        let count = node.children().len();
        if count != 1 {
            errors.push(
                StructureError::new(
                    path.clone(),
                    format!("array must have exactly one item schema, got {}", count),
                )
                .with_code("array_items"),
            );
        }
        if let Some(item) = node.items() {
            check_node(item, &path.push_items(), errors);
        }
    } else if kind.is_object() {
        let mut seen = HashSet::new();
        for child in node.children() {
            let child_path = path.push_property(child.name());
            if child.name().is_empty() {
                errors.push(
                    StructureError::new(child_path.clone(), "object property has no name")
                        .with_code("unnamed_property"),
                );
            } else if !seen.insert(child.name()) {
                errors.push(
                    StructureError::new(
                        child_path.clone(),
                        format!("property '{}' is declared more than once", child.name()),
                    )
                    .with_code("duplicate_property"),
                );
            }
            check_node(child, &child_path, errors);
        }
    } else if !node.children().is_empty() {
        errors.push(
            StructureError::new(
                path.clone(),
                format!("{} node must not have children", kind),
            )
            .with_code("leaf_children"),
        );
    }

    if node.decimal_places().is_some() && !kind.is_decimal() {
        errors.push(
            StructureError::new(
                path.clone(),
                format!("scale only applies to decimal kinds, not {}", kind),
            )
            .with_code("scale_not_applicable"),
        );
    }
}
