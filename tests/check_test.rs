//! Integration tests for structural checks and StructureErrors.

use draftsman::{
    check_tree, CheckResult, NodePath, Schema, SchemaNode, StructureError, StructureErrors,
    TypeKind,
};
use stillwater::prelude::*;
use stillwater::Validation;

fn unwrap_failure(result: CheckResult) -> StructureErrors {
    match result {
        Validation::Failure(errors) => errors,
        Validation::Success(()) => panic!("expected structural errors"),
    }
}

#[test]
fn test_valid_tree_checks_clean() {
    let schema = Schema::object()
        .type_name("Invoice")
        .field("number", Schema::string())
        .field(
            "lines",
            Schema::array(
                Schema::object()
                    .field("amount", Schema::money().scale(2))
                    .field("quantity", Schema::decimal()),
            ),
        );

    assert!(check_tree(&schema).is_success());
    assert!(schema.check().is_success());
}

#[test]
fn test_errors_carry_paths() {
    let schema = Schema::object().field(
        "lines",
        Schema::array(Schema::object().field("tags", SchemaNode::new(TypeKind::Array))),
    );

    let errors = unwrap_failure(check_tree(&schema));
    let path = NodePath::root()
        .push_property("lines")
        .push_items()
        .push_property("tags");

    assert_eq!(errors.len(), 1);
    assert_eq!(errors.at_path(&path).len(), 1);
    assert_eq!(errors.first().code, "array_items");
}

#[test]
fn test_error_display() {
    let schema = Schema::string().scale(2);
    let errors = unwrap_failure(schema.check());

    assert_eq!(
        errors.first().to_string(),
        "(root): scale only applies to decimal kinds, not String"
    );
    assert!(errors
        .to_string()
        .starts_with("Schema tree has 1 structural error(s):"));
}

#[test]
fn test_duplicate_and_unnamed_properties() {
    let schema = Schema::object()
        .field("id", Schema::integer())
        .field("id", Schema::string())
        .child(Schema::boolean());

    let errors = unwrap_failure(check_tree(&schema));

    assert_eq!(errors.len(), 2);
    assert_eq!(errors.with_code("duplicate_property")[0].path.to_string(), "id");
    assert_eq!(errors.with_code("unnamed_property").len(), 1);
}

#[test]
fn test_errors_combine_via_semigroup() {
    let left = StructureErrors::single(StructureError::new(
        NodePath::root().push_property("a"),
        "first",
    ));
    let right = StructureErrors::single(
        StructureError::new(NodePath::root().push_property("b"), "second")
            .with_code("leaf_children"),
    );

    let combined = left.combine(right);

    assert_eq!(combined.len(), 2);
    assert!(!combined.is_empty());
    let messages: Vec<_> = combined.into_iter().map(|e| e.message).collect();
    assert_eq!(messages, vec!["first", "second"]);
}

#[test]
fn test_from_vec() {
    assert!(StructureErrors::from_vec(Vec::new()).is_none());

    let errors = StructureErrors::from_vec(vec![
        StructureError::new(NodePath::root(), "one"),
        StructureError::new(NodePath::root(), "two"),
    ])
    .unwrap();

    assert_eq!(errors.len(), 2);
    assert_eq!(errors.first().message, "one");
    assert_eq!(errors.into_vec().len(), 2);
}
