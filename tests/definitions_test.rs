use draftsman::{Constraint, Schema, SchemaNode, TypeDispatcher};
use serde_json::json;

fn non_negative_int() -> SchemaNode {
    Schema::integer().validator(Constraint::min(0))
}

fn positive_int() -> SchemaNode {
    Schema::integer().validator(Constraint::min(1))
}

fn default_true_bool() -> SchemaNode {
    Schema::boolean().default(json!(true)).optional()
}

fn inner() -> SchemaNode {
    Schema::object()
        .type_name("Inner")
        .field("a", Schema::string())
}

fn some_class() -> SchemaNode {
    Schema::object()
        .type_name("SomeClass")
        .field("some_int", Schema::integer())
        .field("other_int", Schema::integer().optional())
        .field(
            "def_int",
            Schema::integer()
                .validator(Constraint::one_of([0, 1, 2]))
                .optional(),
        )
        .field("some_str", Schema::string())
        .field("other_str", Schema::string().optional())
        .field(
            "def_str",
            Schema::string()
                .validator(Constraint::one_of(["AAA", "BBB"]))
                .optional(),
        )
        .field("inner", inner().optional())
}

fn some_class_container() -> SchemaNode {
    Schema::object()
        .type_name("SomeClassContainer")
        .description("open-social's `collection` compatible")
        .field("startIndex", non_negative_int())
        .field("itemPerPage", positive_int())
        .field("totalResults", non_negative_int())
        .field("filtered", default_true_bool())
        .field("sorted", default_true_bool())
        .field("updatedSince", default_true_bool())
        .field("list", Schema::array(some_class()).type_name("SomeClassList"))
}

#[test]
fn test_swagger2_collection() {
    let converted = TypeDispatcher::swagger2()
        .convert(&some_class_container())
        .unwrap();

    assert_eq!(
        converted,
        json!({
            "$ref": "#/definitions/SomeClassContainer",
            "definitions": {
                "Inner": {
                    "type": "object",
                    "properties": {"a": {"type": "string"}},
                    "required": ["a"]
                },
                "SomeClass": {
                    "type": "object",
                    "properties": {
                        "def_int": {"type": "integer", "enum": [0, 1, 2]},
                        "def_str": {"type": "string", "enum": ["AAA", "BBB"]},
                        "inner": {"$ref": "#/definitions/Inner"},
                        "other_int": {"type": "integer"},
                        "other_str": {"type": "string"},
                        "some_int": {"type": "integer"},
                        "some_str": {"type": "string"}
                    },
                    "required": ["some_int", "some_str"]
                },
                "SomeClassContainer": {
                    "description": "open-social's `collection` compatible",
                    "type": "object",
                    "properties": {
                        "filtered": {"type": "boolean", "default": true},
                        "itemPerPage": {"type": "integer", "minimum": 1},
                        "sorted": {"type": "boolean", "default": true},
                        "startIndex": {"type": "integer", "minimum": 0},
                        "totalResults": {"type": "integer", "minimum": 0},
                        "updatedSince": {"type": "boolean", "default": true},
                        "list": {
                            "type": "array",
                            "items": {"$ref": "#/definitions/SomeClass"}
                        }
                    },
                    "required": ["startIndex", "itemPerPage", "totalResults", "list"]
                }
            }
        })
    );
}

#[test]
fn test_swagger2_definitions_follow_completion_order() {
    let converted = TypeDispatcher::swagger2()
        .convert(&some_class_container())
        .unwrap();

    let names: Vec<_> = converted["definitions"]
        .as_object()
        .unwrap()
        .keys()
        .cloned()
        .collect();
    assert_eq!(names, vec!["Inner", "SomeClass", "SomeClassContainer"]);
}

#[test]
fn test_repeated_type_is_defined_once() {
    let schema = Schema::object()
        .type_name("Pair")
        .field("left", inner())
        .field("right", inner());
    let converted = TypeDispatcher::swagger2().convert(&schema).unwrap();

    let definitions = converted["definitions"].as_object().unwrap();
    assert_eq!(definitions.len(), 2);
    assert_eq!(
        converted["definitions"]["Pair"]["properties"],
        json!({
            "left": {"$ref": "#/definitions/Inner"},
            "right": {"$ref": "#/definitions/Inner"}
        })
    );
}

#[test]
fn test_first_definition_wins() {
    let other_inner = Schema::object()
        .type_name("Inner")
        .field("b", Schema::integer());
    let schema = Schema::object()
        .type_name("Holder")
        .field("first", inner())
        .field("second", other_inner);
    let converted = TypeDispatcher::swagger2().convert(&schema).unwrap();

    assert_eq!(
        converted["definitions"]["Inner"]["properties"],
        json!({"a": {"type": "string"}})
    );
    assert_eq!(
        converted["definitions"]["Holder"]["properties"]["second"],
        json!({"$ref": "#/definitions/Inner"})
    );
}

#[test]
fn test_anonymous_objects_are_inlined() {
    let schema = Schema::object()
        .type_name("Outer")
        .field("point", Schema::object().field("x", Schema::number()));
    let converted = TypeDispatcher::swagger2().convert(&schema).unwrap();

    assert_eq!(converted["definitions"].as_object().unwrap().len(), 1);
    assert_eq!(
        converted["definitions"]["Outer"]["properties"]["point"],
        json!({
            "type": "object",
            "properties": {"x": {"type": "number"}},
            "required": ["x"]
        })
    );
}

#[test]
fn test_no_definitions_without_named_objects() {
    let schema = Schema::array(Schema::string());
    let converted = TypeDispatcher::swagger2().convert(&schema).unwrap();

    assert_eq!(converted, json!({"type": "array", "items": {"type": "string"}}));
}

#[test]
fn test_swagger2_drops_draft4_annotations() {
    let schema = Schema::string()
        .optional()
        .title("Name")
        .description("display name")
        .validator(Constraint::length(Some(2), Some(40)));
    let converted = TypeDispatcher::swagger2().convert(&schema).unwrap();

    assert_eq!(
        converted,
        json!({
            "type": "string",
            "description": "display name",
            "minLength": 2,
            "maxLength": 40
        })
    );
}

#[test]
fn test_swagger2_date_kinds_only_carry_format() {
    let schema = Schema::date_time().validator(Constraint::max_len(10));
    let converted = TypeDispatcher::swagger2().convert(&schema).unwrap();

    assert_eq!(converted, json!({"type": "string", "format": "date-time"}));
}

#[test]
fn test_draft4_with_definitions() {
    let schema = Schema::object()
        .type_name("Order")
        .field("lines", Schema::array(inner()));
    let converted = TypeDispatcher::draft4()
        .with_definitions(true)
        .convert(&schema)
        .unwrap();

    assert_eq!(
        converted,
        json!({
            "$schema": "http://json-schema.org/draft-04/schema#",
            "$ref": "#/definitions/Order",
            "definitions": {
                "Inner": {
                    "type": "object",
                    "properties": {"a": {"type": "string", "minLength": 1}},
                    "required": ["a"]
                },
                "Order": {
                    "type": "object",
                    "properties": {
                        "lines": {
                            "type": "array",
                            "items": {"$ref": "#/definitions/Inner"}
                        }
                    },
                    "required": ["lines"]
                }
            }
        })
    );
}

#[test]
fn test_extraction_can_be_disabled() {
    let converted = TypeDispatcher::swagger2()
        .with_definitions(false)
        .convert(&Schema::object().type_name("Inner").field("a", Schema::string()))
        .unwrap();

    assert!(converted.get("definitions").is_none());
    assert_eq!(converted["type"], "object");
}

#[test]
fn test_type_names_are_pointer_escaped() {
    let schema = Schema::object()
        .type_name("pkg/Model~v2")
        .field("a", Schema::string());
    let converted = TypeDispatcher::swagger2().convert(&schema).unwrap();

    assert_eq!(converted["$ref"], "#/definitions/pkg~1Model~0v2");
    assert!(converted["definitions"].get("pkg/Model~v2").is_some());
}
