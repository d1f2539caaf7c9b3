//! Schema node trees.
//!
//! This module provides the typed input of the conversion engine: the closed
//! [`TypeKind`] enumeration, [`Constraint`] rules, and [`SchemaNode`] trees
//! built through the [`Schema`] factory.
//!
//! # Example
//!
//! ```rust
//! use draftsman::{Constraint, Schema, TypeKind};
//!
//! let tags = Schema::array(Schema::string().validator(Constraint::max_len(16)))
//!     .validator(Constraint::length(None, Some(10)));
//!
//! assert_eq!(tags.kind(), TypeKind::Array);
//! assert_eq!(tags.items().map(|item| item.kind()), Some(TypeKind::String));
//! ```

mod constraint;
mod kind;
mod schema_node;

pub use constraint::Constraint;
pub use kind::TypeKind;
pub use schema_node::SchemaNode;

/// Entry point for building schema nodes.
///
/// Every factory returns a required, unnamed node; use the builder methods on
/// [`SchemaNode`] to add names, metadata, defaults and constraints.
///
/// # Example
///
/// ```rust
/// use draftsman::Schema;
/// use serde_json::json;
///
/// let schema = Schema::object()
///     .field("title", Schema::string().title("name of object"))
///     .field("canPublish", Schema::boolean().default(json!(false)));
///
/// assert_eq!(schema.children().len(), 2);
/// ```
pub struct Schema;

impl Schema {
    pub fn boolean() -> SchemaNode {
        SchemaNode::new(TypeKind::Boolean)
    }

    pub fn string() -> SchemaNode {
        SchemaNode::new(TypeKind::String)
    }

    /// Creates a calendar date node, rendered as a string with `format: date`.
    pub fn date() -> SchemaNode {
        SchemaNode::new(TypeKind::Date)
    }

    /// Creates a timestamp node, rendered as a string with `format: date-time`.
    pub fn date_time() -> SchemaNode {
        SchemaNode::new(TypeKind::DateTime)
    }

    /// Creates a time-of-day node, rendered as a string with `format: time`.
    pub fn time() -> SchemaNode {
        SchemaNode::new(TypeKind::Time)
    }

    pub fn number() -> SchemaNode {
        SchemaNode::new(TypeKind::Number)
    }

    pub fn integer() -> SchemaNode {
        SchemaNode::new(TypeKind::Integer)
    }

    /// Creates a decimal node, rendered as a numeric string by the
    /// decimal-string profile.
    pub fn decimal() -> SchemaNode {
        SchemaNode::new(TypeKind::Decimal)
    }

    /// Creates a money node: a decimal with two decimal places unless
    /// [`SchemaNode::scale`] says otherwise.
    pub fn money() -> SchemaNode {
        SchemaNode::new(TypeKind::Money)
    }

    /// Creates an object node with no properties.
    pub fn object() -> SchemaNode {
        SchemaNode::new(TypeKind::Object)
    }

    /// Creates an array node whose items are described by `item`.
    pub fn array(item: SchemaNode) -> SchemaNode {
        SchemaNode::new(TypeKind::Array).child(item)
    }
}
