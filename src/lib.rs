//! # Draftsman
//!
//! Converts strongly-typed schema node trees into JSON Schema documents.
//!
//! ## Overview
//!
//! A schema is described as a tree of [`SchemaNode`]s: scalar fields, objects
//! and arrays, each carrying optional metadata, defaults and validation
//! [`Constraint`]s. A [`TypeDispatcher`] walks the tree, picks a converter for
//! every node's [`TypeKind`], folds constraint-derived keywords into each
//! fragment, and produces a draft-04 document (or a Swagger 2.0 schema object
//! with shared `definitions`).
//!
//! ## Core Types
//!
//! - [`Schema`]: factory for schema nodes
//! - [`TypeDispatcher`]: the conversion entry point
//! - [`KindConverter`] and [`ValidatorDispatcher`]: building blocks for custom
//!   converters
//! - [`ConvertError`]: the single conversion failure
//! - [`check_tree`]: opt-in structural check reporting every problem at once
//!
//! ## Example
//!
//! ```rust
//! use draftsman::{Constraint, Schema};
//! use serde_json::json;
//!
//! let schema = Schema::array(
//!     Schema::object()
//!         .field("name", Schema::string())
//!         .field("number", Schema::integer().validator(Constraint::min(1))),
//! );
//!
//! let converted = draftsman::convert(&schema).unwrap();
//!
//! assert_eq!(converted, json!({
//!     "$schema": "http://json-schema.org/draft-04/schema#",
//!     "type": "array",
//!     "items": {
//!         "type": "object",
//!         "properties": {
//!             "name": {"type": "string", "minLength": 1},
//!             "number": {"type": "integer", "minimum": 1}
//!         },
//!         "required": ["name", "number"]
//!     }
//! }));
//! ```

pub mod check;
pub mod convert;
pub mod error;
pub mod node;
pub mod path;

pub use check::check_tree;
pub use convert::{
    convert_enum, convert_range, convert_regex, finalize, from_fn, BaseKeywords, Conversion,
    ConverterTable, DecimalPattern, FixedFormat, FnConverter, Fragment, Items, Keywords,
    KindConverter, LengthConverter, OneOfConverter, Profile, Properties, RequiredMinLength,
    TypeConverter, TypeDispatcher, ValidatorConverter, ValidatorDispatcher, DRAFT4,
};
pub use error::{ConvertError, StructureError, StructureErrors};
pub use node::{Constraint, Schema, SchemaNode, TypeKind};
pub use path::{NodePath, PathSegment};

/// Type alias for structural check results.
pub type CheckResult = stillwater::Validation<(), StructureErrors>;

/// Converts a node tree with the default draft-04 dispatcher.
///
/// # Errors
///
/// Returns [`ConvertError::NoSuchConverter`] when a node's kind has no draft-04
/// converter (the decimal kinds need [`TypeDispatcher::draft4_decimal_string`]).
pub fn convert(root: &SchemaNode) -> Result<serde_json::Value, ConvertError> {
    TypeDispatcher::draft4().convert(root)
}
