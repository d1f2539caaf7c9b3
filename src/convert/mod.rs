//! JSON Schema conversion.
//!
//! This module turns a [`SchemaNode`](crate::SchemaNode) tree into a JSON
//! Schema document. The pieces, from the leaves up:
//!
//! - validator converters map one [`Constraint`](crate::Constraint) to keywords
//! - a [`ValidatorDispatcher`] runs an ordered list of them over a node
//! - a [`KindConverter`] builds a node's fragment from ordered keyword steps
//! - the [`TypeDispatcher`] picks the converter for each node's kind, recurses
//!   into children, hoists definitions and stamps the dialect
//!
//! # Example
//!
//! ```rust
//! use draftsman::{Constraint, Schema, TypeDispatcher};
//! use serde_json::json;
//!
//! let schema = Schema::string()
//!     .optional()
//!     .validator(Constraint::one_of(["one", "two"]));
//!
//! let converted = TypeDispatcher::draft4().convert(&schema).unwrap();
//!
//! assert_eq!(converted["type"], json!(["string", "null"]));
//! assert_eq!(converted["enum"], json!(["one", "two", "", null]));
//! ```

mod context;
mod dispatcher;
mod finalize;
mod profile;
mod traits;
mod types;
mod validators;

use serde_json::{Map, Value};

pub use context::Conversion;
pub use dispatcher::TypeDispatcher;
pub use finalize::{finalize, DRAFT4};
pub use profile::{ConverterTable, Profile};
pub use traits::{from_fn, FnConverter, Keywords, TypeConverter, ValidatorConverter};
pub use types::{
    BaseKeywords, DecimalPattern, FixedFormat, Items, KindConverter, Properties, RequiredMinLength,
};
pub use validators::{
    convert_enum, convert_range, convert_regex, LengthConverter, OneOfConverter,
    ValidatorDispatcher,
};

/// A JSON Schema object, or part of one, under construction.
pub type Fragment = Map<String, Value>;
