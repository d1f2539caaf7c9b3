//! The type dispatcher: the entry point of a conversion.
//!
//! [`TypeDispatcher`] looks up each node's kind in its converter table,
//! recursively converts the tree, optionally hoists object types into
//! `definitions`, and stamps the dialect on the result.

use std::sync::Arc;

use rayon::prelude::*;
use serde_json::{json, Value};
use tracing::{debug, trace};

use crate::error::ConvertError;
use crate::node::{SchemaNode, TypeKind};

use super::context::Conversion;
use super::finalize::finalize;
use super::profile::{ConverterTable, Profile};
use super::traits::TypeConverter;
use super::Fragment;

/// Converts schema node trees into JSON Schema documents.
///
/// A dispatcher is immutable once built and keeps no state between calls:
/// every [`convert`](Self::convert) creates its own definition cache, so one
/// dispatcher can be shared freely across threads.
///
/// # Configuration
///
/// - the [`Profile`] chosen at construction supplies the default converter
///   table, the dialect and the default extraction mode
/// - [`with_converter`](Self::with_converter) replaces the entry for one kind
/// - [`with_definitions`](Self::with_definitions) toggles definition
///   extraction
/// - [`with_dialect`](Self::with_dialect) changes or removes the `$schema`
///   stamp
///
/// # Example
///
/// ```rust
/// use draftsman::{Schema, TypeDispatcher};
/// use serde_json::json;
///
/// let inner = Schema::object()
///     .type_name("Inner")
///     .field("a", Schema::string());
///
/// let schema = Schema::object()
///     .type_name("Outer")
///     .field("first", inner.clone())
///     .field("second", inner);
///
/// let converted = TypeDispatcher::draft4()
///     .with_definitions(true)
///     .convert(&schema)
///     .unwrap();
///
/// assert_eq!(converted["$ref"], "#/definitions/Outer");
/// assert_eq!(
///     converted["definitions"]["Outer"]["properties"]["second"],
///     json!({"$ref": "#/definitions/Inner"})
/// );
/// ```
#[derive(Clone)]
pub struct TypeDispatcher {
    converters: ConverterTable,
    extract_definitions: bool,
    dialect: Option<&'static str>,
}

impl TypeDispatcher {
    /// Creates a dispatcher from a profile's defaults.
    pub fn new(profile: Profile) -> Self {
        Self {
            converters: profile.converters().clone(),
            extract_definitions: profile.extracts_definitions(),
            dialect: profile.dialect(),
        }
    }

    /// Draft-04 output, objects inlined.
    pub fn draft4() -> Self {
        Self::new(Profile::Draft4)
    }

    /// Draft-04 output with decimal kinds rendered as numeric strings.
    pub fn draft4_decimal_string() -> Self {
        Self::new(Profile::Draft4DecimalString)
    }

    /// Swagger 2.0 schema objects with object types hoisted into
    /// `definitions`.
    pub fn swagger2() -> Self {
        Self::new(Profile::Swagger2)
    }

    /// Creates a dispatcher from a profile's defaults with some entries
    /// replaced. Kinds absent from `overrides` keep their default converter.
    pub fn with_overrides<I>(profile: Profile, overrides: I) -> Self
    where
        I: IntoIterator<Item = (TypeKind, Arc<dyn TypeConverter>)>,
    {
        let mut dispatcher = Self::new(profile);
        dispatcher.converters.extend(overrides);
        dispatcher
    }

    /// Replaces the converter for `kind`.
    pub fn with_converter<C>(mut self, kind: TypeKind, converter: C) -> Self
    where
        C: TypeConverter + 'static,
    {
        self.converters.insert(kind, Arc::new(converter));
        self
    }

    /// Enables or disables definition extraction.
    ///
    /// When enabled, every object node with a declared type name is converted
    /// once, stored under that name in `definitions`, and referenced with
    /// `$ref` wherever it appears. Anonymous objects are still inlined.
    pub fn with_definitions(mut self, enabled: bool) -> Self {
        self.extract_definitions = enabled;
        self
    }

    /// Sets the `$schema` stamped on results; `None` leaves it out.
    pub fn with_dialect(mut self, dialect: Option<&'static str>) -> Self {
        self.dialect = dialect;
        self
    }

    /// Returns the converter registered for `kind`.
    pub fn converter(&self, kind: TypeKind) -> Option<&Arc<dyn TypeConverter>> {
        self.converters.get(&kind)
    }

    pub fn extracts_definitions(&self) -> bool {
        self.extract_definitions
    }

    pub fn dialect(&self) -> Option<&'static str> {
        self.dialect
    }

    /// Converts a node tree into a JSON Schema document.
    ///
    /// Returns `Value::Null` when the root converter produces no result.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::NoSuchConverter`] when any node's kind has no
    /// registered converter.
    ///
    /// # Example
    ///
    /// ```rust
    /// use draftsman::{Schema, TypeDispatcher};
    /// use serde_json::json;
    ///
    /// let converted = TypeDispatcher::draft4().convert(&Schema::string()).unwrap();
    ///
    /// assert_eq!(converted, json!({
    ///     "$schema": "http://json-schema.org/draft-04/schema#",
    ///     "type": "string",
    ///     "minLength": 1
    /// }));
    /// ```
    pub fn convert(&self, root: &SchemaNode) -> Result<Value, ConvertError> {
        let mut cx = Conversion::new(self);
        let Some(mut document) = cx.resolve_here(root)? else {
            return Ok(Value::Null);
        };

        let definitions = cx.into_definitions();
        if !definitions.is_empty() {
            document.insert("definitions".to_string(), Value::Object(definitions));
        }
        if let Some(dialect) = self.dialect {
            document = finalize(document, dialect);
        }
        Ok(Value::Object(document))
    }

    /// Converts independent roots in parallel, one result per root in input
    /// order.
    pub fn convert_many(&self, roots: &[SchemaNode]) -> Vec<Result<Value, ConvertError>> {
        roots.par_iter().map(|root| self.convert(root)).collect()
    }

    /// Resolves one node, hoisting named objects into the definition cache
    /// when extraction is enabled.
    pub(crate) fn resolve(
        &self,
        node: &SchemaNode,
        cx: &mut Conversion<'_>,
    ) -> Result<Option<Fragment>, ConvertError> {
        if !(self.extract_definitions && node.kind().is_object()) {
            return self.convert_node(node, cx);
        }
        let Some(type_name) = node.declared_type_name() else {
            return self.convert_node(node, cx);
        };

        if !cx.is_defined(type_name) {
            let converted = self.convert_node(node, cx)?;
            debug!(type_name, path = %cx.path(), "caching definition");
            cx.define(type_name, converted);
        }
        if cx.definition(type_name).is_none() {
            return Ok(None);
        }

        trace!(type_name, path = %cx.path(), "emitting $ref");
        let mut reference = Fragment::new();
        reference.insert("$ref".to_string(), json!(definition_ref(type_name)));
        Ok(Some(reference))
    }

    fn convert_node(
        &self,
        node: &SchemaNode,
        cx: &mut Conversion<'_>,
    ) -> Result<Option<Fragment>, ConvertError> {
        let Some(converter) = self.converters.get(&node.kind()) else {
            debug!(kind = %node.kind(), path = %cx.path(), "no converter registered");
            return Err(ConvertError::NoSuchConverter {
                kind: node.kind(),
                path: cx.path().clone(),
            });
        };
        // An empty fragment counts as no result.
        Ok(converter
            .convert(node, cx)?
            .filter(|fragment| !fragment.is_empty()))
    }
}

impl Default for TypeDispatcher {
    fn default() -> Self {
        Self::new(Profile::default())
    }
}

/// Builds the `$ref` target for a definition, escaping the name as a JSON
/// Pointer token.
fn definition_ref(type_name: &str) -> String {
    format!(
        "#/definitions/{}",
        type_name.replace('~', "~0").replace('/', "~1")
    )
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<TypeDispatcher>();
    assert_sync::<TypeDispatcher>();
};
