//! Type converters composed from ordered keyword steps.
//!
//! A [`KindConverter`] starts every fragment with `type` and then runs its
//! [`Keywords`] steps in the order they were added. The default tables build
//! each kind from the same handful of steps:
//!
//! | kind              | steps                                                           |
//! |-------------------|-----------------------------------------------------------------|
//! | boolean           | base                                                            |
//! | string            | base, required min length, validators                           |
//! | date / time kinds | base, required min length, validators, fixed format             |
//! | number / integer  | base, validators                                                |
//! | decimal / money   | base, required min length, decimal pattern, validators          |
//! | object            | base, properties                                                |
//! | array             | base, validators, items                                         |

use serde_json::{json, Value};
use tracing::trace;

use crate::error::ConvertError;
use crate::node::SchemaNode;
use crate::path::PathSegment;

use super::context::Conversion;
use super::traits::{Keywords, TypeConverter};
use super::Fragment;

/// A type converter built from a primitive type name and ordered steps.
///
/// # Example
///
/// ```rust
/// use draftsman::{BaseKeywords, FixedFormat, KindConverter, Schema, TypeDispatcher, TypeKind};
///
/// let uuid = KindConverter::new("string")
///     .with(BaseKeywords::draft4())
///     .with(FixedFormat("uuid"));
///
/// let dispatcher = TypeDispatcher::draft4().with_converter(TypeKind::String, uuid);
/// let converted = dispatcher.convert(&Schema::string().optional()).unwrap();
///
/// assert_eq!(converted["format"], "uuid");
/// assert_eq!(converted["type"], serde_json::json!(["string", "null"]));
/// ```
pub struct KindConverter {
    type_name: &'static str,
    steps: Vec<Box<dyn Keywords>>,
}

impl KindConverter {
    /// Creates a converter emitting only `{"type": type_name}`.
    pub fn new(type_name: &'static str) -> Self {
        Self {
            type_name,
            steps: Vec::new(),
        }
    }

    /// Appends a step; steps run in the order added.
    pub fn with<K>(mut self, step: K) -> Self
    where
        K: Keywords + 'static,
    {
        self.steps.push(Box::new(step));
        self
    }

    /// Returns the JSON Schema primitive type name.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl TypeConverter for KindConverter {
    fn convert(
        &self,
        node: &SchemaNode,
        cx: &mut Conversion<'_>,
    ) -> Result<Option<Fragment>, ConvertError> {
        let mut fragment = Fragment::new();
        fragment.insert("type".to_string(), json!(self.type_name));
        for step in &self.steps {
            step.apply(node, &mut fragment, cx)?;
        }
        Ok(Some(fragment))
    }
}

/// Annotation keywords shared by every kind: nullable type, `title`,
/// `description` and `default`.
#[derive(Debug, Clone, Copy)]
pub struct BaseKeywords {
    nullable_union: bool,
    title: bool,
}

impl BaseKeywords {
    /// Draft-04 rules: optional nodes get `[type, "null"]`, titles are kept.
    pub const fn draft4() -> Self {
        Self {
            nullable_union: true,
            title: true,
        }
    }

    /// Only `description` and `default`; used by the Swagger 2.0 profile.
    pub const fn plain() -> Self {
        Self {
            nullable_union: false,
            title: false,
        }
    }
}

impl Keywords for BaseKeywords {
    fn apply(
        &self,
        node: &SchemaNode,
        fragment: &mut Fragment,
        _cx: &mut Conversion<'_>,
    ) -> Result<(), ConvertError> {
        if self.nullable_union && !node.is_required() {
            if let Some(primitive) = fragment.get_mut("type") {
                let inner = primitive.take();
                *primitive = json!([inner, "null"]);
            }
        }
        if self.title {
            if let Some(title) = node.title_text() {
                fragment.insert("title".to_string(), json!(title));
            }
        }
        if let Some(description) = node.description_text() {
            fragment.insert("description".to_string(), json!(description));
        }
        if let Some(default) = node.default_value() {
            fragment.insert("default".to_string(), default.clone());
        }
        Ok(())
    }
}

/// Sets `minLength: 1` on required nodes; an empty string never satisfies a
/// mandatory field. Runs before validators so an explicit length wins.
#[derive(Debug, Clone, Copy)]
pub struct RequiredMinLength;

impl Keywords for RequiredMinLength {
    fn apply(
        &self,
        node: &SchemaNode,
        fragment: &mut Fragment,
        _cx: &mut Conversion<'_>,
    ) -> Result<(), ConvertError> {
        if node.is_required() {
            fragment.insert("minLength".to_string(), json!(1));
        }
        Ok(())
    }
}

/// Sets a fixed `format`, overriding any format a validator produced.
#[derive(Debug, Clone, Copy)]
pub struct FixedFormat(pub &'static str);

impl Keywords for FixedFormat {
    fn apply(
        &self,
        _node: &SchemaNode,
        fragment: &mut Fragment,
        _cx: &mut Conversion<'_>,
    ) -> Result<(), ConvertError> {
        fragment.insert("format".to_string(), json!(self.0));
        Ok(())
    }
}

/// Sets the `pattern` of a decimal rendered as a string.
///
/// Without a scale any number of decimal places is accepted; with a positive
/// scale `n` at most `n` places are. The bound is written `{0,n}`, since ECMA
/// 262 regexes reject the `{,n}` shorthand.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecimalPattern {
    default_scale: Option<u32>,
}

impl DecimalPattern {
    pub const fn new() -> Self {
        Self {
            default_scale: None,
        }
    }

    /// Uses `places` when the node declares no scale of its own.
    pub const fn with_default_scale(places: u32) -> Self {
        Self {
            default_scale: Some(places),
        }
    }

    /// Returns the pattern for a decimal with the given number of places.
    pub fn pattern(scale: Option<u32>) -> String {
        match scale {
            Some(places) if places > 0 => format!(r"^[-+]?[0-9]+(\.[0-9]{{0,{}}})?$", places),
            _ => r"^[-+]?[0-9]+(\.[0-9]*)?$".to_string(),
        }
    }
}

impl Keywords for DecimalPattern {
    fn apply(
        &self,
        node: &SchemaNode,
        fragment: &mut Fragment,
        _cx: &mut Conversion<'_>,
    ) -> Result<(), ConvertError> {
        let scale = node.decimal_places().or(self.default_scale);
        fragment.insert("pattern".to_string(), json!(Self::pattern(scale)));
        Ok(())
    }
}

/// Converts object children into `properties` and `required`.
///
/// Properties keep declaration order. `required` lists the names of required
/// children and is omitted when empty. A child that converts to no result is
/// left out of `properties` but still listed in `required`.
#[derive(Debug, Clone, Copy)]
pub struct Properties;

impl Keywords for Properties {
    fn apply(
        &self,
        node: &SchemaNode,
        fragment: &mut Fragment,
        cx: &mut Conversion<'_>,
    ) -> Result<(), ConvertError> {
        let mut properties = Fragment::new();
        let mut required = Vec::new();
        for child in node.children() {
            if child.is_required() {
                required.push(json!(child.name()));
            }
            let Some(converted) = cx.resolve(child, PathSegment::property(child.name()))? else {
                trace!(property = child.name(), path = %cx.path(), "property produced no fragment");
                continue;
            };
            properties.insert(child.name().to_string(), Value::Object(converted));
        }
        fragment.insert("properties".to_string(), Value::Object(properties));
        if !required.is_empty() {
            fragment.insert("required".to_string(), Value::Array(required));
        }
        Ok(())
    }
}

/// Converts the item node of an array into `items`.
#[derive(Debug, Clone, Copy)]
pub struct Items;

impl Keywords for Items {
    fn apply(
        &self,
        node: &SchemaNode,
        fragment: &mut Fragment,
        cx: &mut Conversion<'_>,
    ) -> Result<(), ConvertError> {
        if let Some(item) = node.items() {
            if let Some(converted) = cx.resolve(item, PathSegment::Items)? {
                fragment.insert("items".to_string(), Value::Object(converted));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_pattern_unbounded() {
        assert_eq!(DecimalPattern::pattern(None), r"^[-+]?[0-9]+(\.[0-9]*)?$");
        assert_eq!(DecimalPattern::pattern(Some(0)), r"^[-+]?[0-9]+(\.[0-9]*)?$");
    }

    #[test]
    fn test_decimal_pattern_with_scale() {
        assert_eq!(
            DecimalPattern::pattern(Some(2)),
            r"^[-+]?[0-9]+(\.[0-9]{0,2})?$"
        );
    }

    #[test]
    fn test_decimal_pattern_is_valid_regex() {
        let regex = regex::Regex::new(&DecimalPattern::pattern(Some(2))).unwrap();
        assert!(regex.is_match("12.34"));
        assert!(regex.is_match("-7"));
        assert!(!regex.is_match("1.234"));
    }

    #[test]
    fn test_kind_converter_type_name() {
        assert_eq!(KindConverter::new("integer").type_name(), "integer");
    }
}
