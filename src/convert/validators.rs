//! Constraint-to-keyword conversion.
//!
//! Each validator converter inspects one constraint and either returns the
//! keywords it maps to or `None`. A [`ValidatorDispatcher`] runs an ordered
//! list of converters against a node's constraint, flattening conjunctions
//! first.

use std::sync::Arc;

use serde_json::{json, Value};

use crate::error::ConvertError;
use crate::node::{Constraint, SchemaNode};

use super::context::Conversion;
use super::traits::{Keywords, ValidatorConverter};
use super::Fragment;

/// Maps a `Length` constraint onto a pair of keywords.
///
/// Strings and arrays share the logic and differ only in key names.
#[derive(Debug, Clone, Copy)]
pub struct LengthConverter {
    max_key: &'static str,
    min_key: &'static str,
}

impl LengthConverter {
    pub const fn new(max_key: &'static str, min_key: &'static str) -> Self {
        Self { max_key, min_key }
    }

    /// `maxLength` / `minLength`
    pub const fn string() -> Self {
        Self::new("maxLength", "minLength")
    }

    /// `maxItems` / `minItems`
    pub const fn array() -> Self {
        Self::new("maxItems", "minItems")
    }
}

impl ValidatorConverter for LengthConverter {
    fn convert(&self, _node: &SchemaNode, constraint: &Constraint) -> Option<Fragment> {
        let Constraint::Length { min, max } = constraint else {
            return None;
        };
        let mut converted = Fragment::new();
        if let Some(max) = max {
            converted.insert(self.max_key.to_string(), json!(max));
        }
        if let Some(min) = min {
            converted.insert(self.min_key.to_string(), json!(min));
        }
        Some(converted)
    }
}

/// Maps a `Range` constraint onto `minimum` / `maximum`, omitting open sides.
pub fn convert_range(_node: &SchemaNode, constraint: &Constraint) -> Option<Fragment> {
    let Constraint::Range { min, max } = constraint else {
        return None;
    };
    let mut converted = Fragment::new();
    if let Some(min) = min {
        converted.insert("minimum".to_string(), Value::Number(min.clone()));
    }
    if let Some(max) = max {
        converted.insert("maximum".to_string(), Value::Number(max.clone()));
    }
    Some(converted)
}

/// Maps the regex family onto `pattern`, or onto `format` for the well-known
/// email and URL rules.
pub fn convert_regex(_node: &SchemaNode, constraint: &Constraint) -> Option<Fragment> {
    let mut converted = Fragment::new();
    match constraint {
        Constraint::Url => {
            converted.insert("format".to_string(), json!("uri"));
        }
        Constraint::Email => {
            converted.insert("format".to_string(), json!("email"));
        }
        Constraint::Regex(regex) => {
            converted.insert("pattern".to_string(), json!(regex.as_str()));
        }
        _ => return None,
    }
    Some(converted)
}

/// Maps a `OneOf` constraint onto a plain `enum`.
pub fn convert_enum(_node: &SchemaNode, constraint: &Constraint) -> Option<Fragment> {
    let Constraint::OneOf(choices) = constraint else {
        return None;
    };
    let mut converted = Fragment::new();
    converted.insert("enum".to_string(), Value::Array(choices.clone()));
    Some(converted)
}

/// Maps a `OneOf` constraint onto `enum`, appending the kind's null sentinels
/// when the node is not required so the nullable type stays satisfiable.
#[derive(Debug, Clone)]
pub struct OneOfConverter {
    null_values: Vec<Value>,
}

impl OneOfConverter {
    pub fn new(null_values: impl IntoIterator<Item = Value>) -> Self {
        Self {
            null_values: null_values.into_iter().collect(),
        }
    }

    /// Sentinels for string kinds: `""` and `null`.
    pub fn string() -> Self {
        Self::new([json!(""), Value::Null])
    }

    /// Sentinels for numeric kinds: `null`.
    pub fn numeric() -> Self {
        Self::new([Value::Null])
    }
}

impl ValidatorConverter for OneOfConverter {
    fn convert(&self, node: &SchemaNode, constraint: &Constraint) -> Option<Fragment> {
        let Constraint::OneOf(choices) = constraint else {
            return None;
        };
        let mut choices = choices.clone();
        if !node.is_required() {
            choices.extend(self.null_values.iter().cloned());
        }
        let mut converted = Fragment::new();
        converted.insert("enum".to_string(), Value::Array(choices));
        Some(converted)
    }
}

/// Runs an ordered list of validator converters over a node's constraint.
///
/// Conjunctions are flattened and each member is matched independently; the
/// members' keywords are merged with later members winning on collisions. A
/// single constraint takes the keywords of the first converter that returns a
/// non-empty fragment. Unmatched constraints contribute nothing.
///
/// # Example
///
/// ```rust
/// use draftsman::{convert_range, Constraint, OneOfConverter, Schema, ValidatorDispatcher};
/// use serde_json::json;
///
/// let dispatcher = ValidatorDispatcher::new()
///     .with(convert_range)
///     .with(OneOfConverter::numeric());
///
/// let node = Schema::integer().optional();
/// let keywords = dispatcher.dispatch(
///     &node,
///     Some(&Constraint::all([Constraint::min(1), Constraint::one_of([1, 2])])),
/// );
///
/// assert_eq!(keywords["minimum"], 1);
/// assert_eq!(keywords["enum"], json!([1, 2, null]));
/// ```
#[derive(Clone, Default)]
pub struct ValidatorDispatcher {
    converters: Vec<Arc<dyn ValidatorConverter>>,
}

impl ValidatorDispatcher {
    /// Creates a dispatcher with no converters; it matches nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a converter; converters are tried in the order added.
    pub fn with<C>(mut self, converter: C) -> Self
    where
        C: ValidatorConverter + 'static,
    {
        self.converters.push(Arc::new(converter));
        self
    }

    pub fn len(&self) -> usize {
        self.converters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.converters.is_empty()
    }

    /// Converts `constraint` into keywords. An absent constraint yields an
    /// empty fragment.
    pub fn dispatch(&self, node: &SchemaNode, constraint: Option<&Constraint>) -> Fragment {
        let mut converted = Fragment::new();
        if let Some(constraint) = constraint {
            for member in constraint.flatten() {
                if let Some(keywords) = self.first_match(node, member) {
                    converted.extend(keywords);
                }
            }
        }
        converted
    }

    fn first_match(&self, node: &SchemaNode, constraint: &Constraint) -> Option<Fragment> {
        self.converters
            .iter()
            .filter_map(|converter| converter.convert(node, constraint))
            .find(|keywords| !keywords.is_empty())
    }
}

impl Keywords for ValidatorDispatcher {
    fn apply(
        &self,
        node: &SchemaNode,
        fragment: &mut Fragment,
        _cx: &mut Conversion<'_>,
    ) -> Result<(), ConvertError> {
        fragment.extend(self.dispatch(node, node.constraint()));
        Ok(())
    }
}
