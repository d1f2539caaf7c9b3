//! Extension seams of the conversion engine.
//!
//! [`TypeConverter`] turns one node into a fragment, [`Keywords`] is one step
//! of a composed [`KindConverter`](super::KindConverter), and
//! [`ValidatorConverter`] maps a single constraint to keywords.

use crate::error::ConvertError;
use crate::node::{Constraint, SchemaNode};

use super::context::Conversion;
use super::Fragment;

/// Converts one node of a given kind into a JSON Schema fragment.
///
/// Returning `Ok(None)` or an empty fragment means the node produces no
/// result; the caller then omits it instead of emitting a partial fragment.
/// Child nodes are converted through [`Conversion::resolve`], which goes back
/// through the dispatcher.
///
/// The `Send + Sync` bounds let one dispatcher serve many threads.
pub trait TypeConverter: Send + Sync {
    fn convert(
        &self,
        node: &SchemaNode,
        cx: &mut Conversion<'_>,
    ) -> Result<Option<Fragment>, ConvertError>;
}

/// One keyword-contributing step of a composed type converter.
///
/// Steps run in a fixed order over the same fragment, so later steps see and
/// may overwrite the keywords of earlier ones.
pub trait Keywords: Send + Sync {
    fn apply(
        &self,
        node: &SchemaNode,
        fragment: &mut Fragment,
        cx: &mut Conversion<'_>,
    ) -> Result<(), ConvertError>;
}

/// Converts a single (non-conjunction) constraint into keywords.
///
/// `None` means the constraint is not one this converter understands, letting
/// the dispatcher try the next converter.
pub trait ValidatorConverter: Send + Sync {
    fn convert(&self, node: &SchemaNode, constraint: &Constraint) -> Option<Fragment>;
}

impl<F> ValidatorConverter for F
where
    F: Fn(&SchemaNode, &Constraint) -> Option<Fragment> + Send + Sync,
{
    fn convert(&self, node: &SchemaNode, constraint: &Constraint) -> Option<Fragment> {
        self(node, constraint)
    }
}

/// A type converter backed by a closure. Created by [`from_fn`].
pub struct FnConverter<F>(F);

/// Wraps a closure as a [`TypeConverter`].
///
/// # Example
///
/// ```rust
/// use draftsman::{from_fn, Schema, TypeDispatcher, TypeKind};
/// use serde_json::{json, Map};
///
/// let dispatcher = TypeDispatcher::draft4().with_converter(
///     TypeKind::String,
///     from_fn(|_node, _cx| {
///         let mut fragment = Map::new();
///         fragment.insert("test".to_string(), json!("TEST"));
///         Ok(Some(fragment))
///     }),
/// );
///
/// let converted = dispatcher.convert(&Schema::string()).unwrap();
/// assert_eq!(converted["test"], "TEST");
/// ```
pub fn from_fn<F>(f: F) -> FnConverter<F>
where
    F: Fn(&SchemaNode, &mut Conversion<'_>) -> Result<Option<Fragment>, ConvertError>
        + Send
        + Sync,
{
    FnConverter(f)
}

impl<F> TypeConverter for FnConverter<F>
where
    F: Fn(&SchemaNode, &mut Conversion<'_>) -> Result<Option<Fragment>, ConvertError>
        + Send
        + Sync,
{
    fn convert(
        &self,
        node: &SchemaNode,
        cx: &mut Conversion<'_>,
    ) -> Result<Option<Fragment>, ConvertError> {
        (self.0)(node, cx)
    }
}
