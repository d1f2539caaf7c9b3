//! Per-call conversion state.
//!
//! A [`Conversion`] is created by [`TypeDispatcher::convert`] for one root
//! node, threaded through every recursive step, and consumed when the root
//! has been resolved. It owns the definition cache, so nothing leaks between
//! top-level calls.

use indexmap::IndexMap;
use serde_json::Value;

use crate::error::ConvertError;
use crate::node::SchemaNode;
use crate::path::{NodePath, PathSegment};

use super::dispatcher::TypeDispatcher;
use super::Fragment;

/// Definition cache entries keyed by declared type name. `None` records a
/// type whose conversion produced no fragment.
pub(crate) type DefinitionCache = IndexMap<String, Option<Fragment>>;

/// State of one top-level conversion.
pub struct Conversion<'d> {
    dispatcher: &'d TypeDispatcher,
    definitions: DefinitionCache,
    path: NodePath,
}

impl<'d> Conversion<'d> {
    pub(crate) fn new(dispatcher: &'d TypeDispatcher) -> Self {
        Self {
            dispatcher,
            definitions: DefinitionCache::new(),
            path: NodePath::root(),
        }
    }

    /// Converts a child node through the dispatcher, entering it via
    /// `segment`.
    pub fn resolve(
        &mut self,
        child: &SchemaNode,
        segment: PathSegment,
    ) -> Result<Option<Fragment>, ConvertError> {
        let child_path = self.path.push(segment);
        let parent_path = std::mem::replace(&mut self.path, child_path);
        let resolved = self.resolve_here(child);
        self.path = parent_path;
        resolved
    }

    /// Converts `node` at the current path.
    pub(crate) fn resolve_here(&mut self, node: &SchemaNode) -> Result<Option<Fragment>, ConvertError> {
        let dispatcher = self.dispatcher;
        dispatcher.resolve(node, self)
    }

    /// Returns the path of the node being converted.
    pub fn path(&self) -> &NodePath {
        &self.path
    }

    /// Returns true once `type_name` has an entry in the definition cache.
    pub fn is_defined(&self, type_name: &str) -> bool {
        self.definitions.contains_key(type_name)
    }

    /// Returns the cached conversion of `type_name`, if any produced a result.
    pub fn definition(&self, type_name: &str) -> Option<&Fragment> {
        self.definitions.get(type_name).and_then(Option::as_ref)
    }

    /// Records a converted type. Entries are never replaced once present.
    pub(crate) fn define(&mut self, type_name: &str, converted: Option<Fragment>) {
        self.definitions
            .entry(type_name.to_string())
            .or_insert(converted);
    }

    /// Consumes the conversion, returning the non-empty definitions in the
    /// order they were first cached.
    pub(crate) fn into_definitions(self) -> Fragment {
        self.definitions
            .into_iter()
            .filter_map(|(name, converted)| converted.map(|c| (name, Value::Object(c))))
            .collect()
    }
}
