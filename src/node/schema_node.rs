//! The schema node tree read by the conversion engine.

use serde_json::Value;

use super::constraint::Constraint;
use super::kind::TypeKind;

/// One node of a schema tree.
///
/// Nodes are built with the factory methods on [`Schema`](super::Schema) and
/// the builder methods below. Object nodes hold one child per property, array
/// nodes hold exactly one child describing their items, and leaf nodes hold
/// none.
///
/// # Example
///
/// ```rust
/// use draftsman::{Constraint, Schema};
/// use serde_json::json;
///
/// let node = Schema::object()
///     .type_name("User")
///     .field("name", Schema::string().validator(Constraint::max_len(64)))
///     .field("age", Schema::integer().optional().default(json!(null)));
///
/// assert_eq!(node.children().len(), 2);
/// assert!(!node.children()[1].is_required());
/// ```
#[derive(Debug, Clone)]
pub struct SchemaNode {
    kind: TypeKind,
    name: String,
    type_name: Option<String>,
    required: bool,
    title: Option<String>,
    description: Option<String>,
    default: Option<Value>,
    validator: Option<Constraint>,
    scale: Option<u32>,
    children: Vec<SchemaNode>,
}

impl SchemaNode {
    /// Creates a required, unnamed node of the given kind with no attributes.
    pub fn new(kind: TypeKind) -> Self {
        Self {
            kind,
            name: String::new(),
            type_name: None,
            required: true,
            title: None,
            description: None,
            default: None,
            validator: None,
            scale: None,
            children: Vec::new(),
        }
    }

    /// Sets the property key this node is stored under.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the declared type name, used as the key in `definitions`.
    pub fn type_name(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }

    /// Marks the node as not required (it declares a missing value).
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Sets the node's title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the node's description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the default value. `Value::Null` is a present default of `null`.
    pub fn default(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }

    /// Attaches a constraint. A second call forms a conjunction with the
    /// constraints already attached.
    pub fn validator(mut self, constraint: Constraint) -> Self {
        self.validator = Some(match self.validator.take() {
            Some(existing) => existing.and(constraint),
            None => constraint,
        });
        self
    }

    /// Sets the number of decimal places for decimal kinds.
    pub fn scale(mut self, places: u32) -> Self {
        self.scale = Some(places);
        self
    }

    /// Adds a named child property.
    pub fn field(mut self, name: impl Into<String>, node: SchemaNode) -> Self {
        self.children.push(node.named(name));
        self
    }

    /// Adds a child node as-is, keeping its own name.
    pub fn child(mut self, node: SchemaNode) -> Self {
        self.children.push(node);
        self
    }

    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn declared_type_name(&self) -> Option<&str> {
        self.type_name.as_deref()
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn title_text(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn description_text(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the default value, or `None` when no default is declared.
    pub fn default_value(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    pub fn constraint(&self) -> Option<&Constraint> {
        self.validator.as_ref()
    }

    pub fn decimal_places(&self) -> Option<u32> {
        self.scale
    }

    pub fn children(&self) -> &[SchemaNode] {
        &self.children
    }

    /// Returns the item node of an array.
    pub fn items(&self) -> Option<&SchemaNode> {
        self.children.first()
    }
}
