//! The closed set of node kinds a converter table is keyed by.

use std::fmt::{self, Display};

/// Identity of a node's primitive or composite type.
///
/// Converter tables map each `TypeKind` to the converter responsible for it.
/// `Decimal` and `Money` are only understood by the decimal-string profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Boolean,
    String,
    Date,
    DateTime,
    Time,
    Number,
    Integer,
    Decimal,
    Money,
    Object,
    Array,
}

impl TypeKind {
    /// Returns true for kinds whose nodes carry named properties.
    ///
    /// Object kinds are the ones hoisted into `definitions` when a dispatcher
    /// extracts definitions.
    pub fn is_object(self) -> bool {
        matches!(self, TypeKind::Object)
    }

    /// Returns true for the array kind.
    pub fn is_array(self) -> bool {
        matches!(self, TypeKind::Array)
    }

    /// Returns true for kinds that never have children.
    pub fn is_leaf(self) -> bool {
        !(self.is_object() || self.is_array())
    }

    /// Returns true for kinds rendered as decimal strings.
    pub fn is_decimal(self) -> bool {
        matches!(self, TypeKind::Decimal | TypeKind::Money)
    }

    /// Returns the kind's name as used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            TypeKind::Boolean => "Boolean",
            TypeKind::String => "String",
            TypeKind::Date => "Date",
            TypeKind::DateTime => "DateTime",
            TypeKind::Time => "Time",
            TypeKind::Number => "Number",
            TypeKind::Integer => "Integer",
            TypeKind::Decimal => "Decimal",
            TypeKind::Money => "Money",
            TypeKind::Object => "Object",
            TypeKind::Array => "Array",
        }
    }
}

impl Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_object_is_object() {
        assert!(TypeKind::Object.is_object());
        assert!(!TypeKind::Array.is_object());
        assert!(!TypeKind::String.is_object());
    }

    #[test]
    fn test_leaf_kinds() {
        assert!(TypeKind::Date.is_leaf());
        assert!(TypeKind::Money.is_leaf());
        assert!(!TypeKind::Object.is_leaf());
        assert!(!TypeKind::Array.is_leaf());
    }

    #[test]
    fn test_display() {
        assert_eq!(TypeKind::DateTime.to_string(), "DateTime");
    }
}
