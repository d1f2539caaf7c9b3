//! Validation constraints attached to schema nodes.
//!
//! A node carries at most one [`Constraint`]; several rules are expressed as a
//! conjunction with [`Constraint::All`].

use regex::Regex;
use serde_json::{Number, Value};

/// A validation rule attached to a node.
///
/// Converters read constraints to derive JSON Schema keywords. A constraint
/// that no converter understands for a node's kind contributes nothing.
///
/// # Example
///
/// ```rust
/// use draftsman::Constraint;
///
/// let code = Constraint::all([
///     Constraint::length(Some(3), Some(8)),
///     Constraint::regex(r"^[A-Z]+$").unwrap(),
/// ]);
///
/// assert_eq!(code.flatten().count(), 2);
/// ```
#[derive(Debug, Clone)]
pub enum Constraint {
    /// Bounds on string length or array item count.
    Length {
        min: Option<usize>,
        max: Option<usize>,
    },
    /// Inclusive numeric bounds. See [`Constraint::float_range`] for
    /// floating-point bounds.
    Range {
        min: Option<Number>,
        max: Option<Number>,
    },
    /// A regular expression the value must match.
    Regex(Regex),
    /// The well-known email address rule.
    Email,
    /// The well-known URL rule.
    Url,
    /// The value must be one of the listed choices.
    OneOf(Vec<Value>),
    /// Every member must hold.
    All(Vec<Constraint>),
}

impl Constraint {
    /// Creates a length constraint; `None` leaves that side open.
    pub fn length(min: Option<usize>, max: Option<usize>) -> Self {
        Constraint::Length { min, max }
    }

    /// Creates a length constraint with only a lower bound.
    pub fn min_len(min: usize) -> Self {
        Constraint::length(Some(min), None)
    }

    /// Creates a length constraint with only an upper bound.
    pub fn max_len(max: usize) -> Self {
        Constraint::length(None, Some(max))
    }

    /// Creates an inclusive range constraint with both bounds.
    pub fn range(min: impl Into<Number>, max: impl Into<Number>) -> Self {
        Constraint::Range {
            min: Some(min.into()),
            max: Some(max.into()),
        }
    }

    /// Creates a range constraint with only a lower bound.
    pub fn min(min: impl Into<Number>) -> Self {
        Constraint::Range {
            min: Some(min.into()),
            max: None,
        }
    }

    /// Creates a range constraint with only an upper bound.
    pub fn max(max: impl Into<Number>) -> Self {
        Constraint::Range {
            min: None,
            max: Some(max.into()),
        }
    }

    /// Creates a range constraint from floating-point bounds; `None` leaves
    /// that side open.
    ///
    /// Returns `None` if a given bound is NaN or infinite, since JSON numbers
    /// cannot represent those.
    ///
    /// # Example
    ///
    /// ```rust
    /// use draftsman::Constraint;
    ///
    /// assert!(Constraint::float_range(Some(0.5), None).is_some());
    /// assert!(Constraint::float_range(None, Some(f64::NAN)).is_none());
    /// ```
    pub fn float_range(min: Option<f64>, max: Option<f64>) -> Option<Self> {
        let bound = |value: Option<f64>| match value {
            Some(value) => Number::from_f64(value).map(Some),
            None => Some(None),
        };
        Some(Constraint::Range {
            min: bound(min)?,
            max: bound(max)?,
        })
    }

    /// Compiles `pattern` into a regex constraint.
    ///
    /// # Errors
    ///
    /// Returns `regex::Error` if the pattern is not a valid regular expression.
    pub fn regex(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Constraint::Regex(Regex::new(pattern)?))
    }

    /// Creates the well-known email constraint.
    pub fn email() -> Self {
        Constraint::Email
    }

    /// Creates the well-known URL constraint.
    pub fn url() -> Self {
        Constraint::Url
    }

    /// Creates an enumeration constraint.
    pub fn one_of<I, V>(choices: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Constraint::OneOf(choices.into_iter().map(Into::into).collect())
    }

    /// Creates a conjunction of constraints.
    pub fn all(constraints: impl IntoIterator<Item = Constraint>) -> Self {
        Constraint::All(constraints.into_iter().collect())
    }

    /// Joins two constraints into one conjunction, appending to an existing
    /// conjunction on the left instead of nesting it.
    pub fn and(self, other: Constraint) -> Self {
        match self {
            Constraint::All(mut members) => {
                members.push(other);
                Constraint::All(members)
            }
            first => Constraint::All(vec![first, other]),
        }
    }

    /// Returns true for the regex family (`Regex`, `Email`, `Url`).
    pub fn is_regex(&self) -> bool {
        matches!(
            self,
            Constraint::Regex(_) | Constraint::Email | Constraint::Url
        )
    }

    /// Iterates over the leaf constraints, descending into nested conjunctions
    /// in declaration order.
    pub fn flatten(&self) -> Box<dyn Iterator<Item = &Constraint> + '_> {
        match self {
            Constraint::All(members) => Box::new(members.iter().flat_map(|c| c.flatten())),
            leaf => Box::new(std::iter::once(leaf)),
        }
    }
}
