//! Triple items exchanged with external parsers and serializers.

use serde::{Deserialize, Serialize};

/// The object position of a triple.
///
/// # Examples
///
/// ```
/// use hqdm_store::TripleObject;
///
/// let name = TripleObject::Literal("Alice".to_string());
/// assert!(name.is_literal());
/// assert_eq!(name.as_str(), "Alice");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum TripleObject {
    /// A reference to an entity by id.
    Entity(String),
    /// A literal string.
    Literal(String),
}

impl TripleObject {
    /// Returns true for an entity reference.
    #[must_use]
    pub const fn is_entity(&self) -> bool {
        matches!(self, Self::Entity(_))
    }

    /// Returns true for a literal.
    #[must_use]
    pub const fn is_literal(&self) -> bool {
        matches!(self, Self::Literal(_))
    }

    /// The id or literal text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Entity(v) | Self::Literal(v) => v,
        }
    }

    /// Consumes the object, returning the id or literal text.
    #[must_use]
    pub fn into_value(self) -> String {
        match self {
            Self::Entity(v) | Self::Literal(v) => v,
        }
    }
}

/// One `(subject, predicate, object)` item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Triple {
    /// Subject entity id.
    pub subject: String,
    /// Predicate id.
    pub predicate: String,
    /// Object reference or literal.
    pub object: TripleObject,
}

impl Triple {
    /// Creates a triple.
    #[must_use]
    pub fn new(subject: impl Into<String>, predicate: impl Into<String>, object: TripleObject) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object,
        }
    }
}
