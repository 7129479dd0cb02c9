//! Entity and pair value types.
//!
//! An [`Entity`] is an opaque identifier. It carries no schema of its own:
//! everything known about it lives in the relations of a
//! [`RelationStore`](crate::RelationStore). Literal values attached through
//! the entity-name predicate are held as entities too, with the literal text
//! as the id.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An identified thing in a model.
///
/// Two entities are equal exactly when their ids are equal.
///
/// # Examples
///
/// ```
/// use hqdm_store::Entity;
///
/// let a = Entity::new("test:alice");
/// let b = Entity::new(String::from("test:alice"));
/// assert_eq!(a, b);
/// assert_eq!(a.id(), "test:alice");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Entity {
    id: String,
}

impl Entity {
    /// Creates an entity with the given id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// Creates an entity whose id is `namespace` followed by a random UUID.
    ///
    /// ```
    /// use hqdm_store::Entity;
    ///
    /// let e = Entity::generate("test:");
    /// assert!(e.id().starts_with("test:"));
    /// assert_ne!(e, Entity::generate("test:"));
    /// ```
    #[must_use]
    pub fn generate(namespace: &str) -> Self {
        Self {
            id: format!("{namespace}{}", Uuid::new_v4()),
        }
    }

    /// Returns the identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Consumes the entity, returning its identifier.
    #[must_use]
    pub fn into_id(self) -> String {
        self.id
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

impl From<&str> for Entity {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for Entity {
    fn from(id: String) -> Self {
        Self { id }
    }
}

impl AsRef<str> for Entity {
    fn as_ref(&self) -> &str {
        &self.id
    }
}

/// An ordered pair, one half of a triple in the by-predicate index.
///
/// Equal iff both components are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pair<L, R> {
    /// Left component (the subject in the store's index).
    pub left: L,
    /// Right component (the object in the store's index).
    pub right: R,
}

impl<L, R> Pair<L, R> {
    /// Creates a pair.
    #[must_use]
    pub const fn new(left: L, right: R) -> Self {
        Self { left, right }
    }
}
