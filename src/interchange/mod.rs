//! Triple import and export.
//!
//! The boundary with external parsers and serializers is a flat sequence of
//! [`Triple`]s. Building a store from that sequence replays `relate`; saving
//! emits entity-name objects as literals and every other object as an entity
//! reference.

mod serialization;
mod triple;

pub use serialization::{from_json, to_json_pretty};
pub use triple::{Triple, TripleObject};

use std::fmt::Display;

use crate::entity::Entity;
use crate::error::ImportError;
use crate::store::RelationStore;
use crate::vocabulary::predicates::ENTITY_NAME;

impl RelationStore {
    /// Builds a store from a sequence of triples.
    ///
    /// Literal and reference objects both become entities; the distinction is
    /// recovered on export from the predicate. Ids are taken as given, so
    /// anything `relate` accepted survives a `save` and `load`.
    ///
    /// # Errors
    ///
    /// Never fails for an in-memory sequence; the `Result` matches
    /// [`try_load`](Self::try_load).
    pub fn load(triples: impl IntoIterator<Item = Triple>) -> Result<Self, ImportError> {
        Self::try_load(triples.into_iter().map(Ok::<_, std::convert::Infallible>))
    }

    /// Builds a store from the output of an upstream parser.
    ///
    /// # Errors
    ///
    /// The first `Err` item is reported as `ImportError::Malformed`, carrying
    /// its position and message.
    pub fn try_load<I, E>(items: I) -> Result<Self, ImportError>
    where
        I: IntoIterator<Item = Result<Triple, E>>,
        E: Display,
    {
        let mut store = Self::new();
        for (index, item) in items.into_iter().enumerate() {
            let triple = item.map_err(|e| {
                tracing::warn!(index, error = %e, "rejected malformed triple source");
                ImportError::Malformed {
                    index,
                    message: e.to_string(),
                }
            })?;
            let Triple {
                subject,
                predicate,
                object,
            } = triple;
            store.relate(&predicate, &Entity::from(subject), &Entity::from(object.into_value()));
        }
        tracing::debug!(triples = store.len(), "loaded store");
        Ok(store)
    }

    /// Exports every triple.
    #[must_use]
    pub fn save(&self) -> Vec<Triple> {
        self.triples()
            .map(|(predicate, subject, object)| {
                let object = if predicate == ENTITY_NAME {
                    TripleObject::Literal(object.id().to_string())
                } else {
                    TripleObject::Entity(object.id().to_string())
                };
                Triple::new(subject.id(), predicate, object)
            })
            .collect()
    }
}
