//! JSON serialization of stores.
//!
//! A store is written as a JSON array of [`Triple`]s. These helpers keep the
//! format stable for callers that persist or ship models as text.

use crate::error::{HqdmError, ImportError};
use crate::interchange::Triple;
use crate::store::RelationStore;

/// Serialize a store to pretty JSON.
///
/// # Errors
///
/// Returns `HqdmError::Internal` if serialization fails.
pub fn to_json_pretty(store: &RelationStore) -> Result<String, HqdmError> {
    serde_json::to_string_pretty(&store.save())
        .map_err(|e| HqdmError::internal(format!("serialize triples: {e}")))
}

/// Build a store from JSON produced by [`to_json_pretty`].
///
/// # Errors
///
/// Returns `ImportError::Decode` if the text is not a triple array, or any
/// error [`RelationStore::load`] reports.
pub fn from_json(s: &str) -> Result<RelationStore, ImportError> {
    let triples: Vec<Triple> = serde_json::from_str(s).map_err(|e| {
        tracing::warn!(error = %e, "could not decode triple JSON");
        ImportError::Decode {
            message: e.to_string(),
        }
    })?;
    RelationStore::load(triples)
}
