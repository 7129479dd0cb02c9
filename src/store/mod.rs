//! The dual-indexed relation store.
//!
//! Triples are held twice: by subject (subject → predicate → objects) and by
//! predicate (predicate → subject/object pairs). Every mutation goes through a
//! single insert or remove step that touches both views, so the views always
//! describe the same triple set.

mod classification;
mod model;

pub use model::RelationStore;
