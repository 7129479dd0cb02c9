//! # hqdm-store - an in-memory relation store for HQDM models
//!
//! Holds instances of the HQDM upper ontology as subject/predicate/object
//! triples and answers the queries models are built from: kind and class
//! membership, type and name lookup, and the multi-hop resolution of the
//! names and descriptions a community recognizes for an entity.
//!
//! ## Core Concepts
//!
//! - **Entity**: an opaque id; equality is by id only
//! - **EqSet**: the insertion-ordered, value-compared set every index is built on
//! - **RelationStore**: triples indexed by subject and by predicate, kept in step
//! - **Signs**: names and descriptions attached through pattern/sign/community
//!   sub-graphs, valid between two points in time
//!
//! ## Usage
//!
//! ```rust
//! use hqdm_store::{utc_point_in_time_iri, vocabulary, Entity, RelationStore};
//! use hqdm_store::vocabulary::kinds;
//!
//! let mut store = RelationStore::add_models([vocabulary().model()]);
//! let world = store.create_entity(&Entity::new(kinds::POSSIBLE_WORLD), "test:world");
//! let alice = store.create_entity(&Entity::new(kinds::PERSON), "test:alice");
//! let from = Entity::new(utc_point_in_time_iri(0));
//! let to = Entity::new(utc_point_in_time_iri(1_000));
//!
//! store.add_identification("test:", &world, &alice, "Alice Smith", "EN", &from, &to);
//! let names = store.identifications(&alice, "EN");
//! assert_eq!(names.len(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod entity;
pub mod eq_set;
pub mod error;
pub mod interchange;
pub mod sign;
pub mod store;
pub mod time;
pub mod vocabulary;

// Re-export primary types at crate root for convenience
pub use config::{ModelConfig, HQDM_NS, HQDM_UUID_NS};
pub use entity::{Entity, Pair};
pub use eq_set::EqSet;
pub use error::{ConfigError, HqdmError, HqdmResult, ImportError, SetError};
pub use interchange::{Triple, TripleObject};
pub use sign::SignValue;
pub use store::RelationStore;
pub use time::{point_in_time, point_in_time_iri, utc_point_in_time_iri};
pub use vocabulary::{vocabulary, Vocabulary};
