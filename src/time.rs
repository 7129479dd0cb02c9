//! Points in time.
//!
//! Temporal bounds in a model are entities, related through the beginning and
//! ending predicates. Their ids are derived from UTC milliseconds so that
//! independently built stores refer to the same instant with the same entity.

use chrono::{DateTime, Utc};

use crate::config::ModelConfig;
use crate::entity::Entity;

/// Derives the point-in-time identifier for `millis` using the default configuration.
///
/// # Examples
///
/// ```
/// use hqdm_store::utc_point_in_time_iri;
///
/// assert_eq!(utc_point_in_time_iri(1_000), utc_point_in_time_iri(1_000));
/// assert_ne!(utc_point_in_time_iri(1_000), utc_point_in_time_iri(1_001));
/// ```
#[must_use]
pub fn utc_point_in_time_iri(millis: i64) -> String {
    ModelConfig::default().point_in_time_iri(millis)
}

/// Derives the point-in-time identifier for a UTC timestamp.
///
/// Sub-millisecond precision is discarded.
#[must_use]
pub fn point_in_time_iri(at: DateTime<Utc>) -> String {
    utc_point_in_time_iri(at.timestamp_millis())
}

/// Returns the point-in-time entity for a UTC timestamp.
///
/// The entity is not registered anywhere; callers create or relate it as needed.
#[must_use]
pub fn point_in_time(at: DateTime<Utc>) -> Entity {
    Entity::new(point_in_time_iri(at))
}
