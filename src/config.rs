//! Model configuration.
//!
//! Controls how deterministic identifiers are derived. The defaults match the
//! published HQDM namespace, so stores built with the default configuration
//! agree on point-in-time ids without coordination.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ConfigError;

/// IRI prefix of the HQDM vocabulary.
pub const HQDM_NS: &str = "https://hqdmtop.github.io/hqdm#";

/// UUID namespace for v5 identifiers derived by this crate.
pub const HQDM_UUID_NS: Uuid = Uuid::from_u128(0x5f97_1111_985b_49c6_83b7_d9f9_bf66_0301);

/// Name of the class of point in time whose members are UTC milliseconds.
pub const UTC_MS_CLASS_NAME: &str = "utc_milliseconds";

/// Configuration for identifier derivation.
///
/// # Examples
///
/// ```
/// use hqdm_store::ModelConfig;
///
/// let config = ModelConfig::from_json(r#"{ "iri_prefix": "test:" }"#).unwrap();
/// assert!(config.point_in_time_iri(0).starts_with("test:"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Prefix prepended to derived identifiers.
    pub iri_prefix: String,
    /// Namespace the point-in-time class namespace is derived from.
    pub uuid_namespace: Uuid,
    /// Name of the point-in-time class.
    pub point_in_time_class: String,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            iri_prefix: HQDM_NS.to_string(),
            uuid_namespace: HQDM_UUID_NS,
            point_in_time_class: UTC_MS_CLASS_NAME.to_string(),
        }
    }
}

impl ModelConfig {
    /// Decodes a configuration from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if the text is not a valid configuration.
    pub fn from_json(s: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(s).map_err(|e| ConfigError::Invalid {
            message: e.to_string(),
        })
    }

    /// Namespace UUID of the configured point-in-time class.
    #[must_use]
    pub fn point_in_time_namespace(&self) -> Uuid {
        Uuid::new_v5(&self.uuid_namespace, self.point_in_time_class.as_bytes())
    }

    /// Derives the identifier of the point in time `millis` milliseconds after the epoch.
    ///
    /// Equal inputs always give equal identifiers.
    #[must_use]
    pub fn point_in_time_iri(&self, millis: i64) -> String {
        let id = Uuid::new_v5(&self.point_in_time_namespace(), millis.to_string().as_bytes());
        format!("{}{id}", self.iri_prefix)
    }
}
