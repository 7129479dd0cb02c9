//! Error types for the HQDM store.
//!
//! All errors are strongly typed using thiserror. Query absence is never an
//! error: lookups return empty sets or `None`. Only the contract violation of
//! [`EqSet::only`](crate::EqSet::only), a malformed import source and an
//! undecodable configuration surface as error values.

use thiserror::Error;

/// Errors raised by [`EqSet`](crate::EqSet) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetError {
    /// `only` was called on a set with more than one element.
    #[error("set has {count} members, expected at most one")]
    MultipleMembers {
        count: usize,
    },
}

/// Errors raised while importing triples from an external source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImportError {
    /// The upstream parser reported an error for an item.
    #[error("malformed triple source at item {index}: {message}")]
    Malformed {
        index: usize,
        message: String,
    },

    /// Triple text could not be decoded.
    #[error("failed to decode triples: {message}")]
    Decode {
        message: String,
    },
}

/// Errors raised while reading a [`ModelConfig`](crate::ModelConfig).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Configuration text could not be decoded.
    #[error("invalid configuration: {message}")]
    Invalid {
        message: String,
    },
}

/// Top-level error type for the crate.
#[derive(Debug, Error)]
pub enum HqdmError {
    /// See [`SetError`].
    #[error("Set error: {0}")]
    Set(#[from] SetError),

    /// See [`ImportError`].
    #[error("Import error: {0}")]
    Import(#[from] ImportError),

    /// See [`ConfigError`].
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// A failure inside the crate, such as serialization.
    #[error("Internal error: {message}")]
    Internal {
        message: String,
    },
}

impl HqdmError {
    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Returns true if this is a set contract violation.
    #[must_use]
    pub const fn is_set(&self) -> bool {
        matches!(self, Self::Set(_))
    }

    /// Returns true if this is an import failure.
    #[must_use]
    pub const fn is_import(&self) -> bool {
        matches!(self, Self::Import(_))
    }

    /// Returns true if this is a configuration error.
    #[must_use]
    pub const fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Returns true if this is an internal error.
    #[must_use]
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal { .. })
    }

    /// Returns true if the caller can recover by fixing its input.
    ///
    /// Import and configuration failures are data problems; a set contract
    /// violation is a bug at the call site.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Import(_) | Self::Config(_))
    }
}

/// Result type alias for crate operations.
pub type HqdmResult<T> = Result<T, HqdmError>;
