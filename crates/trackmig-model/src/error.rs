//! Error types for migration configuration.

use thiserror::Error;

/// Errors raised while building a [`crate::MigrationConfig`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The priority table has no entries.
    #[error("priority map is empty")]
    EmptyPriorityMap,

    /// The fallback severity is not one of the table's entries.
    #[error("fallback priority '{fallback}' is not in the priority map")]
    UnknownFallback { fallback: String },

    /// A severity name appears more than once.
    #[error("duplicate priority '{severity}' in priority map")]
    DuplicatePriority { severity: String },

    /// The issue link base URL is blank.
    #[error("issue base URL must not be empty")]
    EmptyBaseUrl,
}
