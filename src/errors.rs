//! Standardized error types following the `error-client-identity-<domain>-<number>` format.

use thiserror::Error;

/// Configuration errors that occur while reading the environment
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Error when an environment variable holds an unusable value
    #[error("error-client-identity-config-1 {0} is invalid: {1}")]
    EnvVarInvalid(String, String),

    /// Error when a numeric setting cannot be parsed
    #[error("error-client-identity-config-2 Parsing {0} failed: {1:?}")]
    NumberParsingFailed(String, std::num::ParseIntError),

    /// Error when version information is not available
    #[error("error-client-identity-config-3 CARGO_PKG_VERSION must be set")]
    VersionNotSet,
}

/// Client identity errors
#[derive(Debug, Error)]
pub enum ClientError {
    /// A required argument was absent
    #[error("error-client-identity-client-1 Invalid argument: {0}")]
    InvalidArgument(String),

    /// The same audience appeared more than once
    #[error("error-client-identity-client-2 Duplicate audience: {0}")]
    DuplicateAudience(String),

    /// Audience entries and constituent clients are not paired one to one
    #[error(
        "error-client-identity-client-3 Audience has {audience} entries but {clients} clients were supplied"
    )]
    AudienceMismatch {
        /// Number of audience entries
        audience: usize,
        /// Number of constituent clients
        clients: usize,
    },

    /// A combo client needs at least one audience
    #[error("error-client-identity-client-4 Audience is empty")]
    EmptyAudience,

    /// Client not found
    #[error("error-client-identity-client-5 Client not found: {0}")]
    ClientNotFound(String),

    /// Client secret did not verify
    #[error("error-client-identity-client-6 Invalid client secret for: {0}")]
    InvalidSecret(String),

    /// Secret hashing failed
    #[error("error-client-identity-client-7 Secret hashing failed: {0}")]
    SecretHashingFailed(String),

    /// Underlying client store failed
    #[error("error-client-identity-client-8 Client store error: {0}")]
    Storage(#[from] StorageError),
}

/// Client store errors
#[derive(Debug, Error)]
pub enum StorageError {
    /// Error when an in-memory lock is poisoned
    #[error("error-client-identity-storage-1 Lock poisoned: {0}")]
    LockPoisoned(String),

    /// Error when requested resource is not found
    #[error("error-client-identity-storage-2 Not found: {0}")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, ClientError>;
