//! Error taxonomy for the session reaction boundaries.
//!
//! All of these are collaborator-reported failures. The reactor catches each
//! one at the boundary where it occurs, logs it, and continues; none of them
//! cross the reactor's public surface.

use thiserror::Error;

/// Identity-provider operation failure
#[derive(Debug, Error)]
pub enum AuthError {
    /// The provider rejected the supplied credentials
    #[error("credentials rejected: {0}")]
    CredentialsRejected(String),

    /// The provider could not be reached
    #[error("provider unavailable: {0}")]
    Unavailable(String),

    /// Any other provider-reported failure
    #[error("auth provider error: {0}")]
    Provider(String),
}

/// Document-store fetch failure
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store connection is not initialized or has been lost
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// The store rejected or failed the query
    #[error("query failed: {0}")]
    Query(String),

    /// A fetched document did not match the expected shape
    #[error("malformed document: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Readiness-gate failure
#[derive(Debug, Error)]
pub enum GateError {
    /// The gate gave up before the store finished initializing
    #[error("readiness gate timed out after {0:?}")]
    Timeout(std::time::Duration),

    /// The gate itself failed
    #[error("readiness gate failed: {0}")]
    Failed(String),
}
