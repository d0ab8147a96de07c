//! Error types for content store operations.

use thiserror::Error;

/// Errors that can occur during store operations.
///
/// "Not found" is never an error — lookup methods return `Ok(None)`.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A unique field already holds this value within the entity kind.
    #[error("{entity} with {field} \"{value}\" already exists")]
    Conflict {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    /// A store lock was poisoned by a panicking writer.
    #[error("store lock poisoned: {0}")]
    LockPoisoned(String),

    /// Failure in a backing document store (network, quota, decode).
    #[error("backend error: {0}")]
    Backend(String),
}

/// Convenience type alias for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;
