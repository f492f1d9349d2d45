//! Queue Store Port
//!
//! Defines the interface to the key-value list store holding the Bull
//! queues. Implementations may talk to Redis or stand in as test doubles.

use async_trait::async_trait;
use thiserror::Error;

/// Failure surfaced by the store gateway.
///
/// No retries happen below this boundary; callers decide how to degrade.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store did not answer within the configured timeout.
    #[error("queue store timed out")]
    Timeout,
    /// Any other transport or protocol failure.
    #[error("queue store request failed: {0}")]
    Backend(String),
}

/// Read-only gateway to the list store.
///
/// This is an outbound port. One handle is created at startup and shared
/// by all requests, so implementations must be safe for concurrent use.
#[async_trait]
pub trait QueueStore: Send + Sync {
    /// Liveness probe. Used once at startup to decide whether the shared
    /// handle is usable at all.
    async fn probe(&self) -> Result<(), StoreError>;

    /// Number of elements in the list at `key`. An absent key behaves as
    /// an empty list (0), not an error.
    async fn list_len(&self, key: &str) -> Result<i64, StoreError>;
}
