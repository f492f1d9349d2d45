//! Redis Queue Store Adapter
//!
//! Backs the `QueueStore` port with a single multiplexed Redis
//! connection. The connection is created once at startup and cloned per
//! call; cloning a multiplexed connection shares the underlying socket
//! and is safe for concurrent use, so no request ever opens its own
//! connection. There are no retries and no reconnection: a failed read
//! degrades that one request and the operator restarts the process if
//! the store moves.

use crate::domain::ports::{QueueStore, StoreError};
use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use std::time::Duration;

/// Connect and per-command timeout. A slow store must degrade a single
/// request, not tie up the serving pool.
const STORE_TIMEOUT: Duration = Duration::from_secs(5);

/// Redis implementation of the queue store gateway.
pub struct RedisQueueStore {
    conn: MultiplexedConnection,
}

impl RedisQueueStore {
    /// Open the shared connection to the store at `host:port`.
    pub async fn connect(host: &str, port: u16) -> Result<Self, StoreError> {
        Self::connect_with_timeout(host, port, STORE_TIMEOUT).await
    }

    /// Open the shared connection with an explicit connect/per-command
    /// timeout. The timeout sticks to the connection and bounds every
    /// later command on it.
    pub async fn connect_with_timeout(
        host: &str,
        port: u16,
        timeout: Duration,
    ) -> Result<Self, StoreError> {
        let url = format!("redis://{}:{}", host, port);
        let client = redis::Client::open(url.as_str()).map_err(store_error)?;

        let conn = client
            .get_multiplexed_async_connection_with_timeouts(timeout, timeout)
            .await
            .map_err(store_error)?;

        tracing::info!(host, port, "connected to Redis");
        Ok(Self { conn })
    }
}

#[async_trait]
impl QueueStore for RedisQueueStore {
    async fn probe(&self) -> Result<(), StoreError> {
        let mut conn = self.conn.clone();
        tracing::debug!("PING");

        let reply: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "PING failed");
                store_error(e)
            })?;

        tracing::debug!(reply = %reply, "PING ok");
        Ok(())
    }

    async fn list_len(&self, key: &str) -> Result<i64, StoreError> {
        let mut conn = self.conn.clone();
        tracing::debug!(key, "LLEN");

        // LLEN on a missing key returns 0, which is exactly the
        // empty-list semantics the port requires.
        let len: i64 = redis::cmd("LLEN")
            .arg(key)
            .query_async(&mut conn)
            .await
            .map_err(|e| {
                tracing::error!(key, error = %e, "LLEN failed");
                store_error(e)
            })?;

        tracing::debug!(key, len, "LLEN ok");
        Ok(len)
    }
}

fn store_error(err: redis::RedisError) -> StoreError {
    if err.is_timeout() {
        StoreError::Timeout
    } else {
        StoreError::Backend(err.to_string())
    }
}
