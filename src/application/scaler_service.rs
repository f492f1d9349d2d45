//! Scaler Service - Main application use case
//!
//! Orchestrates one metric computation: resolve the per-request queue
//! configuration, read the two list lengths, apply the cap. Every failure
//! other than invalid metadata degrades to the safe default (inactive /
//! zero) so the calling controller always gets a well-formed answer.

use crate::domain::entities::{QueueDepth, ScalingTarget};
use crate::domain::ports::{QueueStore, StoreError};
use crate::domain::value_objects::{MetadataError, QueueSpec};
use std::sync::Arc;

/// Metric name reported to the controller. Fixed by the contract; the
/// controller matches it against the ScaledObject definition.
pub const METRIC_NAME: &str = "bull_queue_length";

/// One replica per outstanding job.
pub const METRIC_TARGET_SIZE: i64 = 1;

/// Scaler service - main application use case.
///
/// Holds the single shared store handle. `None` means the store was
/// unreachable at startup; every query then falls back to the safe
/// default instead of erroring.
pub struct ScalerService {
    store: Option<Arc<dyn QueueStore>>,
}

impl ScalerService {
    /// Create a new scaler service around an (optionally absent) store.
    pub fn new(store: Option<Arc<dyn QueueStore>>) -> Self {
        Self { store }
    }

    /// Whether the queue has any outstanding work.
    ///
    /// Returns `Ok(false)` when the store is unavailable or a read fails;
    /// `Err` only for invalid request metadata.
    pub async fn is_active(&self, target: &ScalingTarget) -> Result<bool, MetadataError> {
        let spec = QueueSpec::from_metadata(&target.metadata)?;

        let Some(depth) = self.depth_or_default(target, &spec).await else {
            return Ok(false);
        };

        let result = depth.is_active();
        tracing::info!(
            target = %target.name,
            wait = depth.wait,
            active = depth.active,
            total = depth.total(),
            result,
            "activity check"
        );
        Ok(result)
    }

    /// Current metric value: total queue depth capped at `maxPods`.
    ///
    /// Returns `Ok(0)` when the store is unavailable or a read fails;
    /// `Err` only for invalid request metadata. No uncapped value is ever
    /// returned.
    pub async fn queue_length(&self, target: &ScalingTarget) -> Result<i64, MetadataError> {
        let spec = QueueSpec::from_metadata(&target.metadata)?;

        let Some(depth) = self.depth_or_default(target, &spec).await else {
            return Ok(0);
        };

        let capped = depth.capped(spec.max_pods);
        tracing::info!(
            target = %target.name,
            wait = depth.wait,
            active = depth.active,
            total = depth.total(),
            capped,
            max_pods = spec.max_pods,
            "metric query"
        );
        Ok(capped)
    }

    /// Read both list lengths, or `None` when the store is unavailable or
    /// a read fails. Callers map `None` to the safe default.
    async fn depth_or_default(
        &self,
        target: &ScalingTarget,
        spec: &QueueSpec,
    ) -> Option<QueueDepth> {
        let Some(store) = &self.store else {
            tracing::warn!(
                target = %target.name,
                "queue store unavailable, returning safe default"
            );
            return None;
        };

        match Self::fetch_depth(store.as_ref(), spec).await {
            Ok(depth) => Some(depth),
            Err(err) => {
                tracing::error!(
                    target = %target.name,
                    wait_list = %spec.wait_list,
                    active_list = %spec.active_list,
                    error = %err,
                    "queue length read failed, returning safe default"
                );
                None
            }
        }
    }

    async fn fetch_depth(
        store: &dyn QueueStore,
        spec: &QueueSpec,
    ) -> Result<QueueDepth, StoreError> {
        let wait = store.list_len(&spec.wait_list).await?;
        let active = store.list_len(&spec.active_list).await?;
        Ok(QueueDepth { wait, active })
    }
}
