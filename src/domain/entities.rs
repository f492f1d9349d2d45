//! Domain Entities - Core business objects
//!
//! Everything here is request-scoped and transient. These types have no
//! external dependencies and contain only queue-depth logic.

use std::collections::HashMap;

/// The autoscaled workload an incoming request concerns.
///
/// Supplied by the external controller on every call, immutable per
/// request, never persisted. The metadata mapping stays raw at this
/// boundary; it is parsed into a validated
/// [`QueueSpec`](crate::domain::value_objects::QueueSpec) before use.
#[derive(Debug, Clone, Default)]
pub struct ScalingTarget {
    /// Workload name assigned by the controller
    pub name: String,
    /// Namespace the workload runs in
    pub namespace: String,
    /// Free-form per-request configuration keys
    pub metadata: HashMap<String, String>,
}

/// Lengths of the two Bull lists backing one queue.
///
/// `wait` holds jobs pending pickup, `active` holds jobs currently being
/// processed; their sum is the queue depth the controller scales on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueDepth {
    pub wait: i64,
    pub active: i64,
}

impl QueueDepth {
    /// Total outstanding jobs.
    pub fn total(&self) -> i64 {
        self.wait.saturating_add(self.active)
    }

    /// Whether there is any work at all.
    pub fn is_active(&self) -> bool {
        self.total() > 0
    }

    /// Total depth capped at `cap`, so the reported metric never asks the
    /// controller for more replicas than the queue is allowed to use.
    pub fn capped(&self, cap: i64) -> i64 {
        self.total().min(cap)
    }
}
