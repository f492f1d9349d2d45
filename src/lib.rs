//! bull-scaler Library
//!
//! This module exposes the scaler components for use in integration tests
//! and as a library.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

/// Generated protobuf types and gRPC service stubs.
pub mod proto {
    tonic::include_proto!("externalscaler");
}

// Re-export commonly used types
pub use application::{ScalerService, METRIC_NAME, METRIC_TARGET_SIZE};
pub use config::load_config;
pub use domain::entities::{QueueDepth, ScalingTarget};
pub use domain::ports::{QueueStore, StoreError};
pub use domain::value_objects::{MetadataError, QueueSpec};
