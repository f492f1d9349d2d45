//! Value Objects - Immutable domain primitives
//!
//! Value objects are identified by their value rather than identity.
//! The raw string metadata attached to a request is turned into a
//! strongly-typed `QueueSpec` here; nothing downstream sees raw strings.

use std::collections::HashMap;
use thiserror::Error;

/// Metadata key naming the wait-queue list.
pub const META_WAIT_LIST: &str = "waitList";
/// Metadata key naming the active-queue list.
pub const META_ACTIVE_LIST: &str = "activeList";
/// Metadata key carrying the capacity cap.
pub const META_MAX_PODS: &str = "maxPods";

/// Per-request validation failure. Scoped to a single request; surfaced
/// to the controller as an invalid-argument status.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MetadataError {
    #[error("missing or empty scaler metadata key '{0}'")]
    Missing(&'static str),
    #[error("scaler metadata key 'maxPods' must be a positive integer, got '{0}'")]
    InvalidCap(String),
}

/// Validated queue configuration for one request.
///
/// Parsed from the scaler metadata on the incoming target reference.
/// Values are trimmed of leading/trailing whitespace before validation;
/// a key that is absent or empty after trimming is rejected, and the cap
/// must parse as a positive integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueSpec {
    /// List key holding jobs waiting for pickup
    pub wait_list: String,
    /// List key holding jobs currently processing
    pub active_list: String,
    /// Ceiling on the reported metric (maximum replicas worth of work)
    pub max_pods: i64,
}

impl QueueSpec {
    /// Parse and validate the raw metadata mapping.
    ///
    /// Pure with respect to its input; no shared state is touched.
    pub fn from_metadata(metadata: &HashMap<String, String>) -> Result<Self, MetadataError> {
        let wait_list = required(metadata, META_WAIT_LIST)?;
        let active_list = required(metadata, META_ACTIVE_LIST)?;

        let raw_cap = required(metadata, META_MAX_PODS)?;
        let max_pods: i64 = raw_cap
            .parse()
            .map_err(|_| MetadataError::InvalidCap(raw_cap.clone()))?;
        if max_pods <= 0 {
            return Err(MetadataError::InvalidCap(raw_cap));
        }

        Ok(Self {
            wait_list,
            active_list,
            max_pods,
        })
    }
}

fn required(
    metadata: &HashMap<String, String>,
    key: &'static str,
) -> Result<String, MetadataError> {
    match metadata.get(key).map(|val| val.trim()) {
        Some(val) if !val.is_empty() => Ok(val.to_string()),
        _ => Err(MetadataError::Missing(key)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_valid_metadata() {
        let spec = QueueSpec::from_metadata(&metadata(&[
            ("waitList", "bull:video:wait"),
            ("activeList", "bull:video:active"),
            ("maxPods", "8"),
        ]))
        .unwrap();

        assert_eq!(spec.wait_list, "bull:video:wait");
        assert_eq!(spec.active_list, "bull:video:active");
        assert_eq!(spec.max_pods, 8);
    }

    #[test]
    fn test_missing_wait_list() {
        let err = QueueSpec::from_metadata(&metadata(&[
            ("activeList", "bull:video:active"),
            ("maxPods", "8"),
        ]))
        .unwrap_err();
        assert_eq!(err, MetadataError::Missing(META_WAIT_LIST));
    }

    #[test]
    fn test_missing_active_list() {
        let err = QueueSpec::from_metadata(&metadata(&[
            ("waitList", "bull:video:wait"),
            ("maxPods", "8"),
        ]))
        .unwrap_err();
        assert_eq!(err, MetadataError::Missing(META_ACTIVE_LIST));
    }

    #[test]
    fn test_missing_cap() {
        let err = QueueSpec::from_metadata(&metadata(&[
            ("waitList", "bull:video:wait"),
            ("activeList", "bull:video:active"),
        ]))
        .unwrap_err();
        assert_eq!(err, MetadataError::Missing(META_MAX_PODS));
    }

    #[test]
    fn test_empty_value_is_missing() {
        let err = QueueSpec::from_metadata(&metadata(&[
            ("waitList", ""),
            ("activeList", "bull:video:active"),
            ("maxPods", "8"),
        ]))
        .unwrap_err();
        assert_eq!(err, MetadataError::Missing(META_WAIT_LIST));
    }

    #[test]
    fn test_whitespace_only_value_is_missing() {
        let err = QueueSpec::from_metadata(&metadata(&[
            ("waitList", "   "),
            ("activeList", "bull:video:active"),
            ("maxPods", "8"),
        ]))
        .unwrap_err();
        assert_eq!(err, MetadataError::Missing(META_WAIT_LIST));
    }

    #[test]
    fn test_values_are_trimmed() {
        let spec = QueueSpec::from_metadata(&metadata(&[
            ("waitList", "  bull:video:wait  "),
            ("activeList", "bull:video:active"),
            ("maxPods", " 4 "),
        ]))
        .unwrap();
        assert_eq!(spec.wait_list, "bull:video:wait");
        assert_eq!(spec.max_pods, 4);
    }

    #[test]
    fn test_cap_zero_rejected() {
        let err = QueueSpec::from_metadata(&metadata(&[
            ("waitList", "w"),
            ("activeList", "a"),
            ("maxPods", "0"),
        ]))
        .unwrap_err();
        assert!(matches!(err, MetadataError::InvalidCap(_)));
    }

    #[test]
    fn test_cap_negative_rejected() {
        let err = QueueSpec::from_metadata(&metadata(&[
            ("waitList", "w"),
            ("activeList", "a"),
            ("maxPods", "-3"),
        ]))
        .unwrap_err();
        assert!(matches!(err, MetadataError::InvalidCap(_)));
    }

    #[test]
    fn test_cap_non_numeric_rejected() {
        for bad in ["ten", "4.5", "1e3"] {
            let err = QueueSpec::from_metadata(&metadata(&[
                ("waitList", "w"),
                ("activeList", "a"),
                ("maxPods", bad),
            ]))
            .unwrap_err();
            assert!(
                matches!(err, MetadataError::InvalidCap(_)),
                "'{}' must be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_error_messages_name_the_offender() {
        let err = QueueSpec::from_metadata(&metadata(&[
            ("waitList", "w"),
            ("activeList", "a"),
            ("maxPods", "lots"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("lots"));

        let err = QueueSpec::from_metadata(&HashMap::new()).unwrap_err();
        assert!(err.to_string().contains("waitList"));
    }
}
