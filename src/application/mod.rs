mod scaler_service;

pub use scaler_service::{ScalerService, METRIC_NAME, METRIC_TARGET_SIZE};
