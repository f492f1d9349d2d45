//! Scaler gRPC Server - inbound adapter
//!
//! Implements the `ExternalScaler` gRPC interface the autoscaling
//! controller polls. Wire types are converted to domain types at this
//! boundary, and domain errors are translated to gRPC status codes:
//! invalid request metadata becomes `INVALID_ARGUMENT`, store trouble is
//! already absorbed into safe defaults by the application layer.

use std::sync::Arc;

use tokio_stream::wrappers::ReceiverStream;
use tonic::{Request, Response, Status};

use crate::application::{ScalerService, METRIC_NAME, METRIC_TARGET_SIZE};
use crate::domain::entities::ScalingTarget;
use crate::proto;
use crate::proto::external_scaler_server::{ExternalScaler, ExternalScalerServer};

/// gRPC implementation of the external scaler service.
pub struct ScalerServer {
    service: Arc<ScalerService>,
}

impl ScalerServer {
    /// Create a new scaler server.
    pub fn new(service: Arc<ScalerService>) -> Self {
        Self { service }
    }

    /// Get the tonic service for mounting on a gRPC server.
    pub fn into_service(self) -> ExternalScalerServer<Self> {
        ExternalScalerServer::new(self)
    }
}

impl From<proto::ScaledObjectRef> for ScalingTarget {
    fn from(object_ref: proto::ScaledObjectRef) -> Self {
        Self {
            name: object_ref.name,
            namespace: object_ref.namespace,
            metadata: object_ref.scaler_metadata,
        }
    }
}

#[tonic::async_trait]
impl ExternalScaler for ScalerServer {
    async fn is_active(
        &self,
        request: Request<proto::ScaledObjectRef>,
    ) -> Result<Response<proto::IsActiveResponse>, Status> {
        let target = ScalingTarget::from(request.into_inner());
        tracing::debug!(target = %target.name, namespace = %target.namespace, "IsActive");

        let result = self
            .service
            .is_active(&target)
            .await
            .map_err(|e| Status::invalid_argument(e.to_string()))?;

        Ok(Response::new(proto::IsActiveResponse { result }))
    }

    type StreamIsActiveStream = ReceiverStream<Result<proto::IsActiveResponse, Status>>;

    /// Push-based activity updates are not supported; the controller
    /// polls `IsActive` instead.
    async fn stream_is_active(
        &self,
        _request: Request<proto::ScaledObjectRef>,
    ) -> Result<Response<Self::StreamIsActiveStream>, Status> {
        Err(Status::unimplemented("StreamIsActive is not supported"))
    }

    async fn get_metric_spec(
        &self,
        _request: Request<proto::ScaledObjectRef>,
    ) -> Result<Response<proto::GetMetricSpecResponse>, Status> {
        tracing::debug!(
            metric_name = METRIC_NAME,
            target_size = METRIC_TARGET_SIZE,
            "GetMetricSpec"
        );

        Ok(Response::new(proto::GetMetricSpecResponse {
            metric_specs: vec![proto::MetricSpec {
                metric_name: METRIC_NAME.to_string(),
                target_size: METRIC_TARGET_SIZE,
            }],
        }))
    }

    async fn get_metrics(
        &self,
        request: Request<proto::GetMetricsRequest>,
    ) -> Result<Response<proto::GetMetricsResponse>, Status> {
        let target: ScalingTarget = request
            .into_inner()
            .scaled_object_ref
            .ok_or_else(|| Status::invalid_argument("scaledObjectRef is required"))?
            .into();
        tracing::debug!(target = %target.name, namespace = %target.namespace, "GetMetrics");

        let value = self
            .service
            .queue_length(&target)
            .await
            .map_err(|e| Status::invalid_argument(e.to_string()))?;

        Ok(Response::new(proto::GetMetricsResponse {
            metric_values: vec![proto::MetricValue {
                metric_name: METRIC_NAME.to_string(),
                metric_value: value,
            }],
        }))
    }
}
