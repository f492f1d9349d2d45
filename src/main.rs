//! bull-scaler - Bull queue depth as an external scaling metric
//!
//! This is the composition root that wires the Redis gateway into the
//! gRPC service polled by the autoscaling controller.

use std::sync::Arc;

use bull_scaler::adapters::inbound::ScalerServer;
use bull_scaler::adapters::outbound::RedisQueueStore;
use bull_scaler::application::ScalerService;
use bull_scaler::config::load_config;
use bull_scaler::domain::ports::QueueStore;
use bull_scaler::infrastructure::shutdown_signal;
use tracing_subscriber::fmt::format::FmtSpan;

/// Upper bound on concurrently served calls per controller connection.
const MAX_IN_FLIGHT_CALLS: usize = 10;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration from environment; missing store coordinates are
    // fatal before anything is served.
    let cfg = load_config()?;

    // Setup logging
    let log_level = if cfg.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_span_events(FmtSpan::CLOSE)
        .init();

    tracing::info!(
        "starting bull-scaler listen={} redis={}:{}",
        cfg.listen_addr,
        cfg.redis_host,
        cfg.redis_port
    );

    // ===== COMPOSITION ROOT =====

    // Queue store (Redis). A failed connection or probe leaves the
    // service running with no store; every RPC then answers with the
    // safe default instead of crashing or erroring.
    let store: Option<Arc<dyn QueueStore>> =
        match RedisQueueStore::connect(&cfg.redis_host, cfg.redis_port).await {
            Ok(store) => match store.probe().await {
                Ok(()) => Some(Arc::new(store) as Arc<dyn QueueStore>),
                Err(e) => {
                    tracing::error!(
                        "Redis probe failed at {}:{}: {}",
                        cfg.redis_host,
                        cfg.redis_port,
                        e
                    );
                    None
                }
            },
            Err(e) => {
                tracing::error!(
                    "failed to connect to Redis at {}:{}: {}",
                    cfg.redis_host,
                    cfg.redis_port,
                    e
                );
                None
            }
        };

    // Application service and inbound adapter
    let service = Arc::new(ScalerService::new(store));
    let server = ScalerServer::new(service);

    let addr = cfg.listen_addr.parse()?;
    tracing::info!("gRPC server listening on {}", addr);

    tonic::transport::Server::builder()
        .concurrency_limit_per_connection(MAX_IN_FLIGHT_CALLS)
        .add_service(server.into_service())
        .serve_with_shutdown(addr, shutdown_signal())
        .await?;

    tracing::info!("bull-scaler stopped");
    Ok(())
}
