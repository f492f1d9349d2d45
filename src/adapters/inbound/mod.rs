mod grpc_server;

pub use grpc_server::ScalerServer;
