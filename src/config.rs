//! Process-wide configuration
//!
//! Resolved once from environment variables at startup. The store
//! coordinates are required and terminate startup when missing or out of
//! range: the service must never start in a half-configured state.

use anyhow::{bail, Context};

#[derive(Debug, Clone)]
pub struct Config {
    /// Redis host the queue lists live on
    pub redis_host: String,
    /// Redis port (1-65535)
    pub redis_port: u16,
    /// gRPC listen address polled by the autoscaling controller
    pub listen_addr: String,
    /// Verbose logging toggle
    pub debug: bool,
}

pub fn load_config() -> anyhow::Result<Config> {
    let redis_host = required_env("REDIS_HOST")?;
    let redis_port = parse_port(&required_env("REDIS_PORT")?)?;

    let listen_addr = std::env::var("BULL_SCALER_LISTEN_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:8080".to_string());

    let debug = std::env::var("DEBUG").is_ok();

    Ok(Config {
        redis_host,
        redis_port,
        listen_addr,
        debug,
    })
}

fn required_env(name: &str) -> anyhow::Result<String> {
    match std::env::var(name) {
        Ok(val) if !val.trim().is_empty() => Ok(val),
        _ => bail!("missing required env var: {}", name),
    }
}

fn parse_port(raw: &str) -> anyhow::Result<u16> {
    let port: u16 = raw
        .trim()
        .parse()
        .with_context(|| format!("REDIS_PORT must be an integer in 1-65535, got '{}'", raw))?;
    if port == 0 {
        bail!("REDIS_PORT must be in 1-65535, got 0");
    }
    Ok(port)
}
