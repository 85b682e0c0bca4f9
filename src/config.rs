use std::{
    net::{SocketAddr, ToSocketAddrs},
    num::NonZeroU32,
};

use clap::Parser;

use crate::endpoint::ratelimit::{Limiter, token_bucket};

/// Process configuration, from flags with `VAULT_*` environment fallbacks.
#[derive(Debug, Clone, Parser)]
#[command(name = "vaultd", about = "Password hashing service over HTTP/JSON and gRPC")]
pub struct Config {
    /// HTTP listen address
    #[arg(long = "http", env = "VAULT_HTTP_ADDR", default_value = ":8080", value_parser = parse_listen_addr)]
    pub http_addr: SocketAddr,

    /// gRPC listen address
    #[arg(long = "grpc", env = "VAULT_GRPC_ADDR", default_value = ":8081", value_parser = parse_listen_addr)]
    pub grpc_addr: SocketAddr,

    /// Calls per second allowed across both transports; unlimited when unset
    #[arg(long, env = "VAULT_RATE_LIMIT")]
    pub rate_limit: Option<NonZeroU32>,

    /// Token bucket capacity; defaults to the rate limit
    #[arg(long, env = "VAULT_RATE_BURST", requires = "rate_limit")]
    pub rate_burst: Option<NonZeroU32>,

    /// Log filter used when `RUST_LOG` is not set
    #[arg(long, env = "VAULT_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Emit logs as JSON lines
    #[arg(long, env = "VAULT_LOG_JSON")]
    pub log_json: bool,
}

impl Config {
    /// Load `.env` if present, then parse the command line.
    pub fn load() -> Result<Self, dotenvy::Error> {
        match dotenvy::dotenv() {
            Ok(_) => {}
            Err(e) if e.not_found() => {}
            Err(e) => return Err(e),
        }
        Ok(Self::parse())
    }

    pub fn rate_limiter(&self) -> Option<Limiter> {
        self.rate_limit
            .map(|rate| token_bucket(rate, self.rate_burst.unwrap_or(rate)))
    }
}

/// Accepts `host:port`, or `:port` for every interface.
fn parse_listen_addr(value: &str) -> Result<SocketAddr, String> {
    let value = match value.strip_prefix(':') {
        Some(port) => format!("0.0.0.0:{port}"),
        None => value.to_string(),
    };

    value
        .to_socket_addrs()
        .map_err(|e| format!("invalid listen address `{value}`: {e}"))?
        .next()
        .ok_or_else(|| format!("`{value}` did not resolve to an address"))
}
