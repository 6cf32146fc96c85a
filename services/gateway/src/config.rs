//! Gateway configuration
//!
//! Command-line flags, each backed by an environment variable:
//! - `GATEWAY_HOST` / `--host`: bind address (default `0.0.0.0`)
//! - `GATEWAY_PORT` / `--port`: listen port (default `8080`)
//! - `LOG_FORMAT` / `--log-format`: `pretty` or `compact`
//! - `LOG_LEVEL` / `--log-level`: default filter when `RUST_LOG` is not set
//!
//! A single positional argument also sets the port and wins over `--port`.

use clap::{Parser, ValueEnum};
use std::net::{IpAddr, SocketAddr};

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    /// Human-readable multi-line output
    #[default]
    Pretty,
    /// Single-line output
    Compact,
}

#[derive(Debug, Clone, PartialEq, Parser)]
#[command(name = "gateway", version, about = "HTTP gateway for order book sessions")]
pub struct GatewayConfig {
    /// Listen port, overrides --port
    #[arg(value_name = "PORT", value_parser = clap::value_parser!(u16).range(1..))]
    pub port_override: Option<u16>,

    /// Bind address
    #[arg(long, env = "GATEWAY_HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Listen port
    #[arg(
        long,
        env = "GATEWAY_PORT",
        default_value_t = 8080,
        value_parser = clap::value_parser!(u16).range(1..)
    )]
    pub port: u16,

    #[arg(long, env = "LOG_FORMAT", value_enum, ignore_case = true, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,

    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl GatewayConfig {
    /// Parse the process arguments and environment, exiting with usage on error
    pub fn load() -> Self {
        Self::parse()
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port_override.unwrap_or(self.port))
    }
}
