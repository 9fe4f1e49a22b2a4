use super::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    #[serde(default = "default_dns_port")]
    pub dns_port: u16,

    /// Idle timeout for TCP client connections, in seconds.
    #[serde(default = "default_tcp_idle_timeout")]
    pub tcp_idle_timeout: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            dns_port: default_dns_port(),
            tcp_idle_timeout: default_tcp_idle_timeout(),
        }
    }
}

impl ServerConfig {
    /// Listening address built from `bind_address` and `dns_port`.
    ///
    /// Accepts bare IPv4 and IPv6 addresses (`0.0.0.0`, `::`).
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self.bind_address.parse().map_err(|_| {
            ConfigError::Validation(format!("Invalid bind address '{}'", self.bind_address))
        })?;
        Ok(SocketAddr::new(ip, self.dns_port))
    }
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

fn default_dns_port() -> u16 {
    53
}

fn default_tcp_idle_timeout() -> u64 {
    10
}
