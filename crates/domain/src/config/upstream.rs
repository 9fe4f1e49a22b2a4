use serde::{Deserialize, Serialize};

/// Servers the forwarding handler relays ordinary queries to, tried in order.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    #[serde(default = "default_servers")]
    pub servers: Vec<String>,

    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Retry over TCP when a UDP answer comes back truncated.
    #[serde(default = "default_true")]
    pub tcp_fallback: bool,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            servers: default_servers(),
            timeout_ms: default_timeout_ms(),
            tcp_fallback: default_true(),
        }
    }
}

fn default_servers() -> Vec<String> {
    vec!["8.8.8.8:53".to_string(), "1.1.1.1:53".to_string()]
}

fn default_timeout_ms() -> u64 {
    2000
}

fn default_true() -> bool {
    true
}
