//! Configuration model loaded from external sources.

use serde::Deserialize;

fn default_busy_timeout_secs() -> u64 {
    30
}

fn default_max_connections() -> u32 {
    10
}

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
    /// Seconds SQLite waits on a locked database before failing.
    #[serde(default = "default_busy_timeout_secs")]
    pub db_busy_timeout_secs: u64,
    #[serde(default = "default_max_connections")]
    pub db_max_connections: u32,
}
