use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub share: ShareConfig,
}

/// Remote article service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Base URL of the article service API.
    #[serde(default = "default_service_base_url")]
    pub base_url: String,
    /// Request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Share link settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareConfig {
    /// Public site origin used to build canonical article URLs
    /// (scheme + host + optional port).
    #[serde(default = "default_share_origin")]
    pub origin: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_service_base_url(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            origin: default_share_origin(),
        }
    }
}

fn default_service_base_url() -> String {
    "http://127.0.0.1:3000".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_share_origin() -> String {
    "http://127.0.0.1:3000".to_string()
}
