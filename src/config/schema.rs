//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the proxy.
//! All types derive Serde traits for deserialization from config files, and
//! every section has a full `Default` so a minimal config works.

use serde::{Deserialize, Serialize};

/// Root configuration for the price proxy.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ServiceConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Upstream quote provider settings.
    pub upstream: UpstreamConfig,

    /// Market regions accepted by the price endpoint.
    pub regions: RegionConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Upstream quote provider configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Quote endpoint URL.
    pub base_url: String,

    /// Value sent in the provider's host auth header.
    pub api_host: String,

    /// Value sent in the provider's key auth header.
    pub api_key: String,

    /// Outbound request timeout in seconds.
    ///
    /// The provider does not document a server-side limit; calls are cut
    /// off client-side after this long and reported as transport failures.
    pub timeout_secs: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: "https://apidojo-yahoo-finance-v1.p.rapidapi.com/market/get-quotes"
                .to_string(),
            api_host: "apidojo-yahoo-finance-v1.p.rapidapi.com".to_string(),
            api_key: String::new(),
            timeout_secs: 10,
        }
    }
}

/// Market regions accepted by the price endpoint, in the order they are
/// reported to callers.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RegionConfig {
    pub supported: Vec<String>,
}

impl Default for RegionConfig {
    fn default() -> Self {
        Self {
            supported: [
                "US", "BR", "AU", "CA", "FR", "DE", "HK", "IN", "IT", "ES", "GB", "SG",
            ]
            .iter()
            .map(|r| r.to_string())
            .collect(),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
