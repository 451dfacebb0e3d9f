//! Outbound calls to the quote provider.
//!
//! # Responsibilities
//! - Issue a single GET with region/symbol query parameters and auth headers
//! - Enforce the configured outbound timeout
//! - Hand the transport result to the classifier, never to the handler raw

use std::time::Duration;

use crate::config::UpstreamConfig;
use crate::upstream::types::{classify, FetchResult, UpstreamOutcome};

/// Shared client for the provider's quote endpoint.
#[derive(Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    config: UpstreamConfig,
}

impl UpstreamClient {
    /// Build the client with the configured outbound timeout.
    pub fn new(config: UpstreamConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { http, config })
    }

    /// Fetch and classify a quote for one validated request.
    ///
    /// Single attempt, no retries. Every failure mode comes back as an
    /// `UpstreamOutcome`; this never surfaces an error to the caller.
    pub async fn fetch_quote(&self, region: &str, symbol: &str) -> UpstreamOutcome {
        classify(self.fetch(region, symbol).await)
    }

    async fn fetch(&self, region: &str, symbol: &str) -> FetchResult {
        let response = self
            .http
            .get(&self.config.base_url)
            .query(&[("region", region), ("symbol", symbol)])
            .header("x-rapidapi-host", &self.config.api_host)
            .header("x-rapidapi-key", &self.config.api_key)
            .send()
            .await;

        let response = match response {
            Ok(r) => r,
            Err(e) => {
                tracing::error!(region, symbol, error = %e, "Upstream call failed");
                return FetchResult::Failed {
                    message: e.to_string(),
                };
            }
        };

        if let Err(e) = response.error_for_status_ref() {
            tracing::error!(region, symbol, status = %response.status(), "Upstream returned error status");
            return FetchResult::Failed {
                message: e.to_string(),
            };
        }

        let content_length = response.content_length();
        match response.bytes().await {
            Ok(body) => FetchResult::Completed {
                content_length,
                body: body.to_vec(),
            },
            Err(e) => {
                tracing::error!(region, symbol, error = %e, "Failed to read upstream body");
                FetchResult::Failed {
                    message: e.to_string(),
                }
            }
        }
    }
}
