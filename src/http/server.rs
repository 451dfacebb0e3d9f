//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with the price handler and 404 fallbacks
//! - Wire up middleware (tracing, timeout, request ID)
//! - Serve on a provided listener with graceful shutdown

use std::sync::Arc;
use std::time::Duration;

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServiceConfig;
use crate::http::price;
use crate::upstream::UpstreamClient;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServiceConfig>,
    pub upstream: UpstreamClient,
}

/// HTTP server for the price proxy.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServiceConfig) -> Result<Self, reqwest::Error> {
        let upstream = UpstreamClient::new(config.upstream.clone())?;
        let state = AppState {
            config: Arc::new(config),
            upstream,
        };
        Ok(Self {
            router: Self::build_router(state),
        })
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// Wrong-method requests on the price route fall back to the same 404
    /// body as unmatched paths; the routed surface is exactly one endpoint.
    fn build_router(state: AppState) -> Router {
        let request_timeout = Duration::from_secs(state.config.timeouts.request_secs);
        Router::new()
            .route("/stock/v1/get-price", get(price::get_price))
            .fallback(price::not_found)
            .method_not_allowed_fallback(price::not_found)
            .with_state(state)
            .layer(TimeoutLayer::new(request_timeout))
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server until the shutdown channel fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
