//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use price_proxy::config::ServiceConfig;
use price_proxy::http::HttpServer;
use price_proxy::lifecycle::Shutdown;

/// A canned upstream response with full control over the status line,
/// declared content length, and body bytes.
#[derive(Clone)]
pub struct CannedResponse {
    pub status: u16,
    pub content_length: usize,
    pub body: String,
}

impl CannedResponse {
    pub fn ok(body: &str) -> Self {
        Self {
            status: 200,
            content_length: body.len(),
            body: body.to_string(),
        }
    }

    /// Transport success with a zero declared length (the provider's
    /// "no data" signal).
    pub fn empty() -> Self {
        Self {
            status: 200,
            content_length: 0,
            body: String::new(),
        }
    }
}

/// Start a mock quote provider that serves responses from `f`.
pub async fn start_mock_upstream<F>(f: F) -> SocketAddr
where
    F: Fn() -> CannedResponse + Send + Sync + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let f = Arc::new(f);

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let f = f.clone();
                    tokio::spawn(async move {
                        // Drain the request head before answering.
                        let mut buf = [0u8; 4096];
                        let _ = socket.read(&mut buf).await;

                        let canned = f();
                        let status_text = match canned.status {
                            200 => "200 OK",
                            404 => "404 Not Found",
                            500 => "500 Internal Server Error",
                            503 => "503 Service Unavailable",
                            _ => "200 OK",
                        };
                        let response = format!(
                            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status_text, canned.content_length, canned.body
                        );
                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}

/// Start the proxy on an ephemeral port, pointed at the given upstream.
pub async fn start_proxy(upstream_addr: SocketAddr) -> (SocketAddr, Shutdown) {
    let mut config = ServiceConfig::default();
    config.listener.bind_address = "127.0.0.1:0".to_string();
    config.upstream.base_url = format!("http://{}/quote", upstream_addr);
    config.upstream.api_host = "mock-upstream".to_string();
    config.upstream.api_key = "test-key".to_string();
    config.upstream.timeout_secs = 2;

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config).unwrap();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let rx = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });

    (addr, shutdown)
}

/// Non-pooled client so tests never share connections across servers.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
