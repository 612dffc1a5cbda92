//! Shared utilities for integration testing.

use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use arith_service::config::ServiceConfig;
use arith_service::http::HttpServer;
use arith_service::lifecycle::Shutdown;

/// A running service bound to an ephemeral local port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub handle: JoinHandle<Result<(), std::io::Error>>,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// Start the service with default config on 127.0.0.1:0.
pub async fn spawn_server() -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let mut config = ServiceConfig::default();
    config.listener.bind_address = addr.to_string();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    let server_shutdown = shutdown.listener();
    let handle = tokio::spawn(async move { server.run(listener, server_shutdown).await });

    TestServer {
        addr,
        shutdown,
        handle,
    }
}

/// Client that never reuses connections and ignores proxy env vars.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
