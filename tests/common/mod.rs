//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::time::Duration;

use fundas_catalog::config::AppConfig;
use fundas_catalog::lifecycle::Shutdown;
use fundas_catalog::HttpServer;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// A catalog server running on an ephemeral local port.
pub struct TestServer {
    pub addr: SocketAddr,
    shutdown: Shutdown,
    handle: JoinHandle<Result<(), std::io::Error>>,
}

impl TestServer {
    /// Boot a server with the given config on `127.0.0.1:0`.
    pub async fn start(config: AppConfig) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let shutdown = Shutdown::new();
        let server = HttpServer::new(config);
        let server_shutdown = shutdown.subscribe();
        let handle = tokio::spawn(async move { server.run(listener, server_shutdown).await });

        Self {
            addr,
            shutdown,
            handle,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Trigger shutdown and wait for the server task to finish.
    pub async fn stop(self) {
        self.shutdown.trigger();
        let result = tokio::time::timeout(Duration::from_secs(5), self.handle)
            .await
            .expect("server did not stop in time")
            .expect("server task panicked");
        assert!(result.is_ok(), "server returned error: {:?}", result);
    }
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
