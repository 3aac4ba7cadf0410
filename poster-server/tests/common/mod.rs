//! Test server harness for integration tests.
//!
//! Spins up the real router on a random port so tests can drive it with an
//! HTTP client.

use std::net::SocketAddr;

use poster_server::{build_router, AppState, ServerConfig};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// A test server instance with control handles.
pub struct TestServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
    handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a server with the default configuration.
    pub async fn start() -> Self {
        Self::start_with(ServerConfig::default()).await
    }

    /// Start a server with the given configuration.
    pub async fn start_with(config: ServerConfig) -> Self {
        Self::start_with_state(AppState::new, config).await
    }

    /// Start a server on a random available port, building its state from
    /// the configuration.
    ///
    /// # Panics
    ///
    /// Panics if no port is available or server fails to bind.
    pub async fn start_with_state(
        make_state: impl FnOnce(ServerConfig) -> AppState,
        mut config: ServerConfig,
    ) -> Self {
        let port = portpicker::pick_unused_port().expect("no available port");
        config.addr = SocketAddr::from(([127, 0, 0, 1], port));

        let listener = TcpListener::bind(config.addr).await.expect("failed to bind");
        let actual_addr = listener.local_addr().expect("failed to get local addr");
        let app = build_router(make_state(config));

        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        let handle = tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await
                .expect("server error");
        });

        Self {
            addr: actual_addr,
            shutdown_tx: Some(shutdown_tx),
            handle,
        }
    }

    /// Absolute URL for a path on this server.
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Gracefully shut down the server.
    pub async fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        let _ = tokio::time::timeout(tokio::time::Duration::from_secs(5), self.handle).await;
    }
}

/// HTTP client that does not follow redirects.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("client")
}
