//! Integration tests for Storedash.
//!
//! The tests run the admin HTTP clients against stub servers started
//! in-process on an ephemeral port, so they need no external services.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p storedash-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `api_client` - Dashboard API calls, envelopes and normalization
//! - `insights_client` - AI insights requests against a stub completions endpoint

use axum::Router;
use tokio::net::TcpListener;

/// A stub server bound to `127.0.0.1` on an ephemeral port.
///
/// The server task is aborted on drop.
pub struct StubServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl StubServer {
    /// Serve `router` until the stub is dropped.
    ///
    /// # Panics
    ///
    /// Panics if no local port can be bound.
    pub async fn start(router: Router) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind stub server");
        let addr = listener.local_addr().expect("Stub server has no address");
        let handle = tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });
        Self {
            base_url: format!("http://{addr}"),
            handle,
        }
    }

    /// `http://127.0.0.1:<port>`, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for `path`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl Drop for StubServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
