//! Shared mock-server fixture for integration tests.

use tokio::runtime::Runtime;
use wiremock::{Mock, MockServer};

/// Owns a Tokio runtime and a Wiremock server so blocking clients can be
/// called from synchronous tests.
pub struct MockPlatform {
    server: MockServer,
    runtime: Runtime,
}

impl MockPlatform {
    /// Starts the runtime and the mock server.
    ///
    /// # Panics
    ///
    /// Panics if the Tokio runtime cannot be created.
    pub fn start() -> Self {
        let runtime =
            Runtime::new().unwrap_or_else(|error| panic!("failed to start runtime: {error}"));
        let server = runtime.block_on(MockServer::start());
        Self { server, runtime }
    }

    /// Mounts a mock on the server.
    pub fn mount(&self, mock: Mock) {
        self.runtime.block_on(mock.mount(&self.server));
    }

    /// Returns the server URL joined with `path`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.server.uri())
    }
}
