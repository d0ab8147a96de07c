use std::sync::Arc;

use tokio::net::TcpListener;

use atrium_store::ContentStore;

use crate::config::ServerConfig;
use crate::error::{ApiError, ApiResult};
use crate::router::build_router;
use crate::state::AppState;

/// The Atrium content API server.
///
/// Owns the config and the store handle; the store is constructed once by
/// the caller at process startup and shared from there.
pub struct SiteServer {
    config: ServerConfig,
    state: AppState,
}

impl SiteServer {
    pub fn new(config: ServerConfig, store: Arc<dyn ContentStore>) -> Self {
        Self {
            config,
            state: AppState::new(store),
        }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(self.state.clone(), self.config.enable_redirects)
    }

    /// Bind and serve until the process exits.
    pub async fn serve(self) -> ApiResult<()> {
        let app = build_router(self.state, self.config.enable_redirects);
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!("atrium server listening on {}", self.config.bind_addr);
        axum::serve(listener, app)
            .await
            .map_err(|e| ApiError::Internal(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atrium_store::InMemoryStore;

    #[test]
    fn server_construction() {
        let server = SiteServer::new(
            ServerConfig::default(),
            Arc::new(InMemoryStore::with_sample_content()),
        );
        assert_eq!(server.config().bind_addr, "127.0.0.1:5000".parse().unwrap());
    }

    #[test]
    fn router_builds() {
        let server = SiteServer::new(ServerConfig::default(), Arc::new(InMemoryStore::new()));
        let _router = server.router();
    }
}
