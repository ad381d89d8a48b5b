use std::sync::Arc;

use tokio::net::TcpListener;
use wardrobe_store::{Document, JsonFileDocument, RecordStore};

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::router::{build_router, AppState, SharedStore};

/// Wardrobe HTTP server.
pub struct WardrobeServer {
    config: ServerConfig,
}

impl WardrobeServer {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Open the configured item document, creating it first if allowed.
    pub fn open_store(&self) -> ServerResult<SharedStore> {
        let document = JsonFileDocument::new(&self.config.data_file);
        if self.config.create_if_missing {
            document.initialize()?;
        }
        let document: Box<dyn Document> = Box::new(document);
        Ok(Arc::new(RecordStore::new(document)))
    }

    /// Build the router over `store` (useful for testing).
    pub fn router(&self, store: SharedStore) -> axum::Router {
        build_router(AppState::new(store))
    }

    /// Start serving requests.
    pub async fn serve(self) -> ServerResult<()> {
        let store = self.open_store()?;
        let app = self.router(store);
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!(
            data_file = %self.config.data_file.display(),
            "wardrobe server listening on {}",
            self.config.bind_addr
        );
        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn server_construction() {
        let server = WardrobeServer::new(ServerConfig::default());
        assert_eq!(server.config().bind_addr, "127.0.0.1:3000".parse().unwrap());
    }

    #[test]
    fn open_store_initializes_missing_document() {
        let dir = tempfile::tempdir().unwrap();
        let data_file = dir.path().join("data").join("items.json");
        let server = WardrobeServer::new(ServerConfig {
            data_file: data_file.clone(),
            ..ServerConfig::default()
        });

        let store = server.open_store().unwrap();
        assert!(data_file.exists());
        assert_eq!(store.list_active().unwrap().count, 0);
        let _router = server.router(store);
    }

    #[test]
    fn open_store_without_create_leaves_file_absent() {
        let dir = tempfile::tempdir().unwrap();
        let data_file: PathBuf = dir.path().join("items.json");
        let server = WardrobeServer::new(ServerConfig {
            data_file: data_file.clone(),
            create_if_missing: false,
            ..ServerConfig::default()
        });

        let store = server.open_store().unwrap();
        assert!(!data_file.exists());
        assert!(store.list_active().is_err());
    }
}
