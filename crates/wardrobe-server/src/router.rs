use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;
use wardrobe_store::{Document, RecordStore, StoreResult};

use crate::error::{ServerError, ServerResult};
use crate::handler;

/// The record store as shared by every request.
pub type SharedStore = Arc<RecordStore<Box<dyn Document>>>;

#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
}

impl AppState {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// Run a store operation on the blocking pool. The store does
    /// synchronous file I/O under its own lock.
    pub async fn with_store<T, F>(&self, op: F) -> ServerResult<T>
    where
        F: FnOnce(&RecordStore<Box<dyn Document>>) -> StoreResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let store = Arc::clone(&self.store);
        let result = tokio::task::spawn_blocking(move || op(store.as_ref()))
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))?;
        Ok(result?)
    }
}

/// Build the axum router with all clothing item endpoints.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handler::health_handler))
        .route("/items", get(handler::list_items).post(handler::create_item))
        .route(
            "/items/:id",
            get(handler::get_item)
                .patch(handler::update_item)
                .delete(handler::delete_item),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
