//! HTTP server for the wardrobe service.
//!
//! Exposes clothing item CRUD over a single JSON record store. Handlers
//! validate request bodies, call the store on the blocking pool, and map
//! store outcomes to status codes: soft-deleted items are indistinguishable
//! from missing ones (404).

pub mod config;
pub mod dto;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;
pub mod validation;

pub use config::ServerConfig;
pub use dto::{ClothingItemDto, ClothingItemListDto, HealthResponse};
pub use error::{ServerError, ServerResult};
pub use router::{build_router, AppState, SharedStore};
pub use server::WardrobeServer;
pub use validation::{CreateClothingItemRequest, UpdateClothingItemRequest};
