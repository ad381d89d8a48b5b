use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use wardrobe_types::ItemId;

use crate::dto::{ClothingItemDto, ClothingItemListDto, HealthResponse};
use crate::error::{ServerError, ServerResult};
use crate::router::AppState;
use crate::validation::{CreateClothingItemRequest, UpdateClothingItemRequest};

/// Health check handler.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}

/// GET /items
pub async fn list_items(State(state): State<AppState>) -> ServerResult<Json<ClothingItemListDto>> {
    let active = state.with_store(|store| store.list_active()).await?;
    Ok(Json(ClothingItemListDto::from(active)))
}

/// GET /items/:id
pub async fn get_item(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ServerResult<Json<ClothingItemDto>> {
    let id = parse_item_id(&raw_id)?;
    let item = state.with_store(move |store| store.get_active(&id)).await?;
    Ok(Json(ClothingItemDto::from(&item)))
}

/// POST /items
///
/// Any `id` or `deleted_at` in the body is ignored; the store assigns both.
pub async fn create_item(
    State(state): State<AppState>,
    body: Result<Json<CreateClothingItemRequest>, JsonRejection>,
) -> ServerResult<(StatusCode, Json<ClothingItemDto>)> {
    let Json(request) = body.map_err(rejection_to_validation)?;
    let fields = request.validate().map_err(ServerError::Validation)?;
    let item = state.with_store(move |store| store.create(fields)).await?;
    Ok((StatusCode::CREATED, Json(ClothingItemDto::from(&item))))
}

/// PATCH /items/:id
pub async fn update_item(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: Result<Json<UpdateClothingItemRequest>, JsonRejection>,
) -> ServerResult<Json<ClothingItemDto>> {
    let id = parse_item_id(&raw_id)?;
    let Json(request) = body.map_err(rejection_to_validation)?;
    let patch = request.validate().map_err(ServerError::Validation)?;
    let item = state.with_store(move |store| store.update(&id, &patch)).await?;
    Ok(Json(ClothingItemDto::from(&item)))
}

/// DELETE /items/:id
pub async fn delete_item(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ServerResult<StatusCode> {
    let id = parse_item_id(&raw_id)?;
    state.with_store(move |store| store.soft_delete(&id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

fn parse_item_id(raw: &str) -> ServerResult<ItemId> {
    ItemId::parse(raw).map_err(|_| ServerError::UnknownItem(raw.to_string()))
}

fn rejection_to_validation(rejection: JsonRejection) -> ServerError {
    ServerError::Validation(vec![rejection.body_text()])
}
