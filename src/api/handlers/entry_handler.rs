//! Entry API Handlers
//!
//! HTTP handlers for knowledge entry CRUD operations.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::debug;

use crate::{
    api::{app_state::AppState, dto::entry_dto::*, extract::JsonBody},
    error::AppError,
};

pub async fn list_entries(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    debug!("Listing entries");

    let entries = state.entry_service.list().await?;
    let response: Vec<EntryResponse> = entries.into_iter().map(EntryResponse::from).collect();

    Ok(Json(response))
}

pub async fn get_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Getting entry: {}", id);

    let entry = state.entry_service.get(&id).await?;

    Ok(Json(EntryResponse::from(entry)))
}

pub async fn create_entry(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreateEntryRequest>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Creating entry: {:?}", request.title);

    let input = request.into_new_entry()?;
    let entry = state.entry_service.create(input).await?;
    state.metrics.record_entry_created();

    Ok((StatusCode::CREATED, Json(EntryResponse::from(entry))))
}

pub async fn update_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(request): JsonBody<UpdateEntryRequest>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Updating entry: {}", id);

    let patch = request.into_patch()?;
    let entry = state.entry_service.update(&id, patch).await?;
    state.metrics.record_entry_updated();

    Ok(Json(EntryResponse::from(entry)))
}

pub async fn delete_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Deleting entry: {}", id);

    state.entry_service.delete(&id).await?;
    state.metrics.record_entry_deleted();

    Ok(Json(SuccessResponse::ok()))
}
