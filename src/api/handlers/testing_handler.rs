use axum::{Json, extract::State, response::IntoResponse};
use tracing::warn;

use crate::{
    api::{app_state::AppState, dto::entry_dto::SuccessResponse},
    error::AppError,
};

/// Restore the seed entries. Only routed when `store.enable_test_reset` is set.
pub async fn reset_entries(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    warn!("Resetting entry store to seed data");

    state.entry_service.reset().await?;

    Ok(Json(SuccessResponse::ok()))
}
