//! API 模块
//!
//! 提供 REST API 支持。

pub mod app_state;
pub mod dto;
pub mod extract;
pub mod handlers;
pub mod routes;
pub mod validation;

use crate::api::app_state::AppState;
use crate::observability::{create_observability_router, metrics_middleware};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub fn create_router(app_state: AppState) -> Router {
    let mut api = Router::new().merge(routes::entry_routes::create_entry_router());
    if app_state.test_reset_enabled {
        tracing::warn!("test-reset route enabled");
        api = api.merge(routes::testing_routes::create_testing_router());
    }

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .nest("/api", api)
        .merge(create_observability_router())
        .layer(axum::middleware::from_fn_with_state(
            app_state.clone(),
            metrics_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state)
}
