//! Testing Routes
//!
//! 仅供测试环境使用的路由，生产环境不挂载。

use crate::api::handlers::testing_handler::*;
use axum::{Router, routing::post};

use crate::api::app_state::AppState;

/// 创建测试路由器
pub fn create_testing_router() -> Router<AppState> {
    Router::new().route("/test-reset", post(reset_entries))
}
