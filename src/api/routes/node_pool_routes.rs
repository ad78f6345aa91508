//! Node pool routes (e.g., /api/v1/node-pools/*)

use axum::{routing::post, Router};
use crate::api::controller::node_pool::NodePoolController;
use crate::app_state::AppState;

pub fn node_pool_routes() -> Router<AppState> {
    Router::new()
        .route("/request", post(NodePoolController::build_request))
}
