//! Machine pool routes (e.g., /api/v1/machine-pools/*)

use axum::{routing::post, Router};
use crate::api::controller::machine_pool::MachinePoolController;
use crate::app_state::AppState;

pub fn machine_pool_routes() -> Router<AppState> {
    Router::new()
        .route("/request", post(MachinePoolController::build_request))
}
