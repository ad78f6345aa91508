use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use crate::api::dto::ApiResponse;
use crate::api::util::json::to_json;
use crate::app_state::AppState;
use crate::domain::pool::dto::pool_build_request::NodePoolBuildRequest;
use crate::domain::pool::model::node_pool_request::NodePoolRequest;
use crate::errors::AppError;

pub struct NodePoolController;

impl NodePoolController {
    pub async fn build_request(
        State(state): State<AppState>,
        payload: Result<Json<NodePoolBuildRequest>, JsonRejection>,
    ) -> Result<Json<ApiResponse<NodePoolRequest>>, AppError> {
        let Json(payload) = payload.map_err(|e| AppError::BodyParsingError(e.body_text()))?;
        to_json(state.node_pool_service.build_node_pool_payload(payload).await)
    }
}
