use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use crate::api::dto::ApiResponse;
use crate::api::util::json::to_json;
use crate::app_state::AppState;
use crate::domain::pool::dto::pool_build_request::MachinePoolBuildRequest;
use crate::domain::pool::model::machine_pool_request::MachinePoolRequest;
use crate::errors::AppError;

pub struct MachinePoolController;

impl MachinePoolController {
    pub async fn build_request(
        State(state): State<AppState>,
        payload: Result<Json<MachinePoolBuildRequest>, JsonRejection>,
    ) -> Result<Json<ApiResponse<MachinePoolRequest>>, AppError> {
        let Json(payload) = payload.map_err(|e| AppError::BodyParsingError(e.body_text()))?;
        to_json(state.machine_pool_service.build_machine_pool_payload(payload).await)
    }
}
