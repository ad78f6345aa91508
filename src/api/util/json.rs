use anyhow::Result;
use axum::Json;
use validator::ValidationErrors;

use crate::api::dto::ApiResponse;
use crate::errors::{internal_error, AppError};

pub fn to_json<T: serde::Serialize>(
    result: Result<T>
) -> Result<Json<ApiResponse<T>>, AppError> {
    match result {
        Ok(value) => Ok(Json(ApiResponse::ok(value))),
        Err(err) => match err.downcast::<ValidationErrors>() {
            Ok(errors) => Err(AppError::ValidationError(errors.to_string())),
            Err(err) => Err(internal_error(err)), // preserves original error string
        },
    }
}
