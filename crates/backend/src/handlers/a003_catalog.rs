use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use contracts::domain::a003_catalog::aggregate::{City, Sport};
use contracts::domain::common::ApiResponse;

use super::{api_error, ApiError};
use crate::domain::a003_catalog;
use crate::shared::state::AppState;

/// GET /api/cities
pub async fn cities(State(state): State<AppState>) -> Result<Json<ApiResponse<Vec<City>>>, ApiError> {
    match a003_catalog::service::list_cities(state.directory.as_ref()).await {
        Ok(v) => Ok(Json(ApiResponse::ok(v))),
        Err(e) => {
            tracing::error!("Failed to load cities: {}", e);
            Err(api_error(StatusCode::BAD_GATEWAY, "Lista orașelor nu este disponibilă"))
        }
    }
}

/// GET /api/sports
pub async fn sports(State(state): State<AppState>) -> Result<Json<ApiResponse<Vec<Sport>>>, ApiError> {
    match a003_catalog::service::list_sports(state.directory.as_ref()).await {
        Ok(v) => Ok(Json(ApiResponse::ok(v))),
        Err(e) => {
            tracing::error!("Failed to load sports: {}", e);
            Err(api_error(StatusCode::BAD_GATEWAY, "Lista sporturilor nu este disponibilă"))
        }
    }
}
