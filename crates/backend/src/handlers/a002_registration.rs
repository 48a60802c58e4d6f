use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use contracts::domain::a002_registration::payload::{RegistrationCredentials, RegistrationPayload};
use contracts::domain::common::ApiResponse;

use super::{api_error, ApiError};
use crate::domain::a002_registration::service::{self, RegistrationError};
use crate::shared::state::AppState;

/// POST /api/register
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegistrationPayload>,
) -> Result<Json<ApiResponse<RegistrationCredentials>>, ApiError> {
    match service::register(state.directory.as_ref(), payload).await {
        Ok(credentials) => Ok(Json(ApiResponse::ok(credentials))),
        Err(e @ (RegistrationError::Invalid(_) | RegistrationError::Rejected(_))) => {
            Err(api_error(StatusCode::UNPROCESSABLE_ENTITY, e.to_string()))
        }
        Err(RegistrationError::Upstream(_)) => Err(api_error(
            StatusCode::BAD_GATEWAY,
            "Înregistrarea nu este disponibilă momentan. Încearcă din nou.",
        )),
    }
}
