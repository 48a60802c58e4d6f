pub mod a001_facility;
pub mod a002_registration;
pub mod a003_catalog;
pub mod a004_seo_page;

use axum::http::StatusCode;
use axum::Json;
use contracts::domain::common::ApiResponse;

/// Ошибка API в общем конверте `{ success: false, error }`
pub type ApiError = (StatusCode, Json<ApiResponse<()>>);

pub fn api_error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (status, Json(ApiResponse::error(message)))
}
