use axum::extract::Query;
use axum::http::StatusCode;
use axum::Json;
use contracts::domain::common::ApiResponse;
use contracts::shared::seo::{generate_seo_content, SeoContent};

use super::a001_facility::FilterParams;
use super::{api_error, ApiError};

/// GET /api/seo?city=Arad&type=field&count=4
///
/// Только генерация, без обращения к REST API.
pub async fn seo(Query(params): Query<FilterParams>) -> Result<Json<ApiResponse<SeoContent>>, ApiError> {
    let filter = params
        .to_filter()
        .map_err(|e| api_error(StatusCode::BAD_REQUEST, e))?;
    let content = generate_seo_content(&filter, params.count.unwrap_or(0));
    Ok(Json(ApiResponse::ok(content)))
}
