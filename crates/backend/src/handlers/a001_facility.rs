use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use contracts::domain::a001_facility::filter::Filter;
use contracts::domain::a001_facility::listing::{ListingQuery, ListingResult};
use contracts::domain::common::ApiResponse;
use contracts::enums::facility_type::FacilityType;
use contracts::shared::url_filters::filter_to_path;
use serde::Deserialize;

use super::{api_error, ApiError};
use crate::domain::a001_facility;
use crate::shared::state::AppState;

/// GET /api/listing?path=/cluj-napoca/tenis
pub async fn listing(
    State(state): State<AppState>,
    Query(query): Query<ListingQuery>,
) -> (StatusCode, Json<ListingResult>) {
    let result = a001_facility::service::load_listing(state.directory.as_ref(), &query.path).await;
    let status = match result {
        ListingResult::NotFound => StatusCode::NOT_FOUND,
        _ => StatusCode::OK,
    };
    (status, Json(result))
}

/// Фильтр из query string: `city`, `sport`, `type`, `repairCategory`
#[derive(Debug, Default, Deserialize)]
pub struct FilterParams {
    pub city: Option<String>,
    pub sport: Option<String>,
    #[serde(rename = "type")]
    pub facility_type: Option<String>,
    #[serde(rename = "repairCategory")]
    pub repair_category: Option<String>,
    /// Only used by /api/seo
    pub count: Option<usize>,
}

impl FilterParams {
    /// Type accepts a code (`repair_shop`) or a slug (`magazine-reparatii`).
    pub fn to_filter(&self) -> Result<Filter, String> {
        let facility_type = match self.facility_type.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(
                FacilityType::parse(raw).ok_or_else(|| format!("Tip de facilitate necunoscut: {}", raw))?,
            ),
        };

        Ok(Filter {
            city: self.city.clone(),
            sport: self.sport.clone(),
            facility_type,
            repair_category: self.repair_category.clone(),
        }
        .canonical())
    }
}

/// GET /api/url?city=Iași&sport=tenis&type=field
pub async fn url(Query(params): Query<FilterParams>) -> Result<Json<ApiResponse<String>>, ApiError> {
    let filter = params
        .to_filter()
        .map_err(|e| api_error(StatusCode::BAD_REQUEST, e))?;
    Ok(Json(ApiResponse::ok(filter_to_path(&filter))))
}
