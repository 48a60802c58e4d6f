use contracts::domain::a001_facility::listing::{ListingQuery, ListingResult};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// GET /api/listing?path=...
///
/// 404 carries a `not_found` body and is returned as `Ok`.
pub async fn fetch_listing(path: &str) -> Result<ListingResult, String> {
    let query = serde_qs::to_string(&ListingQuery {
        path: path.to_string(),
    })
    .map_err(|e| format!("Failed to build query: {}", e))?;
    let url = format!("{}?{}", api_url("/api/listing"), query);

    let response = Request::get(&url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() && response.status() != 404 {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json::<ListingResult>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
