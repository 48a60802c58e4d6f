use contracts::domain::a003_catalog::aggregate::{City, Sport};
use contracts::domain::common::ApiResponse;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

use crate::shared::api_utils::api_url;

async fn get_list<T: DeserializeOwned>(path: &str) -> Result<Vec<T>, String> {
    let response = Request::get(&api_url(path))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    let body: ApiResponse<Vec<T>> = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;
    body.into_result()
}

/// GET /api/cities
pub async fn fetch_cities() -> Result<Vec<City>, String> {
    get_list("/api/cities").await
}

/// GET /api/sports
pub async fn fetch_sports() -> Result<Vec<Sport>, String> {
    get_list("/api/sports").await
}
