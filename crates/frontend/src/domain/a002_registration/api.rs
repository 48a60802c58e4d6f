use contracts::domain::a002_registration::payload::{RegistrationCredentials, RegistrationPayload};
use contracts::domain::common::ApiResponse;
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// POST /api/register
///
/// On failure the server message is returned verbatim for the banner.
pub async fn submit_registration(
    payload: &RegistrationPayload,
) -> Result<RegistrationCredentials, String> {
    let response = Request::post(&api_url("/api/register"))
        .header("Accept", "application/json")
        .json(payload)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    let status = response.status();
    match response.json::<ApiResponse<RegistrationCredentials>>().await {
        Ok(body) => body.into_result(),
        Err(_) => Err(format!("HTTP error: {}", status)),
    }
}
