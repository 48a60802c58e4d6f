use async_trait::async_trait;
use contracts::domain::a001_facility::aggregate::{Facility, FacilityQuery};
use contracts::domain::a002_registration::payload::{RegistrationCredentials, RegistrationPayload};
use contracts::domain::a003_catalog::aggregate::{City, Sport};
use contracts::domain::a004_seo_page::aggregate::SeoPage;
use contracts::domain::common::ApiResponse;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use super::{DirectoryError, FacilityDirectory};
use crate::shared::config::ApiConfig;

const BODY_PREVIEW_CHARS: usize = 500;

/// HTTP-клиент REST API каталога (`API_BASE_URL`)
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, DirectoryError> {
        let url = self.url(path);
        tracing::debug!("GET {} {:?}", url, query);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .query(query)
            .send()
            .await?;
        read_envelope(response).await
    }
}

/// Разбирает конверт `{ success, data, error }`.
///
/// The upstream also answers 4xx with an envelope, so the body is parsed
/// before the status is looked at.
async fn read_envelope<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, DirectoryError> {
    let status = response.status();
    let body = response.text().await?;
    parse_envelope(status, &body)
}

fn parse_envelope<T: DeserializeOwned>(status: StatusCode, body: &str) -> Result<T, DirectoryError> {
    match serde_json::from_str::<ApiResponse<T>>(body) {
        Ok(envelope) if envelope.success => envelope
            .data
            .ok_or_else(|| DirectoryError::InvalidResponse("missing data".to_string())),
        Ok(envelope) => Err(DirectoryError::Rejected(
            envelope
                .error
                .unwrap_or_else(|| format!("Request failed with HTTP {}", status.as_u16())),
        )),
        Err(_) if !status.is_success() => Err(DirectoryError::Status {
            status: status.as_u16(),
            body: preview(body),
        }),
        Err(e) => {
            tracing::error!("Failed to parse upstream response: {}", e);
            tracing::debug!("Response body: {}", preview(body));
            Err(DirectoryError::InvalidResponse(e.to_string()))
        }
    }
}

fn preview(body: &str) -> String {
    let head: String = body.chars().take(BODY_PREVIEW_CHARS).collect();
    if head.len() < body.len() {
        format!("{}...", head)
    } else {
        head
    }
}

#[async_trait]
impl FacilityDirectory for ApiClient {
    async fn list_facilities(&self, query: &FacilityQuery) -> Result<Vec<Facility>, DirectoryError> {
        self.get("/facilities", &query.to_pairs()).await
    }

    async fn list_cities(&self) -> Result<Vec<City>, DirectoryError> {
        self.get("/cities", &[]).await
    }

    async fn list_sports(&self) -> Result<Vec<Sport>, DirectoryError> {
        self.get("/sports", &[]).await
    }

    async fn get_seo_page(&self, url: &str) -> Result<Option<SeoPage>, DirectoryError> {
        let response = self
            .client
            .get(self.url("/seo-pages"))
            .header("Accept", "application/json")
            .query(&[("url", url)])
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let status = response.status();
        let body = response.text().await?;
        match parse_envelope::<Option<SeoPage>>(status, &body) {
            Ok(page) => Ok(page),
            // success without data: nothing cached yet
            Err(DirectoryError::InvalidResponse(msg)) if msg == "missing data" => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn register(
        &self,
        payload: &RegistrationPayload,
    ) -> Result<RegistrationCredentials, DirectoryError> {
        let url = self.url("/register");
        tracing::debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .header("Accept", "application/json")
            .json(payload)
            .send()
            .await?;
        read_envelope(response).await
    }
}
