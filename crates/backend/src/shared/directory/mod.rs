//! Доступ к внешнему REST API каталога.
//!
//! Services only see the [`FacilityDirectory`] trait; [`api_client::ApiClient`]
//! is the production implementation.

pub mod api_client;
#[cfg(test)]
pub mod memory;

use async_trait::async_trait;
use contracts::domain::a001_facility::aggregate::{Facility, FacilityQuery};
use contracts::domain::a002_registration::payload::{RegistrationCredentials, RegistrationPayload};
use contracts::domain::a003_catalog::aggregate::{City, Sport};
use contracts::domain::a004_seo_page::aggregate::SeoPage;
use thiserror::Error;

/// Ошибки обращения к REST API
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Upstream returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// `success: false` with the server's own message
    #[error("{0}")]
    Rejected(String),

    #[error("Invalid upstream response: {0}")]
    InvalidResponse(String),
}

#[async_trait]
pub trait FacilityDirectory: Send + Sync {
    async fn list_facilities(&self, query: &FacilityQuery) -> Result<Vec<Facility>, DirectoryError>;

    async fn list_cities(&self) -> Result<Vec<City>, DirectoryError>;

    async fn list_sports(&self) -> Result<Vec<Sport>, DirectoryError>;

    /// `None` when the upstream has no cached page for `url`.
    async fn get_seo_page(&self, url: &str) -> Result<Option<SeoPage>, DirectoryError>;

    async fn register(
        &self,
        payload: &RegistrationPayload,
    ) -> Result<RegistrationCredentials, DirectoryError>;
}
