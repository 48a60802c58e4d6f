//! In-memory [`FacilityDirectory`] for service tests.

use std::sync::Mutex;

use async_trait::async_trait;
use contracts::domain::a001_facility::aggregate::{Facility, FacilityQuery};
use contracts::domain::a002_registration::payload::{RegistrationCredentials, RegistrationPayload};
use contracts::domain::a003_catalog::aggregate::{City, Sport};
use contracts::domain::a004_seo_page::aggregate::SeoPage;
use contracts::enums::facility_type::FacilityType;
use contracts::shared::slug::comparison_key;

use super::{DirectoryError, FacilityDirectory};

#[derive(Default)]
pub struct MemoryDirectory {
    pub facilities: Vec<Facility>,
    pub cities: Vec<City>,
    pub sports: Vec<Sport>,
    pub seo_pages: Vec<SeoPage>,
    /// Types whose queries fail, to exercise the partial-failure path
    pub failing_types: Vec<FacilityType>,
    pub fail_seo: bool,
    pub reject_registration: Option<String>,
    pub queries: Mutex<Vec<FacilityQuery>>,
    pub registrations: Mutex<Vec<RegistrationPayload>>,
}

impl MemoryDirectory {
    pub fn with_facilities(facilities: Vec<Facility>) -> Self {
        Self {
            facilities,
            ..Default::default()
        }
    }

    pub fn recorded_queries(&self) -> Vec<FacilityQuery> {
        self.queries.lock().map(|q| q.clone()).unwrap_or_default()
    }
}

fn same(a: &Option<String>, b: &Option<String>) -> bool {
    match (a, b) {
        (Some(expected), Some(actual)) => comparison_key(expected) == comparison_key(actual),
        (Some(_), None) => false,
        (None, _) => true,
    }
}

#[async_trait]
impl FacilityDirectory for MemoryDirectory {
    async fn list_facilities(&self, query: &FacilityQuery) -> Result<Vec<Facility>, DirectoryError> {
        if let Ok(mut queries) = self.queries.lock() {
            queries.push(query.clone());
        }
        if let Some(t) = query.facility_type {
            if self.failing_types.contains(&t) {
                return Err(DirectoryError::Status {
                    status: 500,
                    body: "boom".into(),
                });
            }
        }

        Ok(self
            .facilities
            .iter()
            .filter(|f| query.facility_type.map_or(true, |t| f.facility_type == t))
            .filter(|f| same(&query.city, &Some(f.city.clone())))
            .filter(|f| same(&query.sport, &f.sport))
            .filter(|f| {
                query.repair_category.as_ref().map_or(true, |c| {
                    f.repair_categories
                        .iter()
                        .any(|rc| comparison_key(rc) == comparison_key(c))
                })
            })
            .filter(|f| same(&query.status, &f.status))
            .cloned()
            .collect())
    }

    async fn list_cities(&self) -> Result<Vec<City>, DirectoryError> {
        Ok(self.cities.clone())
    }

    async fn list_sports(&self) -> Result<Vec<Sport>, DirectoryError> {
        Ok(self.sports.clone())
    }

    async fn get_seo_page(&self, url: &str) -> Result<Option<SeoPage>, DirectoryError> {
        if self.fail_seo {
            return Err(DirectoryError::InvalidResponse("seo down".into()));
        }
        Ok(self.seo_pages.iter().find(|p| p.url == url).cloned())
    }

    async fn register(
        &self,
        payload: &RegistrationPayload,
    ) -> Result<RegistrationCredentials, DirectoryError> {
        if let Some(msg) = &self.reject_registration {
            return Err(DirectoryError::Rejected(msg.clone()));
        }
        let mut registrations = self
            .registrations
            .lock()
            .map_err(|_| DirectoryError::InvalidResponse("poisoned".into()))?;
        registrations.push(payload.clone());
        Ok(RegistrationCredentials {
            facility_id: registrations.len() as i64,
            username: payload.email.clone(),
            password: "parola-generata".into(),
        })
    }
}
