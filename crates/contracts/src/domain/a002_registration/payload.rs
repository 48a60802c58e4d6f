use serde::{Deserialize, Serialize};

use super::form::{FieldError, RegistrationForm, RegistrationStep};
use crate::enums::facility_type::FacilityType;

/// Плоский JSON для `POST /register`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrationPayload {
    pub facility_type: FacilityType,
    pub name: String,
    pub city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub phone: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sport: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_per_hour: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_per_lesson: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialization: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience_years: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub repair_categories: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl RegistrationPayload {
    /// Re-runs the wizard rules on a payload that arrived over the wire.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        RegistrationForm::from(self).validate_step(RegistrationStep::Review)
    }
}

/// Учётные данные, выданные после регистрации
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationCredentials {
    pub facility_id: i64,
    pub username: String,
    pub password: String,
}
