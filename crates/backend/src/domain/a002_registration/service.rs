use contracts::domain::a002_registration::form::{join_errors, FieldError};
use contracts::domain::a002_registration::payload::{RegistrationCredentials, RegistrationPayload};
use thiserror::Error;

use crate::shared::directory::{DirectoryError, FacilityDirectory};

#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error("{}", join_errors(.0))]
    Invalid(Vec<FieldError>),

    /// Отказ REST API (например, email уже занят)
    #[error("{0}")]
    Rejected(String),

    #[error(transparent)]
    Upstream(DirectoryError),
}

/// Проверяет заявку и пересылает её в REST API
pub async fn register(
    directory: &dyn FacilityDirectory,
    payload: RegistrationPayload,
) -> Result<RegistrationCredentials, RegistrationError> {
    payload.validate().map_err(RegistrationError::Invalid)?;

    match directory.register(&payload).await {
        Ok(credentials) => {
            tracing::info!(
                "Registered {} \"{}\" in {} as facility {}",
                payload.facility_type.code(),
                payload.name,
                payload.city,
                credentials.facility_id
            );
            Ok(credentials)
        }
        Err(DirectoryError::Rejected(message)) => {
            tracing::info!("Registration of \"{}\" rejected: {}", payload.name, message);
            Err(RegistrationError::Rejected(message))
        }
        Err(e) => {
            tracing::error!("Registration of \"{}\" failed: {}", payload.name, e);
            Err(RegistrationError::Upstream(e))
        }
    }
}
