use contracts::domain::a002_registration::form::{
    error_for, FieldError, RegistrationForm, RegistrationStep,
};
use contracts::domain::a002_registration::payload::RegistrationCredentials;
use contracts::enums::facility_type::FacilityType;
use leptos::prelude::*;

use crate::domain::a002_registration::api;

/// ViewModel мастера регистрации
#[derive(Clone, Copy)]
pub struct RegistrationWizardViewModel {
    pub form: RwSignal<RegistrationForm>,
    pub step: RwSignal<RegistrationStep>,
    pub errors: RwSignal<Vec<FieldError>>,
    /// Ответ сервера, показывается как есть
    pub server_error: RwSignal<Option<String>>,
    pub submitting: RwSignal<bool>,
    pub credentials: RwSignal<Option<RegistrationCredentials>>,
}

impl RegistrationWizardViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(RegistrationForm::default()),
            step: RwSignal::new(RegistrationStep::FacilityType),
            errors: RwSignal::new(Vec::new()),
            server_error: RwSignal::new(None),
            submitting: RwSignal::new(false),
            credentials: RwSignal::new(None),
        }
    }

    pub fn error_for(&self, field: &str) -> Option<String> {
        self.errors.with(|errors| error_for(errors, field))
    }

    pub fn clear_error(&self, field: &str) {
        if self.errors.with_untracked(|errors| errors.iter().any(|e| e.field == field)) {
            self.errors.update(|errors| errors.retain(|e| e.field != field));
        }
    }

    pub fn update(&self, field: &'static str, apply: impl FnOnce(&mut RegistrationForm)) {
        self.form.update(apply);
        self.clear_error(field);
    }

    pub fn choose_type(&self, facility_type: FacilityType) {
        self.form.update(|f| {
            if f.facility_type != Some(facility_type) {
                f.facility_type = Some(facility_type);
                if !facility_type.is_sport_specific() {
                    f.sport.clear();
                }
            }
        });
        self.next();
    }

    /// Проверяет текущий шаг и переходит к следующему
    pub fn next(&self) {
        let step = self.step.get_untracked();
        let result = self.form.with_untracked(|f| f.validate_step(step));
        match result {
            Ok(()) => {
                self.errors.set(Vec::new());
                if let Some(next) = step.next() {
                    self.step.set(next);
                }
            }
            Err(errors) => self.errors.set(errors),
        }
    }

    pub fn back(&self) {
        if let Some(previous) = self.step.get_untracked().previous() {
            self.errors.set(Vec::new());
            self.server_error.set(None);
            self.step.set(previous);
        }
    }

    pub fn submit(&self) {
        if self.submitting.get_untracked() {
            return;
        }
        self.server_error.set(None);

        let payload = match self.form.with_untracked(|f| f.to_payload()) {
            Ok(payload) => payload,
            Err(errors) => {
                if let Some(step) = self.form.with_untracked(first_invalid_step) {
                    self.step.set(step);
                }
                self.errors.set(errors);
                return;
            }
        };

        self.submitting.set(true);
        let this = *self;
        wasm_bindgen_futures::spawn_local(async move {
            match api::submit_registration(&payload).await {
                Ok(credentials) => {
                    log::info!("Registered facility {}", credentials.facility_id);
                    this.credentials.set(Some(credentials));
                    this.step.set(RegistrationStep::Credentials);
                }
                Err(message) => {
                    log::error!("Registration failed: {}", message);
                    this.server_error.set(Some(message));
                }
            }
            this.submitting.set(false);
        });
    }
}

impl Default for RegistrationWizardViewModel {
    fn default() -> Self {
        Self::new()
    }
}

/// Первый шаг с ошибками, чтобы вернуть пользователя к нему
pub fn first_invalid_step(form: &RegistrationForm) -> Option<RegistrationStep> {
    RegistrationStep::all()
        .into_iter()
        .filter(|s| !matches!(s, RegistrationStep::Review | RegistrationStep::Credentials))
        .find(|s| form.validate_step(*s).is_err())
}
