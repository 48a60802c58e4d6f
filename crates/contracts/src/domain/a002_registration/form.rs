use serde::{Deserialize, Serialize};

use super::payload::RegistrationPayload;
use crate::enums::facility_type::FacilityType;
use crate::shared::slug::sports::is_known_sport_slug;

pub const NAME_MIN_LEN: usize = 3;
pub const NAME_MAX_LEN: usize = 100;
pub const DESCRIPTION_MAX_LEN: usize = 2000;
pub const EXPERIENCE_MAX_YEARS: u32 = 70;

// ============================================================================
// Steps
// ============================================================================

/// Шаги мастера регистрации
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationStep {
    FacilityType,
    BasicInfo,
    Contact,
    Details,
    Review,
    Credentials,
}

impl RegistrationStep {
    pub fn all() -> [RegistrationStep; 6] {
        [
            RegistrationStep::FacilityType,
            RegistrationStep::BasicInfo,
            RegistrationStep::Contact,
            RegistrationStep::Details,
            RegistrationStep::Review,
            RegistrationStep::Credentials,
        ]
    }

    pub fn index(&self) -> usize {
        Self::all()
            .iter()
            .position(|s| s == self)
            .unwrap_or_default()
    }

    pub fn title(&self) -> &'static str {
        match self {
            RegistrationStep::FacilityType => "Tip de facilitate",
            RegistrationStep::BasicInfo => "Informații generale",
            RegistrationStep::Contact => "Date de contact",
            RegistrationStep::Details => "Detalii",
            RegistrationStep::Review => "Verificare",
            RegistrationStep::Credentials => "Date de autentificare",
        }
    }

    /// Review is the last step the user moves to by hand; Credentials is
    /// reached only through a successful submission.
    pub fn next(&self) -> Option<Self> {
        match self {
            RegistrationStep::FacilityType => Some(RegistrationStep::BasicInfo),
            RegistrationStep::BasicInfo => Some(RegistrationStep::Contact),
            RegistrationStep::Contact => Some(RegistrationStep::Details),
            RegistrationStep::Details => Some(RegistrationStep::Review),
            RegistrationStep::Review | RegistrationStep::Credentials => None,
        }
    }

    pub fn previous(&self) -> Option<Self> {
        match self {
            RegistrationStep::FacilityType | RegistrationStep::Credentials => None,
            RegistrationStep::BasicInfo => Some(RegistrationStep::FacilityType),
            RegistrationStep::Contact => Some(RegistrationStep::BasicInfo),
            RegistrationStep::Details => Some(RegistrationStep::Contact),
            RegistrationStep::Review => Some(RegistrationStep::Details),
        }
    }
}

// ============================================================================
// Errors
// ============================================================================

/// Ошибка конкретного поля формы
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// First message for `field`, if any
pub fn error_for(errors: &[FieldError], field: &str) -> Option<String> {
    errors
        .iter()
        .find(|e| e.field == field)
        .map(|e| e.message.clone())
}

/// "a; b; c", for banners and server responses
pub fn join_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

// ============================================================================
// Form
// ============================================================================

/// Состояние формы. Всё хранится строками, как в полях ввода.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistrationForm {
    pub facility_type: Option<FacilityType>,

    pub name: String,
    pub city: String,
    pub location: String,
    pub description: String,

    pub phone: String,
    pub email: String,
    pub website: String,

    pub sport: String,
    pub price_per_hour: String,
    pub price_per_lesson: String,
    pub specialization: String,
    pub experience_years: String,
    pub repair_categories: Vec<String>,
    pub category: String,
}

impl RegistrationForm {
    pub fn validate_step(&self, step: RegistrationStep) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        match step {
            RegistrationStep::FacilityType => self.check_facility_type(&mut errors),
            RegistrationStep::BasicInfo => self.check_basic_info(&mut errors),
            RegistrationStep::Contact => self.check_contact(&mut errors),
            RegistrationStep::Details => self.check_details(&mut errors),
            RegistrationStep::Review => {
                self.check_facility_type(&mut errors);
                self.check_basic_info(&mut errors);
                self.check_contact(&mut errors);
                self.check_details(&mut errors);
            }
            RegistrationStep::Credentials => {}
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Validates every step and assembles the flat JSON payload.
    pub fn to_payload(&self) -> Result<RegistrationPayload, Vec<FieldError>> {
        self.validate_step(RegistrationStep::Review)?;

        let facility_type = self.facility_type.ok_or_else(|| {
            vec![FieldError::new("facility_type", "Alege tipul de facilitate")]
        })?;
        let needs_sport = facility_type.is_sport_specific();

        Ok(RegistrationPayload {
            facility_type,
            name: self.name.trim().to_string(),
            city: self.city.trim().to_string(),
            location: non_empty(&self.location),
            description: non_empty(&self.description),
            phone: normalize_phone(&self.phone),
            email: self.email.trim().to_lowercase(),
            website: non_empty(&self.website),
            sport: if needs_sport { non_empty(&self.sport) } else { None },
            price_per_hour: parse_price(&self.price_per_hour).ok().flatten(),
            price_per_lesson: parse_price(&self.price_per_lesson).ok().flatten(),
            specialization: non_empty(&self.specialization),
            experience_years: self.experience_years.trim().parse().ok(),
            repair_categories: if facility_type == FacilityType::RepairShop {
                self.repair_categories.clone()
            } else {
                Vec::new()
            },
            category: non_empty(&self.category),
        })
    }

    pub fn toggle_repair_category(&mut self, slug: &str) {
        if let Some(pos) = self.repair_categories.iter().position(|c| c == slug) {
            self.repair_categories.remove(pos);
        } else {
            self.repair_categories.push(slug.to_string());
        }
    }

    fn check_facility_type(&self, errors: &mut Vec<FieldError>) {
        if self.facility_type.is_none() {
            errors.push(FieldError::new("facility_type", "Alege tipul de facilitate"));
        }
    }

    fn check_basic_info(&self, errors: &mut Vec<FieldError>) {
        let name_len = self.name.trim().chars().count();
        if name_len == 0 {
            errors.push(FieldError::new("name", "Numele este obligatoriu"));
        } else if name_len < NAME_MIN_LEN {
            errors.push(FieldError::new(
                "name",
                format!("Numele trebuie să aibă cel puțin {} caractere", NAME_MIN_LEN),
            ));
        } else if name_len > NAME_MAX_LEN {
            errors.push(FieldError::new(
                "name",
                format!("Numele poate avea cel mult {} caractere", NAME_MAX_LEN),
            ));
        }

        if self.city.trim().is_empty() {
            errors.push(FieldError::new("city", "Orașul este obligatoriu"));
        }

        let location_required = self.facility_type != Some(FacilityType::Coach);
        if location_required && self.location.trim().is_empty() {
            errors.push(FieldError::new("location", "Adresa este obligatorie"));
        }

        if self.description.chars().count() > DESCRIPTION_MAX_LEN {
            errors.push(FieldError::new(
                "description",
                format!("Descrierea poate avea cel mult {} caractere", DESCRIPTION_MAX_LEN),
            ));
        }
    }

    fn check_contact(&self, errors: &mut Vec<FieldError>) {
        if self.phone.trim().is_empty() {
            errors.push(FieldError::new("phone", "Telefonul este obligatoriu"));
        } else if !is_valid_phone(&self.phone) {
            errors.push(FieldError::new(
                "phone",
                "Număr de telefon invalid (ex: 0722 123 456)",
            ));
        }

        if self.email.trim().is_empty() {
            errors.push(FieldError::new("email", "Emailul este obligatoriu"));
        } else if !is_valid_email(&self.email) {
            errors.push(FieldError::new("email", "Adresă de email invalidă"));
        }

        let website = self.website.trim();
        if !website.is_empty() && !is_http_url(website) {
            errors.push(FieldError::new(
                "website",
                "Site-ul trebuie să înceapă cu http:// sau https://",
            ));
        }
    }

    fn check_details(&self, errors: &mut Vec<FieldError>) {
        let Some(facility_type) = self.facility_type else {
            return;
        };

        if facility_type.is_sport_specific() {
            let sport = self.sport.trim();
            if sport.is_empty() {
                errors.push(FieldError::new("sport", "Alege sportul"));
            } else if !is_known_sport_slug(sport) {
                errors.push(FieldError::new("sport", "Sport necunoscut"));
            }
        }

        for (field, value) in [
            ("price_per_hour", &self.price_per_hour),
            ("price_per_lesson", &self.price_per_lesson),
        ] {
            if let Err(message) = parse_price(value) {
                errors.push(FieldError::new(field, message));
            }
        }

        if facility_type == FacilityType::Coach {
            let years = self.experience_years.trim();
            if !years.is_empty() {
                match years.parse::<u32>() {
                    Ok(y) if y <= EXPERIENCE_MAX_YEARS => {}
                    _ => errors.push(FieldError::new(
                        "experience_years",
                        format!("Experiența trebuie să fie între 0 și {} ani", EXPERIENCE_MAX_YEARS),
                    )),
                }
            }
        }

        if facility_type == FacilityType::RepairShop && self.repair_categories.is_empty() {
            errors.push(FieldError::new(
                "repair_categories",
                "Alege cel puțin o categorie de reparații",
            ));
        }
    }
}

impl From<&RegistrationPayload> for RegistrationForm {
    fn from(p: &RegistrationPayload) -> Self {
        Self {
            facility_type: Some(p.facility_type),
            name: p.name.clone(),
            city: p.city.clone(),
            location: p.location.clone().unwrap_or_default(),
            description: p.description.clone().unwrap_or_default(),
            phone: p.phone.clone(),
            email: p.email.clone(),
            website: p.website.clone().unwrap_or_default(),
            sport: p.sport.clone().unwrap_or_default(),
            price_per_hour: p.price_per_hour.map(|v| v.to_string()).unwrap_or_default(),
            price_per_lesson: p.price_per_lesson.map(|v| v.to_string()).unwrap_or_default(),
            specialization: p.specialization.clone().unwrap_or_default(),
            experience_years: p.experience_years.map(|v| v.to_string()).unwrap_or_default(),
            repair_categories: p.repair_categories.clone(),
            category: p.category.clone().unwrap_or_default(),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let v = value.trim();
    if v.is_empty() {
        None
    } else {
        Some(v.to_string())
    }
}

/// Empty -> Ok(None); "80", "80,5" -> Ok(Some(..)); zero, negative or garbage -> Err
fn parse_price(value: &str) -> Result<Option<f64>, String> {
    let v = value.trim();
    if v.is_empty() {
        return Ok(None);
    }
    match v.replace(',', ".").parse::<f64>() {
        Ok(price) if price.is_finite() && price > 0.0 => Ok(Some(price)),
        _ => Err("Prețul trebuie să fie un număr pozitiv".to_string()),
    }
}

/// Убирает пробелы, точки, дефисы и скобки
pub fn normalize_phone(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| !matches!(c, ' ' | '.' | '-' | '(' | ')'))
        .collect()
}

/// `07xxxxxxxx` or `+407xxxxxxxx`
pub fn is_valid_phone(phone: &str) -> bool {
    let p = normalize_phone(phone);
    let digits_only = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    (p.len() == 10 && p.starts_with("07") && digits_only(&p))
        || (p.len() == 12 && p.starts_with("+407") && digits_only(&p[1..]))
}

/// Только http(s): сайт попадает в `href` карточки
pub fn is_http_url(value: &str) -> bool {
    let lower = value.trim().to_ascii_lowercase();
    ["http://", "https://"]
        .iter()
        .any(|scheme| lower.len() > scheme.len() && lower.starts_with(scheme))
}

pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_http_url() {
        assert!(is_http_url("https://arena.ro"));
        assert!(is_http_url(" HTTP://arena.ro "));
        assert!(!is_http_url("javascript:alert(1)"));
        assert!(!is_http_url("www.arena.ro"));
        assert!(!is_http_url("https://"));
    }

    fn valid_field_form() -> RegistrationForm {
        RegistrationForm {
            facility_type: Some(FacilityType::Field),
            name: "Baza Sportivă Olimpia".into(),
            city: "Iași".into(),
            location: "Str. Sărăriei 12".into(),
            phone: "0722 123 456".into(),
            email: "Contact@Olimpia.ro".into(),
            sport: "fotbal".into(),
            price_per_hour: "150".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_step_navigation() {
        let mut step = RegistrationStep::FacilityType;
        let mut visited = vec![step];
        while let Some(next) = step.next() {
            step = next;
            visited.push(step);
        }
        assert_eq!(step, RegistrationStep::Review);
        assert_eq!(visited.len(), 5);
        assert_eq!(RegistrationStep::Review.previous(), Some(RegistrationStep::Details));
        assert_eq!(RegistrationStep::Credentials.previous(), None);
        assert_eq!(RegistrationStep::Contact.index(), 2);
    }

    #[test]
    fn test_empty_form_fails_first_step() {
        let errors = RegistrationForm::default()
            .validate_step(RegistrationStep::FacilityType)
            .unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "facility_type");
    }

    #[test]
    fn test_basic_info_rules() {
        let mut form = valid_field_form();
        form.name = "AB".into();
        form.location = "  ".into();
        let errors = form.validate_step(RegistrationStep::BasicInfo).unwrap_err();
        assert!(error_for(&errors, "name").is_some());
        assert!(error_for(&errors, "location").is_some());

        // antrenorii nu au nevoie de adresă
        form.facility_type = Some(FacilityType::Coach);
        form.name = "Ion Popescu".into();
        assert!(form.validate_step(RegistrationStep::BasicInfo).is_ok());
    }

    #[test]
    fn test_contact_rules() {
        let mut form = valid_field_form();
        assert!(form.validate_step(RegistrationStep::Contact).is_ok());

        form.phone = "+40 722-123-456".into();
        assert!(form.validate_step(RegistrationStep::Contact).is_ok());

        form.phone = "12345".into();
        form.email = "nope".into();
        form.website = "www.example.ro".into();
        let errors = form.validate_step(RegistrationStep::Contact).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_details_rules() {
        let mut form = valid_field_form();
        form.sport = "curling".into();
        form.price_per_hour = "-5".into();
        let errors = form.validate_step(RegistrationStep::Details).unwrap_err();
        assert_eq!(error_for(&errors, "sport").as_deref(), Some("Sport necunoscut"));
        assert!(error_for(&errors, "price_per_hour").is_some());

        let repair = RegistrationForm {
            facility_type: Some(FacilityType::RepairShop),
            ..Default::default()
        };
        let errors = repair.validate_step(RegistrationStep::Details).unwrap_err();
        assert_eq!(errors[0].field, "repair_categories");

        let coach = RegistrationForm {
            facility_type: Some(FacilityType::Coach),
            sport: "tenis".into(),
            experience_years: "99".into(),
            ..Default::default()
        };
        let errors = coach.validate_step(RegistrationStep::Details).unwrap_err();
        assert_eq!(errors[0].field, "experience_years");
    }

    #[test]
    fn test_to_payload_is_flat_and_normalized() {
        let payload = valid_field_form().to_payload().unwrap();
        assert_eq!(payload.phone, "0722123456");
        assert_eq!(payload.email, "contact@olimpia.ro");
        assert_eq!(payload.price_per_hour, Some(150.0));
        assert_eq!(payload.sport.as_deref(), Some("fotbal"));
        assert!(payload.repair_categories.is_empty());

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["facility_type"], "field");
        assert!(json.get("website").is_none());
    }

    #[test]
    fn test_shop_payload_drops_sport() {
        let mut form = valid_field_form();
        form.facility_type = Some(FacilityType::RepairShop);
        form.toggle_repair_category("biciclete");
        form.toggle_repair_category("rachete");
        form.toggle_repair_category("biciclete");
        let payload = form.to_payload().unwrap();
        assert_eq!(payload.sport, None);
        assert_eq!(payload.repair_categories, vec!["rachete".to_string()]);
    }

    #[test]
    fn test_review_collects_all_errors() {
        let errors = RegistrationForm::default()
            .validate_step(RegistrationStep::Review)
            .unwrap_err();
        for field in ["facility_type", "name", "city", "phone", "email"] {
            assert!(error_for(&errors, field).is_some(), "missing {}", field);
        }
        assert!(!join_errors(&errors).is_empty());
    }
}
