use super::count::count_phrase;
use super::SITE_NAME;
use crate::domain::a001_facility::filter::Filter;
use crate::enums::facility_type::FacilityType;
use crate::shared::slug::{repair_category_slug_to_name, sport_slug_to_name};

/// Human-readable parts of a canonical filter
#[derive(Debug, Clone)]
pub(crate) struct Labels {
    pub city: Option<String>,
    pub sport: Option<String>,
    pub facility_type: Option<FacilityType>,
    pub repair_category: Option<String>,
}

impl Labels {
    pub fn of(filter: &Filter) -> Self {
        let f = filter.canonical();
        Self {
            city: f.city,
            sport: f.sport.as_deref().map(sport_slug_to_name),
            facility_type: f.facility_type,
            repair_category: f.repair_category.as_deref().map(repair_category_slug_to_name),
        }
    }

    /// "Magazine Reparații", "Magazine Reparații Biciclete"
    pub fn type_label(&self) -> Option<String> {
        self.facility_type.map(|t| match &self.repair_category {
            Some(category) => format!("{} {}", t.display_name(), category),
            None => t.display_name().to_string(),
        })
    }

    /// " pentru Tenis în Cluj-Napoca", " din toată România"
    pub fn scope(&self) -> String {
        let sport = self
            .sport
            .as_deref()
            .map(|s| format!(" pentru {}", s))
            .unwrap_or_default();
        let place = match &self.city {
            Some(city) => format!(" în {}", city),
            None => " din toată România".to_string(),
        };
        format!("{}{}", sport, place)
    }
}

/// Каскад заголовков, от самого конкретного к общему
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SeoCase {
    TypeSportCity,
    TypeCity,
    SportType,
    City,
    Sport,
    Type,
    All,
}

impl SeoCase {
    pub fn of(labels: &Labels) -> Self {
        match (&labels.facility_type, &labels.sport, &labels.city) {
            (Some(_), Some(_), Some(_)) => SeoCase::TypeSportCity,
            (Some(_), None, Some(_)) => SeoCase::TypeCity,
            (Some(_), Some(_), None) => SeoCase::SportType,
            (None, _, Some(_)) => SeoCase::City,
            (None, Some(_), None) => SeoCase::Sport,
            (Some(_), None, None) => SeoCase::Type,
            (None, None, None) => SeoCase::All,
        }
    }
}

pub(crate) fn h1_for(labels: &Labels) -> String {
    let type_label = labels.type_label().unwrap_or_default();
    let sport = labels.sport.as_deref().unwrap_or_default();
    let city = labels.city.as_deref().unwrap_or_default();

    match SeoCase::of(labels) {
        SeoCase::TypeSportCity => format!("{} {} în {}", type_label, sport, city),
        SeoCase::TypeCity => format!("{} în {}", type_label, city),
        SeoCase::SportType => format!("{} {} în România", type_label, sport),
        SeoCase::City => match &labels.sport {
            Some(sport) => format!("Facilități {} în {}", sport, city),
            None => format!("Facilități Sportive în {}", city),
        },
        SeoCase::Sport => format!("Facilități {} în România", sport),
        SeoCase::Type => format!("{} în România", type_label),
        SeoCase::All => "Toate Facilitățile Sportive din România".to_string(),
    }
}

/// One sentence pitch per facility type
pub(crate) fn type_blurb(facility_type: Option<FacilityType>) -> &'static str {
    match facility_type {
        Some(FacilityType::Field) => "Compară prețurile, vezi programul și rezervă rapid.",
        Some(FacilityType::Coach) => "Alege un antrenor potrivit nivelului și obiectivelor tale.",
        Some(FacilityType::RepairShop) => {
            "Găsește service specializat pentru echipamentul tău."
        }
        Some(FacilityType::EquipmentShop) => {
            "Cumpără echipament sportiv de la magazine locale."
        }
        None => "Terenuri, antrenori, magazine de reparații și articole sportive într-un singur loc.",
    }
}

/// Page H1
pub fn generate_h1(filter: &Filter) -> String {
    h1_for(&Labels::of(filter))
}

/// `<title>`: H1, optional count clause, site name.
pub fn generate_seo_title(filter: &Filter, result_count: usize) -> String {
    let labels = Labels::of(filter);
    let h1 = h1_for(&labels);
    if result_count > 0 {
        format!(
            "{} - {} | {}",
            h1,
            count_phrase(result_count, labels.facility_type),
            SITE_NAME
        )
    } else {
        format!("{} | {}", h1, SITE_NAME)
    }
}

/// `<meta name="description">`
pub fn generate_seo_description(filter: &Filter, result_count: usize) -> String {
    let labels = Labels::of(filter);
    let scope = labels.scope();
    let blurb = type_blurb(labels.facility_type);

    let lead = match (labels.type_label(), result_count) {
        (_, n) if n > 0 => format!(
            "Descoperă {}{}.",
            count_phrase(n, labels.facility_type),
            scope
        ),
        (Some(type_label), _) => format!("Găsește {}{}.", type_label.to_lowercase(), scope),
        (None, _) => format!("Găsește facilități sportive{}.", scope),
    };

    format!("{} {}", lead, blurb)
}
