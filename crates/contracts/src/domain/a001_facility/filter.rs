use serde::{Deserialize, Serialize};

use super::aggregate::FacilityQuery;
use crate::enums::facility_type::FacilityType;
use crate::shared::slug::{city_name_to_slug, repair_category_name_to_slug, sport_name_to_slug};

/// Текущий выбор пользователя: город, вид спорта, тип объекта.
///
/// `city` holds the canonical city name ("Iași"), `sport` and
/// `repair_category` hold slugs. A new Filter replaces the old one on every
/// change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Filter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sport: Option<String>,
    #[serde(
        default,
        rename = "facilityType",
        skip_serializing_if = "Option::is_none"
    )]
    pub facility_type: Option<FacilityType>,
    #[serde(
        default,
        rename = "repairCategory",
        skip_serializing_if = "Option::is_none"
    )]
    pub repair_category: Option<String>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn with_sport(mut self, sport: impl Into<String>) -> Self {
        self.sport = Some(sport.into());
        self
    }

    pub fn with_type(mut self, facility_type: FacilityType) -> Self {
        self.facility_type = Some(facility_type);
        self
    }

    pub fn with_repair_category(mut self, category: impl Into<String>) -> Self {
        self.repair_category = Some(category.into());
        self
    }

    /// Blank strings (e.g. an unselected dropdown) count as "not set", and so
    /// do values without a slug ("Москва", "—"): they have no URL segment.
    pub fn normalized(&self) -> Self {
        fn clean(value: &Option<String>, to_slug: fn(&str) -> String) -> Option<String> {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !to_slug(v).is_empty())
                .map(str::to_string)
        }

        Self {
            city: clean(&self.city, city_name_to_slug),
            sport: clean(&self.sport, sport_name_to_slug),
            facility_type: self.facility_type,
            repair_category: clean(&self.repair_category, repair_category_name_to_slug),
        }
    }

    /// Применяет правила канонического URL:
    /// - equipment_shop ignores the sport once a city is set;
    /// - a repair category only exists for repair_shop and replaces the sport.
    pub fn canonical(&self) -> Self {
        let mut f = self.normalized();

        if f.facility_type != Some(FacilityType::RepairShop) {
            f.repair_category = None;
        }
        if f.repair_category.is_some() {
            f.sport = None;
        }
        if f.facility_type == Some(FacilityType::EquipmentShop) && f.city.is_some() {
            f.sport = None;
        }
        f
    }

    pub fn is_empty(&self) -> bool {
        let f = self.normalized();
        f.city.is_none()
            && f.sport.is_none()
            && f.facility_type.is_none()
            && f.repair_category.is_none()
    }

    /// Same city/sport, different facility type; canonical rules re-applied.
    pub fn for_type(&self, facility_type: FacilityType) -> Self {
        let mut f = self.normalized();
        f.facility_type = Some(facility_type);
        f.canonical()
    }

    /// Upstream query for one facility type (only active records).
    pub fn to_query(&self, facility_type: FacilityType) -> FacilityQuery {
        let f = self.for_type(facility_type);
        FacilityQuery {
            facility_type: Some(facility_type),
            city: f.city,
            sport: f.sport,
            status: Some(FacilityQuery::ACTIVE.to_string()),
            repair_category: f.repair_category,
        }
    }
}
