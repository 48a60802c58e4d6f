use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::facility_type::FacilityType;

// ============================================================================
// Facility
// ============================================================================

/// Объект каталога: teren, antrenor, magazin de reparații или magazin de articole.
///
/// Read-only on the client: records are only created through the registration
/// flow and never mutated locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Facility {
    pub id: i64,
    pub facility_type: FacilityType,
    pub name: String,
    pub city: String,

    /// Адрес
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,

    // Контакты
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub website: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    // Медиа
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub gallery: Vec<String>,

    /// Слаг вида спорта
    #[serde(default)]
    pub sport: Option<String>,

    // Цены
    #[serde(default)]
    pub price_per_hour: Option<f64>,
    #[serde(default)]
    pub price_per_lesson: Option<f64>,

    /// Специализация тренера или категория магазина
    #[serde(default)]
    pub specialization: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub repair_categories: Vec<String>,

    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Facility {
    /// Price line shown on cards, e.g. "120 lei / oră"
    pub fn price_label(&self) -> Option<String> {
        match (self.price_per_hour, self.price_per_lesson) {
            (Some(hour), _) => Some(format!("{} lei / oră", format_price(hour))),
            (None, Some(lesson)) => Some(format!("{} lei / ședință", format_price(lesson))),
            (None, None) => None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status.as_deref().map_or(true, |s| s == "active")
    }
}

fn format_price(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}

// ============================================================================
// Upstream query
// ============================================================================

/// Параметры `GET /facilities`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FacilityQuery {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub facility_type: Option<FacilityType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sport: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(rename = "repairCategory", skip_serializing_if = "Option::is_none")]
    pub repair_category: Option<String>,
}

impl FacilityQuery {
    pub const ACTIVE: &'static str = "active";

    /// Query pairs in the order the upstream documents them
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(t) = self.facility_type {
            pairs.push(("type", t.code().to_string()));
        }
        if let Some(city) = &self.city {
            pairs.push(("city", city.clone()));
        }
        if let Some(sport) = &self.sport {
            pairs.push(("sport", sport.clone()));
        }
        if let Some(status) = &self.status {
            pairs.push(("status", status.clone()));
        }
        if let Some(category) = &self.repair_category {
            pairs.push(("repairCategory", category.clone()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_record() {
        let json = r#"{
            "id": 7,
            "facility_type": "field",
            "name": "Baza Sportivă Gheorgheni",
            "city": "Cluj-Napoca",
            "sport": "tenis",
            "price_per_hour": 80
        }"#;
        let f: Facility = serde_json::from_str(json).unwrap();
        assert_eq!(f.facility_type, FacilityType::Field);
        assert!(f.gallery.is_empty());
        assert!(f.is_active());
        assert_eq!(f.price_label().as_deref(), Some("80 lei / oră"));
    }

    #[test]
    fn test_query_pairs_skip_missing() {
        let q = FacilityQuery {
            facility_type: Some(FacilityType::RepairShop),
            city: Some("Iași".into()),
            status: Some(FacilityQuery::ACTIVE.into()),
            repair_category: Some("biciclete".into()),
            ..Default::default()
        };
        assert_eq!(
            q.to_pairs(),
            vec![
                ("type", "repair_shop".to_string()),
                ("city", "Iași".to_string()),
                ("status", "active".to_string()),
                ("repairCategory", "biciclete".to_string()),
            ]
        );
    }
}
