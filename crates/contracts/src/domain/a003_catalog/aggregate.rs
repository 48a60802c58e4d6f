use serde::{Deserialize, Serialize};

use crate::shared::slug::{city_name_to_slug, sport_name_to_slug};

/// Город из `GET /cities`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub county: Option<String>,
}

impl City {
    pub fn slug(&self) -> String {
        city_name_to_slug(&self.name)
    }
}

/// Вид спорта из `GET /sports`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sport {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
}

impl Sport {
    /// The upstream slug when present, otherwise derived from the name.
    pub fn slug(&self) -> String {
        self.slug
            .clone()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| sport_name_to_slug(&self.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugs() {
        let city = City { id: 1, name: "Târgu Mureș".into(), county: Some("Mureș".into()) };
        assert_eq!(city.slug(), "targu-mures");

        let sport = Sport { id: 2, name: "Tenis de Masă".into(), slug: None };
        assert_eq!(sport.slug(), "tenis-de-masa");

        let sport = Sport { id: 3, name: "Fotbal".into(), slug: Some("fotbal".into()) };
        assert_eq!(sport.slug(), "fotbal");
    }
}
