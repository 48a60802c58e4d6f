use serde::{Deserialize, Serialize};

use super::aggregate::Facility;
use super::filter::Filter;
use crate::enums::facility_type::FacilityType;
use crate::shared::seo::SeoContent;

/// Query of `GET /api/listing`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListingQuery {
    pub path: String,
}

/// Объекты одного типа на странице листинга
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacilityGroup {
    pub facility_type: FacilityType,
    pub title: String,
    pub facilities: Vec<Facility>,
}

impl FacilityGroup {
    pub fn new(facility_type: FacilityType, facilities: Vec<Facility>) -> Self {
        Self {
            facility_type,
            title: facility_type.display_name().to_string(),
            facilities,
        }
    }
}

/// Готовая страница листинга
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingPage {
    pub filter: Filter,
    pub canonical_url: String,
    pub groups: Vec<FacilityGroup>,
    pub total: usize,
    pub seo: SeoContent,
}

impl ListingPage {
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// Ответ `GET /api/listing`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ListingResult {
    Page(ListingPage),
    Redirect { location: String },
    NotFound,
}
