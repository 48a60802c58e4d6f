use crate::domain::a001_facility::filter::Filter;
use crate::enums::facility_type::FacilityType;
use crate::shared::slug::{city_name_to_slug, repair_category_name_to_slug, sport_name_to_slug};

/// Путь страницы без фильтров
pub const ALL_FACILITIES_PATH: &str = "/toate";
pub const ALL_FACILITIES_SEGMENT: &str = "toate";

/// Canonical path of a filter.
///
/// First matching rule wins:
/// 1. city + sport + type -> `/{city}/{sport}/{type}`
/// 2. city + type         -> `/{city}/{type}`
/// 3. city + sport        -> `/{city}/{sport}`
/// 4. city                -> `/{city}`
/// 5. sport + type        -> `/{sport}/{type}`
/// 6. sport               -> `/{sport}`
/// 7. type                -> `/{type}`
/// 8. nothing             -> `/toate`
///
/// Repair shops with a repair category use `[/{city}]/magazine-reparatii/{category}`.
pub fn filter_to_path(filter: &Filter) -> String {
    let f = filter.canonical();

    let city = f.city.as_deref().map(city_name_to_slug);
    let sport = f.sport.as_deref().map(sport_name_to_slug);
    let type_slug = f.facility_type.map(|t| t.slug());

    if let Some(category) = f.repair_category.as_deref() {
        let category = repair_category_name_to_slug(category);
        let repair = FacilityType::RepairShop.slug();
        return match city {
            Some(city) => format!("/{}/{}/{}", city, repair, category),
            None => format!("/{}/{}", repair, category),
        };
    }

    match (city, sport, type_slug) {
        (Some(city), Some(sport), Some(t)) => format!("/{}/{}/{}", city, sport, t),
        (Some(city), None, Some(t)) => format!("/{}/{}", city, t),
        (Some(city), Some(sport), None) => format!("/{}/{}", city, sport),
        (Some(city), None, None) => format!("/{}", city),
        (None, Some(sport), Some(t)) => format!("/{}/{}", sport, t),
        (None, Some(sport), None) => format!("/{}", sport),
        (None, None, Some(t)) => format!("/{}", t),
        (None, None, None) => ALL_FACILITIES_PATH.to_string(),
    }
}

/// String-based entry point used by dropdown state: empty strings mean "not
/// set", `facility_type` is the API code (`field`, `coach`, ...) or a slug.
pub fn generate_url_from_filters(city: &str, sport: &str, facility_type: &str) -> String {
    let filter = Filter {
        city: Some(city.to_string()),
        sport: Some(sport.to_string()),
        facility_type: FacilityType::parse(facility_type),
        repair_category: None,
    };
    filter_to_path(&filter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_examples() {
        assert_eq!(generate_url_from_filters("", "", ""), "/toate");
        assert_eq!(generate_url_from_filters("Iași", "", "field"), "/iasi/terenuri");
        assert_eq!(
            generate_url_from_filters("Iași", "fotbal", "field"),
            "/iasi/fotbal/terenuri"
        );
        assert_eq!(generate_url_from_filters("", "tenis", ""), "/tenis");
    }

    #[test]
    fn test_every_rule() {
        let city = || Filter::new().with_city("Cluj-Napoca");
        assert_eq!(
            filter_to_path(&city().with_sport("tenis").with_type(FacilityType::Coach)),
            "/cluj-napoca/tenis/antrenori"
        );
        assert_eq!(
            filter_to_path(&city().with_type(FacilityType::RepairShop)),
            "/cluj-napoca/magazine-reparatii"
        );
        assert_eq!(filter_to_path(&city().with_sport("volei")), "/cluj-napoca/volei");
        assert_eq!(filter_to_path(&city()), "/cluj-napoca");
        assert_eq!(
            filter_to_path(&Filter::new().with_sport("padel").with_type(FacilityType::Field)),
            "/padel/terenuri"
        );
        assert_eq!(filter_to_path(&Filter::new().with_sport("handbal")), "/handbal");
        assert_eq!(filter_to_path(&Filter::new()), "/toate");
    }

    #[test]
    fn test_type_only_base_paths() {
        let expected = [
            (FacilityType::Field, "/terenuri"),
            (FacilityType::Coach, "/antrenori"),
            (FacilityType::RepairShop, "/magazine-reparatii"),
            (FacilityType::EquipmentShop, "/magazine-articole"),
        ];
        for (t, path) in expected {
            assert_eq!(filter_to_path(&Filter::new().with_type(t)), path);
        }
    }

    #[test]
    fn test_equipment_shop_ignores_sport_with_city() {
        let f = Filter::new()
            .with_city("București")
            .with_sport("fotbal")
            .with_type(FacilityType::EquipmentShop);
        assert_eq!(filter_to_path(&f), "/bucuresti/magazine-articole");

        let f = Filter::new()
            .with_sport("fotbal")
            .with_type(FacilityType::EquipmentShop);
        assert_eq!(filter_to_path(&f), "/fotbal/magazine-articole");
    }

    #[test]
    fn test_repair_category_segment() {
        let f = Filter::new()
            .with_city("Brașov")
            .with_sport("tenis")
            .with_type(FacilityType::RepairShop)
            .with_repair_category("schiuri-snowboard");
        assert_eq!(f.canonical().sport, None);
        assert_eq!(filter_to_path(&f), "/brasov/magazine-reparatii/schiuri-snowboard");

        let f = Filter::new()
            .with_type(FacilityType::RepairShop)
            .with_repair_category("biciclete");
        assert_eq!(filter_to_path(&f), "/magazine-reparatii/biciclete");
    }

    #[test]
    fn test_unknown_values_use_fallback_slugs() {
        assert_eq!(
            generate_url_from_filters("Baia de Fier", "Rugby", "coach"),
            "/baia-de-fier/rugby/antrenori"
        );
        assert_eq!(generate_url_from_filters("", "", "stadium"), "/toate");
    }
}
