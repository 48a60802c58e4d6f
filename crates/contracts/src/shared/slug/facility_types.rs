use super::{comparison_key, slugify, title_case_slug};
use crate::enums::facility_type::FacilityType;

/// "terenuri" -> "Terenuri Sportive"; unknown slugs are title-cased.
pub fn facility_type_slug_to_name(slug: &str) -> String {
    match FacilityType::from_slug(&slug.trim().to_lowercase()) {
        Some(t) => t.display_name().to_string(),
        None => title_case_slug(slug),
    }
}

/// "Terenuri Sportive" (or the API code "field") -> "terenuri".
pub fn facility_type_name_to_slug(name: &str) -> String {
    let key = comparison_key(name);
    FacilityType::all()
        .into_iter()
        .find(|t| comparison_key(t.display_name()) == key || t.code() == key)
        .map(|t| t.slug().to_string())
        .unwrap_or_else(|| slugify(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        for t in FacilityType::all() {
            let slug = facility_type_name_to_slug(t.display_name());
            assert_eq!(slug, t.slug());
            assert_eq!(facility_type_slug_to_name(&slug), t.display_name());
        }
    }

    #[test]
    fn test_accepts_codes_and_loose_names() {
        assert_eq!(facility_type_name_to_slug("repair_shop"), "magazine-reparatii");
        assert_eq!(facility_type_name_to_slug("magazine reparatii"), "magazine-reparatii");
        assert_eq!(facility_type_name_to_slug("Săli de Fitness"), "sali-de-fitness");
        assert_eq!(facility_type_slug_to_name("sali-de-fitness"), "Sali De Fitness");
    }
}
