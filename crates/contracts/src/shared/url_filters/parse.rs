use serde::{Deserialize, Serialize};

use super::generate::{filter_to_path, ALL_FACILITIES_PATH, ALL_FACILITIES_SEGMENT};
use crate::domain::a001_facility::filter::Filter;
use crate::enums::facility_type::FacilityType;
use crate::shared::slug::cities::city_slug_to_name;
use crate::shared::slug::{is_slug_like, slugify};
use crate::shared::slug::repair_categories::is_known_repair_category_slug;
use crate::shared::slug::sports::is_known_sport_slug;

/// Результат разбора пути листинга
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum RouteResolution {
    /// The path is canonical for this filter.
    Listing(Filter),
    /// The path names a valid filter but not in canonical form.
    Redirect(String),
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Type(FacilityType),
    Sport(String),
    RepairCategory(String),
    City(String),
}

/// Classification order: facility type, known sport, repair category (only
/// next to a repair-shop segment), city.
fn classify(segment: &str, repair_context: bool) -> Option<Segment> {
    if let Some(t) = FacilityType::from_slug(segment) {
        return Some(Segment::Type(t));
    }
    if is_known_sport_slug(segment) {
        return Some(Segment::Sport(segment.to_string()));
    }
    if repair_context && is_known_repair_category_slug(segment) {
        return Some(Segment::RepairCategory(segment.to_string()));
    }
    // "москва" looks like a slug but has no ASCII slug to redirect to
    if is_slug_like(segment) && !slugify(segment).is_empty() {
        return Some(Segment::City(city_slug_to_name(segment)));
    }
    None
}

/// Разбор пути вида `/cluj-napoca/tenis/terenuri`.
///
/// Query string and fragment are ignored. Percent-decoding is up to the
/// caller. Empty segments (`//iasi`, `/iasi/`) are not canonical and redirect.
pub fn parse_path(path: &str) -> RouteResolution {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    if path.is_empty() || path == "/" {
        return RouteResolution::Listing(Filter::default());
    }

    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    match parse_segments(&segments) {
        RouteResolution::Listing(filter) => {
            let canonical = filter_to_path(&filter);
            if canonical == path {
                RouteResolution::Listing(filter)
            } else {
                RouteResolution::Redirect(canonical)
            }
        }
        other => other,
    }
}

pub fn parse_segments(segments: &[&str]) -> RouteResolution {
    if segments.is_empty() {
        return RouteResolution::Listing(Filter::default());
    }
    if segments.len() > 3 {
        return RouteResolution::NotFound;
    }

    let lowered: Vec<String> = segments.iter().map(|s| s.trim().to_lowercase()).collect();

    if lowered.iter().any(|s| s == ALL_FACILITIES_SEGMENT) {
        return match segments {
            [only] if *only == ALL_FACILITIES_SEGMENT => {
                RouteResolution::Listing(Filter::default())
            }
            [_] => RouteResolution::Redirect(ALL_FACILITIES_PATH.to_string()),
            _ => RouteResolution::NotFound,
        };
    }

    let repair_context = lowered
        .iter()
        .any(|s| s == FacilityType::RepairShop.slug());

    let mut filter = Filter::default();
    for segment in &lowered {
        let duplicate = match classify(segment, repair_context) {
            Some(Segment::Type(t)) => filter.facility_type.replace(t).is_some(),
            Some(Segment::Sport(s)) => filter.sport.replace(s).is_some(),
            Some(Segment::RepairCategory(c)) => filter.repair_category.replace(c).is_some(),
            Some(Segment::City(c)) => filter.city.replace(c).is_some(),
            None => return RouteResolution::NotFound,
        };
        if duplicate {
            return RouteResolution::NotFound;
        }
    }

    let canonical = filter_to_path(&filter);
    let requested = format!("/{}", segments.join("/"));
    if canonical == requested {
        RouteResolution::Listing(filter)
    } else {
        RouteResolution::Redirect(canonical)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::slug::cities::CITIES;
    use crate::shared::url_filters::generate_url_from_filters;
    use crate::shared::slug::sports::SPORTS;

    fn listing(filter: Filter) -> RouteResolution {
        RouteResolution::Listing(filter)
    }

    fn redirect(path: &str) -> RouteResolution {
        RouteResolution::Redirect(path.to_string())
    }

    #[test]
    fn test_root_and_all() {
        assert_eq!(parse_path("/"), listing(Filter::default()));
        assert_eq!(parse_path("/toate"), listing(Filter::default()));
        assert_eq!(parse_path("/TOATE"), redirect("/toate"));
        assert_eq!(parse_path("/iasi/toate"), RouteResolution::NotFound);
    }

    #[test]
    fn test_single_segment_classification() {
        assert_eq!(
            parse_path("/terenuri"),
            listing(Filter::new().with_type(FacilityType::Field))
        );
        assert_eq!(parse_path("/tenis"), listing(Filter::new().with_sport("tenis")));
        assert_eq!(parse_path("/iasi"), listing(Filter::new().with_city("Iași")));
        assert_eq!(
            parse_path("/baia-de-fier"),
            listing(Filter::new().with_city("Baia De Fier"))
        );
    }

    #[test]
    fn test_full_path_and_query_string() {
        let expected = Filter::new()
            .with_city("Cluj-Napoca")
            .with_sport("tenis")
            .with_type(FacilityType::Field);
        assert_eq!(parse_path("/cluj-napoca/tenis/terenuri"), listing(expected.clone()));
        assert_eq!(parse_path("/cluj-napoca/tenis/terenuri?page=2"), listing(expected));
    }

    #[test]
    fn test_misordered_segments_redirect() {
        assert_eq!(parse_path("/terenuri/fotbal"), redirect("/fotbal/terenuri"));
        assert_eq!(parse_path("/terenuri/iasi"), redirect("/iasi/terenuri"));
        assert_eq!(parse_path("/fotbal/iasi"), redirect("/iasi/fotbal"));
        assert_eq!(
            parse_path("/iasi/terenuri/fotbal"),
            redirect("/iasi/fotbal/terenuri")
        );
        assert_eq!(
            parse_path("/fotbal/iasi/antrenori"),
            redirect("/iasi/fotbal/antrenori")
        );
    }

    #[test]
    fn test_non_canonical_spelling_redirects() {
        assert_eq!(parse_path("/Iasi/Terenuri"), redirect("/iasi/terenuri"));
        assert_eq!(parse_path("/iași"), redirect("/iasi"));
        assert_eq!(
            parse_path("/iasi/fotbal/magazine-articole"),
            redirect("/iasi/magazine-articole")
        );
    }

    #[test]
    fn test_repair_category_paths() {
        let expected = Filter::new()
            .with_city("Sibiu")
            .with_type(FacilityType::RepairShop)
            .with_repair_category("biciclete");
        assert_eq!(
            parse_path("/sibiu/magazine-reparatii/biciclete"),
            listing(expected)
        );
        assert_eq!(
            parse_path("/magazine-reparatii/rachete"),
            listing(
                Filter::new()
                    .with_type(FacilityType::RepairShop)
                    .with_repair_category("rachete")
            )
        );
        // без сегмента magazine-reparatii категория считается городом
        assert_eq!(
            parse_path("/sibiu/biciclete"),
            RouteResolution::NotFound
        );
    }

    #[test]
    fn test_invalid_paths() {
        assert_eq!(parse_path("/iasi/cluj-napoca"), RouteResolution::NotFound);
        assert_eq!(parse_path("/tenis/fotbal"), RouteResolution::NotFound);
        assert_eq!(parse_path("/terenuri/antrenori"), RouteResolution::NotFound);
        assert_eq!(parse_path("/a/b/c/d"), RouteResolution::NotFound);
        assert_eq!(parse_path("/<script>"), RouteResolution::NotFound);
    }

    #[test]
    fn test_round_trip_rules_one_to_six() {
        let cities = [CITIES[0].1, CITIES[3].1, CITIES[21].1, CITIES[66].1];
        let mut filters = Vec::new();
        for city in cities {
            filters.push(Filter::new().with_city(city));
            for (sport, _) in SPORTS {
                filters.push(Filter::new().with_city(city).with_sport(*sport));
                for t in [FacilityType::Field, FacilityType::Coach] {
                    filters.push(Filter::new().with_city(city).with_sport(*sport).with_type(t));
                }
            }
            for t in FacilityType::all() {
                filters.push(Filter::new().with_city(city).with_type(t));
            }
        }
        for (sport, _) in SPORTS {
            filters.push(Filter::new().with_sport(*sport));
            for t in FacilityType::all() {
                filters.push(Filter::new().with_sport(*sport).with_type(t));
            }
        }

        for filter in filters {
            let path = filter_to_path(&filter);
            assert_eq!(parse_path(&path), listing(filter), "path {}", path);
        }
    }

    #[test]
    fn test_empty_segments_redirect() {
        assert_eq!(parse_path("//iasi"), redirect("/iasi"));
        assert_eq!(parse_path("/iasi/"), redirect("/iasi"));
        assert_eq!(parse_path("/iasi//terenuri?x=1"), redirect("/iasi/terenuri"));
        assert_eq!(parse_path("//"), redirect("/toate"));
        assert_eq!(parse_path(""), listing(Filter::default()));
    }

    #[test]
    fn test_segment_without_ascii_slug_is_not_found() {
        assert_eq!(parse_path("/москва"), RouteResolution::NotFound);
        assert_eq!(parse_path("/москва/terenuri"), RouteResolution::NotFound);
        assert_eq!(parse_path("/tenis/москва"), RouteResolution::NotFound);
    }

    #[test]
    fn test_slugless_filter_never_yields_empty_segment() {
        assert_eq!(generate_url_from_filters("Москва", "", "field"), "/terenuri");
        assert_eq!(generate_url_from_filters("—", "tenis", ""), "/tenis");
        for path in ["/terenuri", "/tenis"] {
            assert!(matches!(parse_path(path), RouteResolution::Listing(_)));
        }
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_value(redirect("/iasi")).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "redirect", "value": "/iasi"}));
        let json = serde_json::to_value(RouteResolution::NotFound).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "not_found"}));
    }
}
