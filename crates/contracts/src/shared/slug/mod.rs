//! Slug <-> name mapping for cities, sports, facility types and repair categories.
//!
//! Every table is a fixed dictionary. Unknown values go through the generic
//! fallbacks below ([`slugify`] one way, [`title_case_slug`] the other way).
//! The fallback slugifier is not injective: two different unmapped names can
//! produce the same slug ("Sân Petru" and "San-Petru" both become `san-petru`).

pub mod cities;
pub mod facility_types;
pub mod repair_categories;
pub mod sports;

pub use cities::{city_name_to_slug, city_slug_to_name};
pub use facility_types::{facility_type_name_to_slug, facility_type_slug_to_name};
pub use repair_categories::{repair_category_name_to_slug, repair_category_slug_to_name};
pub use sports::{sport_name_to_slug, sport_slug_to_name};

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Удаляет диакритику: "Timișoara" -> "Timisoara", "Brașov" -> "Brasov"
pub fn strip_diacritics(text: &str) -> String {
    text.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Ключ для сравнения имён: без диакритики, в нижнем регистре, без крайних пробелов
pub fn comparison_key(text: &str) -> String {
    strip_diacritics(text.trim()).to_lowercase()
}

/// Generic slugifier used for names that are not in a dictionary.
///
/// Lowercases, strips diacritics, turns every run of non-alphanumeric
/// characters into one hyphen and trims hyphens from both ends.
pub fn slugify(text: &str) -> String {
    let plain = strip_diacritics(text).to_lowercase();

    let mut slug = String::with_capacity(plain.len());
    let mut pending_hyphen = false;
    for ch in plain.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch);
        } else {
            pending_hyphen = true;
        }
    }
    slug
}

/// Fallback for unknown slugs: "baia-de-fier" -> "Baia De Fier"
pub fn title_case_slug(slug: &str) -> String {
    slug.trim()
        .split('-')
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// True when `segment` has the shape of a slug: letters (diacritics allowed),
/// digits and hyphens only.
pub fn is_slug_like(segment: &str) -> bool {
    !segment.is_empty()
        && !segment.starts_with('-')
        && !segment.ends_with('-')
        && segment.chars().all(|c| c.is_alphanumeric() || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_diacritics_romanian() {
        assert_eq!(strip_diacritics("Timișoara"), "Timisoara");
        assert_eq!(strip_diacritics("Târgu Mureș"), "Targu Mures");
        assert_eq!(strip_diacritics("Piatra Neamț"), "Piatra Neamt");
        // cedilla variants still show up in user input
        assert_eq!(strip_diacritics("Constanţa"), "Constanta");
        assert_eq!(strip_diacritics("Brăila"), "Braila");
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Cluj-Napoca"), "cluj-napoca");
        assert_eq!(slugify("Drobeta-Turnu Severin"), "drobeta-turnu-severin");
        assert_eq!(slugify("  Sfântu   Gheorghe  "), "sfantu-gheorghe");
        assert_eq!(slugify("Baie Mare!!"), "baie-mare");
        assert_eq!(slugify("---"), "");
    }

    #[test]
    fn test_slugify_collision_is_possible() {
        assert_eq!(slugify("Sân Petru"), slugify("San-Petru"));
    }

    #[test]
    fn test_title_case_slug() {
        assert_eq!(title_case_slug("baia-de-fier"), "Baia De Fier");
        assert_eq!(title_case_slug("orasul"), "Orasul");
        assert_eq!(title_case_slug(""), "");
        assert_eq!(title_case_slug("a--b"), "A B");
    }

    #[test]
    fn test_is_slug_like() {
        assert!(is_slug_like("cluj-napoca"));
        assert!(is_slug_like("iași"));
        assert!(!is_slug_like("<script>"));
        assert!(!is_slug_like("-iasi"));
        assert!(!is_slug_like(""));
        assert!(!is_slug_like("a b"));
    }
}
