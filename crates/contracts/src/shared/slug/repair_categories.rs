use super::{comparison_key, slugify, title_case_slug};

/// (slug, display name); third path segment of repair-shop URLs
pub static REPAIR_CATEGORIES: &[(&str, &str)] = &[
    ("biciclete", "Biciclete"),
    ("rachete", "Rachete"),
    ("schiuri-snowboard", "Schiuri și Snowboard"),
    ("role-patine", "Role și Patine"),
    ("trotinete", "Trotinete"),
    ("echipament-fitness", "Echipament Fitness"),
];

pub fn repair_category_slug_to_name(slug: &str) -> String {
    let key = slug.trim().to_lowercase();
    REPAIR_CATEGORIES
        .iter()
        .find(|(s, _)| *s == key)
        .map(|(_, name)| (*name).to_string())
        .unwrap_or_else(|| title_case_slug(&key))
}

pub fn repair_category_name_to_slug(name: &str) -> String {
    let key = comparison_key(name);
    REPAIR_CATEGORIES
        .iter()
        .find(|(slug, label)| comparison_key(label) == key || *slug == key)
        .map(|(slug, _)| (*slug).to_string())
        .unwrap_or_else(|| slugify(name))
}

pub fn is_known_repair_category_slug(slug: &str) -> bool {
    REPAIR_CATEGORIES.iter().any(|(s, _)| *s == slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        for (slug, name) in REPAIR_CATEGORIES {
            assert_eq!(repair_category_name_to_slug(name), *slug);
            assert_eq!(repair_category_slug_to_name(slug), *name);
        }
    }

    #[test]
    fn test_fallbacks() {
        assert!(is_known_repair_category_slug("biciclete"));
        assert!(!is_known_repair_category_slug("caiace"));
        assert_eq!(repair_category_slug_to_name("caiace"), "Caiace");
        assert_eq!(repair_category_name_to_slug("Schiuri si snowboard"), "schiuri-snowboard");
    }
}
