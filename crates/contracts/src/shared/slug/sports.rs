use super::{comparison_key, slugify, title_case_slug};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// (slug, display name)
pub static SPORTS: &[(&str, &str)] = &[
    ("fotbal", "Fotbal"),
    ("tenis", "Tenis"),
    ("baschet", "Baschet"),
    ("volei", "Volei"),
    ("handbal", "Handbal"),
    ("padel", "Padel"),
    ("tenis-de-masa", "Tenis de Masă"),
];

static SLUG_TO_NAME: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| SPORTS.iter().copied().collect());

static NAME_TO_SLUG: Lazy<HashMap<String, &'static str>> = Lazy::new(|| {
    SPORTS
        .iter()
        .map(|(slug, name)| (comparison_key(name), *slug))
        .collect()
});

pub fn sport_slug_to_name(slug: &str) -> String {
    let key = slug.trim().to_lowercase();
    match SLUG_TO_NAME.get(key.as_str()) {
        Some(name) => (*name).to_string(),
        None => title_case_slug(&key),
    }
}

/// Accepts a display name or an already-slugged value.
pub fn sport_name_to_slug(name: &str) -> String {
    let key = comparison_key(name);
    if let Some(slug) = NAME_TO_SLUG.get(&key) {
        return (*slug).to_string();
    }
    if let Some((slug, _)) = SLUG_TO_NAME.get_key_value(key.as_str()) {
        return (*slug).to_string();
    }
    slugify(name)
}

pub fn is_known_sport_slug(slug: &str) -> bool {
    SLUG_TO_NAME.contains_key(slug)
}
