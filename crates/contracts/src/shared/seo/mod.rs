//! SEO copy for listing pages.
//!
//! Everything here is a pure function of `(Filter, result_count)`; nothing is
//! cached, so the copy always matches the live result count.

pub mod count;
pub mod description;
pub mod titles;

pub use count::count_phrase;
pub use description::{generate_description_html, related_filters};
pub use titles::{generate_h1, generate_seo_description, generate_seo_title};

use serde::{Deserialize, Serialize};

use crate::domain::a001_facility::filter::Filter;

pub const SITE_NAME: &str = "SportLocator";

/// Метаданные страницы и текст описания
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoContent {
    pub meta_title: String,
    pub meta_description: String,
    pub h1_title: String,
    /// HTML: intro, "Vezi și" links, call to action
    pub description: String,
}

pub fn generate_seo_content(filter: &Filter, result_count: usize) -> SeoContent {
    SeoContent {
        meta_title: generate_seo_title(filter, result_count),
        meta_description: generate_seo_description(filter, result_count),
        h1_title: generate_h1(filter),
        description: generate_description_html(filter, result_count),
    }
}

pub(crate) fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::facility_type::FacilityType;

    #[test]
    fn test_content_is_consistent() {
        let f = Filter::new().with_city("Iași").with_type(FacilityType::Field);
        let content = generate_seo_content(&f, 3);
        assert_eq!(content.h1_title, "Terenuri Sportive în Iași");
        assert!(content.meta_title.starts_with(&content.h1_title));
        assert!(content.meta_title.contains("3 terenuri disponibile"));
        assert!(content.description.contains("3 terenuri disponibile"));
    }

    #[test]
    fn test_serialized_field_names() {
        let json = serde_json::to_value(SeoContent::default()).unwrap();
        for key in ["metaTitle", "metaDescription", "h1Title", "description"] {
            assert!(json.get(key).is_some(), "missing {}", key);
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html(r#"<a href="x">&'"#), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
    }
}
