use serde::{Deserialize, Serialize};

use crate::shared::seo::SeoContent;

/// Сохранённая на стороне REST API версия SEO страницы (`GET /seo-pages?url=`).
///
/// Titles, meta and counts are always recomputed; only an editor-written
/// `custom_description` is carried over.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoPage {
    pub url: String,
    #[serde(default)]
    pub meta_title: String,
    #[serde(default)]
    pub meta_description: String,
    #[serde(default)]
    pub h1_title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub facility_count: usize,
    #[serde(default)]
    pub custom_description: Option<String>,
}

impl SeoPage {
    pub fn from_content(url: impl Into<String>, content: &SeoContent, facility_count: usize) -> Self {
        Self {
            url: url.into(),
            meta_title: content.meta_title.clone(),
            meta_description: content.meta_description.clone(),
            h1_title: content.h1_title.clone(),
            description: content.description.clone(),
            facility_count,
            custom_description: None,
        }
    }

    pub fn into_content(self) -> SeoContent {
        SeoContent {
            meta_title: self.meta_title,
            meta_description: self.meta_description,
            h1_title: self.h1_title,
            description: self.description,
        }
    }

    pub fn has_custom_description(&self) -> bool {
        self.custom_description
            .as_deref()
            .map_or(false, |d| !d.trim().is_empty())
    }
}
