use contracts::domain::a001_facility::filter::Filter;
use contracts::domain::a004_seo_page::aggregate::SeoPage;
use contracts::shared::seo::{generate_seo_content, SeoContent};

use crate::shared::directory::FacilityDirectory;

/// SEO для страницы листинга.
///
/// The copy is always generated from the live count. A page cached upstream
/// only contributes its editor-written `custom_description`, sanitized.
/// Lookup failures are logged and ignored.
pub async fn page_seo(
    directory: &dyn FacilityDirectory,
    filter: &Filter,
    canonical_url: &str,
    result_count: usize,
) -> SeoContent {
    let fresh = SeoPage::from_content(
        canonical_url,
        &generate_seo_content(filter, result_count),
        result_count,
    );

    let cached = match directory.get_seo_page(canonical_url).await {
        Ok(cached) => cached,
        Err(e) => {
            tracing::warn!("SEO page lookup failed for {}: {}", canonical_url, e);
            None
        }
    };

    merge_cached(fresh, cached).into_content()
}

pub fn merge_cached(mut fresh: SeoPage, cached: Option<SeoPage>) -> SeoPage {
    let Some(cached) = cached else {
        return fresh;
    };

    if cached.facility_count != fresh.facility_count {
        tracing::debug!(
            "Cached SEO for {} is stale ({} -> {} facilities)",
            fresh.url,
            cached.facility_count,
            fresh.facility_count
        );
    }

    if cached.has_custom_description() {
        let custom = ammonia::clean(cached.custom_description.as_deref().unwrap_or_default());
        // текст редактора идёт первым, ссылки и призыв остаются
        fresh.description = format!("{}{}", custom, fresh.description);
        fresh.custom_description = Some(custom);
    }
    fresh
}
