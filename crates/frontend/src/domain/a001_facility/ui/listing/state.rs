use contracts::domain::a001_facility::listing::{FacilityGroup, ListingPage, ListingResult};
use leptos::prelude::*;

use crate::domain::a001_facility::api;
use crate::shared::document_meta;
use crate::shared::navigation::Navigator;

/// Нумерация запросов листинга: применяется только ответ на последний.
#[derive(Debug, Default, Clone)]
pub struct RequestSequence {
    latest: u64,
}

impl RequestSequence {
    pub fn next(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_latest(&self, id: u64) -> bool {
        self.latest == id
    }
}

#[derive(Clone, Copy)]
pub struct ListingState {
    pub page: RwSignal<Option<ListingPage>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub not_found: RwSignal<bool>,
    sequence: StoredValue<RequestSequence>,
}

impl ListingState {
    pub fn new() -> Self {
        Self {
            page: RwSignal::new(None),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            not_found: RwSignal::new(false),
            sequence: StoredValue::new(RequestSequence::default()),
        }
    }

    pub fn load(&self, path: String, navigator: Navigator) {
        let Some(request_id) = self.sequence.try_update_value(|s| s.next()) else {
            return;
        };
        self.loading.set(true);
        self.error.set(None);

        let this = *self;
        wasm_bindgen_futures::spawn_local(async move {
            let result = api::fetch_listing(&path).await;

            // компонент уже размонтирован или пришёл более новый запрос
            let is_latest = this
                .sequence
                .try_with_value(|s| s.is_latest(request_id))
                .unwrap_or(false);
            if !is_latest {
                log::debug!("Dropping stale listing response for {}", path);
                return;
            }

            this.loading.set(false);
            match result {
                Ok(ListingResult::Page(page)) => {
                    document_meta::apply_seo(&page.seo, &page.canonical_url);
                    this.error.set(None);
                    this.not_found.set(false);
                    this.page.set(Some(page));
                }
                Ok(ListingResult::Redirect { location }) => {
                    log::debug!("Canonical redirect {} -> {}", path, location);
                    navigator.replace(&location);
                }
                Ok(ListingResult::NotFound) => {
                    document_meta::set_title("Pagina nu a fost găsită | SportLocator");
                    this.page.set(None);
                    this.not_found.set(true);
                }
                Err(e) => {
                    log::error!("Failed to load listing {}: {}", path, e);
                    this.page.set(None);
                    this.not_found.set(false);
                    this.error.set(Some(e));
                }
            }
        });
    }
}

/// Что показывать под фильтрами
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingBody {
    NotFound,
    Page,
    Loading,
    Error,
    Empty,
}

impl ListingBody {
    /// A loaded page stays visible while the next one loads.
    pub fn pick(not_found: bool, has_page: bool, loading: bool, has_error: bool) -> Self {
        if not_found {
            Self::NotFound
        } else if has_page {
            Self::Page
        } else if loading {
            Self::Loading
        } else if has_error {
            Self::Error
        } else {
            Self::Empty
        }
    }
}

impl Default for ListingState {
    fn default() -> Self {
        Self::new()
    }
}

/// Группы для показа: при выбранном типе одна (даже пустая), иначе только
/// непустые.
pub fn visible_groups(page: &ListingPage) -> Vec<FacilityGroup> {
    if page.filter.facility_type.is_some() {
        return page.groups.clone();
    }
    page.groups
        .iter()
        .filter(|g| !g.facilities.is_empty())
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_facility::filter::Filter;
    use contracts::enums::facility_type::FacilityType;
    use contracts::shared::seo::SeoContent;

    #[test]
    fn test_only_latest_request_applies() {
        let mut seq = RequestSequence::default();
        let first = seq.next();
        let second = seq.next();
        assert!(!seq.is_latest(first));
        assert!(seq.is_latest(second));
    }

    fn page(filter: Filter) -> ListingPage {
        ListingPage {
            filter,
            canonical_url: "/toate".into(),
            groups: FacilityType::all()
                .into_iter()
                .map(|t| FacilityGroup::new(t, Vec::new()))
                .collect(),
            total: 0,
            seo: SeoContent::default(),
        }
    }

    #[test]
    fn test_failed_load_shows_error() {
        assert_eq!(ListingBody::pick(false, false, false, true), ListingBody::Error);
        assert_eq!(ListingBody::pick(false, false, true, false), ListingBody::Loading);
        assert_eq!(ListingBody::pick(false, true, true, false), ListingBody::Page);
        assert_eq!(ListingBody::pick(true, false, false, false), ListingBody::NotFound);
        assert_eq!(ListingBody::pick(false, false, false, false), ListingBody::Empty);
    }

    #[test]
    fn test_empty_groups_hidden_without_type() {
        assert!(visible_groups(&page(Filter::default())).is_empty());
    }

    #[test]
    fn test_selected_type_group_always_shown() {
        let mut p = page(Filter::new().with_type(FacilityType::Coach));
        p.groups = vec![FacilityGroup::new(FacilityType::Coach, Vec::new())];
        assert_eq!(visible_groups(&p).len(), 1);
    }
}
