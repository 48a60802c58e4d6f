use contracts::domain::a001_facility::aggregate::{Facility, FacilityQuery};
use contracts::domain::a001_facility::filter::Filter;
use contracts::domain::a001_facility::listing::{FacilityGroup, ListingPage, ListingResult};
use contracts::enums::facility_type::FacilityType;
use contracts::shared::url_filters::{filter_to_path, parse_path, RouteResolution};

use crate::domain::a004_seo_page;
use crate::shared::directory::FacilityDirectory;

/// Разбор пути листинга и загрузка страницы.
///
/// Unknown paths give `NotFound`, non-canonical spellings a `Redirect` to
/// the canonical URL; only canonical paths touch the upstream.
pub async fn load_listing(directory: &dyn FacilityDirectory, raw_path: &str) -> ListingResult {
    let path = decode_path(raw_path);

    match parse_path(&path) {
        RouteResolution::NotFound => {
            tracing::info!("Listing path not recognized: {}", path);
            ListingResult::NotFound
        }
        RouteResolution::Redirect(location) => {
            tracing::debug!("Listing path {} -> {}", path, location);
            ListingResult::Redirect { location }
        }
        RouteResolution::Listing(filter) => {
            ListingResult::Page(build_page(directory, filter).await)
        }
    }
}

pub async fn build_page(directory: &dyn FacilityDirectory, filter: Filter) -> ListingPage {
    let groups = fetch_groups(directory, &filter).await;
    let total = groups.iter().map(|g| g.facilities.len()).sum();
    let canonical_url = filter_to_path(&filter);
    let seo = a004_seo_page::service::page_seo(directory, &filter, &canonical_url, total).await;

    ListingPage {
        filter,
        canonical_url,
        groups,
        total,
        seo,
    }
}

/// Одна группа при выбранном типе, иначе по группе на каждый тип.
///
/// Without a type the four queries run concurrently; a failed query yields
/// an empty group instead of failing the page.
pub async fn fetch_groups(directory: &dyn FacilityDirectory, filter: &Filter) -> Vec<FacilityGroup> {
    match filter.facility_type {
        Some(t) => vec![FacilityGroup::new(
            t,
            fetch_or_empty(directory, filter.to_query(t)).await,
        )],
        None => {
            let (fields, coaches, repair_shops, equipment_shops) = tokio::join!(
                fetch_or_empty(directory, filter.to_query(FacilityType::Field)),
                fetch_or_empty(directory, filter.to_query(FacilityType::Coach)),
                fetch_or_empty(directory, filter.to_query(FacilityType::RepairShop)),
                fetch_or_empty(directory, filter.to_query(FacilityType::EquipmentShop)),
            );
            vec![
                FacilityGroup::new(FacilityType::Field, fields),
                FacilityGroup::new(FacilityType::Coach, coaches),
                FacilityGroup::new(FacilityType::RepairShop, repair_shops),
                FacilityGroup::new(FacilityType::EquipmentShop, equipment_shops),
            ]
        }
    }
}

async fn fetch_or_empty(directory: &dyn FacilityDirectory, query: FacilityQuery) -> Vec<Facility> {
    match directory.list_facilities(&query).await {
        Ok(facilities) => facilities.into_iter().filter(Facility::is_active).collect(),
        Err(e) => {
            tracing::warn!("Failed to load facilities for {:?}: {}", query.to_pairs(), e);
            Vec::new()
        }
    }
}

fn decode_path(raw: &str) -> String {
    urlencoding::decode(raw)
        .map(|p| p.into_owned())
        .unwrap_or_else(|_| raw.to_string())
}
