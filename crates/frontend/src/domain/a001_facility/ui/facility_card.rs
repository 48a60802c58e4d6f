use contracts::domain::a001_facility::aggregate::Facility;
use contracts::domain::a002_registration::form::is_http_url;
use contracts::enums::facility_type::FacilityType;
use contracts::shared::slug::{repair_category_slug_to_name, sport_name_to_slug, sport_slug_to_name};
use leptos::prelude::*;
use thaw::*;

const DESCRIPTION_PREVIEW_CHARS: usize = 160;

/// Обрезает описание по границе слова
pub fn short_description(text: &str, max_chars: usize) -> String {
    let text = text.trim();
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let head: String = text.chars().take(max_chars).collect();
    let cut = head.rfind(' ').unwrap_or(head.len());
    format!("{}…", head[..cut].trim_end_matches([',', '.', ';', ' ']))
}

fn address_line(facility: &Facility) -> String {
    match facility.location.as_deref().map(str::trim).filter(|l| !l.is_empty()) {
        Some(location) => format!("{}, {}", location, facility.city),
        None => facility.city.clone(),
    }
}

/// Ссылка на сайт только для http(s), иначе ссылки нет
fn website_href(website: Option<&str>) -> Option<String> {
    website
        .map(str::trim)
        .filter(|w| is_http_url(w))
        .map(str::to_string)
}

#[component]
pub fn FacilityCard(facility: Facility) -> impl IntoView {
    let address = address_line(&facility);
    let price = facility.price_label();
    let sport = facility
        .sport
        .as_deref()
        .map(|s| sport_slug_to_name(&sport_name_to_slug(s)));
    let description = facility
        .description
        .as_deref()
        .map(|d| short_description(d, DESCRIPTION_PREVIEW_CHARS))
        .filter(|d| !d.is_empty());
    let repair_categories: Vec<String> = if facility.facility_type == FacilityType::RepairShop {
        facility
            .repair_categories
            .iter()
            .map(|c| repair_category_slug_to_name(c))
            .collect()
    } else {
        Vec::new()
    };
    let added = facility
        .created_at
        .map(|dt| format!("Adăugat pe {}", dt.format("%d.%m.%Y")));
    let image = facility.image_url.clone().filter(|u| !u.is_empty());
    let phone = facility.phone.clone().filter(|p| !p.is_empty());
    let website = website_href(facility.website.as_deref());
    let specialization = facility.specialization.clone();

    view! {
        <Card class="facility-card">
            {image.map(|src| view! {
                <img class="facility-card__image" src=src alt=facility.name.clone() loading="lazy" />
            })}
            <div class="facility-card__body">
                <h3 class="facility-card__name">{facility.name.clone()}</h3>
                <div class="facility-card__address">{address}</div>
                <div class="facility-card__tags">
                    {sport.map(|s| view! {
                        <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>{s}</Badge>
                    })}
                    {specialization.map(|s| view! {
                        <Badge appearance=BadgeAppearance::Outline>{s}</Badge>
                    })}
                    {repair_categories
                        .into_iter()
                        .map(|c| view! { <Badge appearance=BadgeAppearance::Outline>{c}</Badge> })
                        .collect_view()}
                </div>
                {description.map(|d| view! { <p class="facility-card__description">{d}</p> })}
                {price.map(|p| view! { <div class="facility-card__price">{p}</div> })}
                <div class="facility-card__contacts">
                    {phone.map(|p| {
                        let href = format!("tel:{}", p.replace(' ', ""));
                        view! { <a href=href>{p}</a> }
                    })}
                    {website.map(|w| view! {
                        <a href=w target="_blank" rel="noopener noreferrer">"Website"</a>
                    })}
                </div>
                {added.map(|a| view! { <div class="facility-card__added">{a}</div> })}
            </div>
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_description_keeps_short_text() {
        assert_eq!(short_description("  Teren acoperit ", 50), "Teren acoperit");
    }

    #[test]
    fn test_short_description_cuts_on_word() {
        let text = "Teren de tenis cu zgură, nocturnă și vestiare moderne";
        assert_eq!(short_description(text, 25), "Teren de tenis cu zgură…");
    }

    #[test]
    fn test_address_line() {
        let mut facility: Facility = serde_json::from_value(serde_json::json!({
            "id": 1,
            "facility_type": "field",
            "name": "Arena",
            "city": "Brașov",
        }))
        .unwrap();
        assert_eq!(address_line(&facility), "Brașov");
        facility.location = Some("Str. Lungă 10".into());
        assert_eq!(address_line(&facility), "Str. Lungă 10, Brașov");
    }

    #[test]
    fn test_website_href_only_http() {
        assert_eq!(
            website_href(Some(" https://arena.ro ")).as_deref(),
            Some("https://arena.ro")
        );
        assert_eq!(website_href(Some("javascript:alert(1)")), None);
        assert_eq!(website_href(Some("www.arena.ro")), None);
        assert_eq!(website_href(None), None);
    }
}
