use contracts::domain::a001_facility::filter::Filter;
use contracts::enums::facility_type::FacilityType;
use contracts::shared::slug::cities::all_city_names;
use contracts::shared::slug::comparison_key;
use contracts::shared::slug::repair_categories::REPAIR_CATEGORIES;
use contracts::shared::slug::sports::{is_known_sport_slug, SPORTS};
use leptos::prelude::*;
use thaw::*;

use crate::domain::a003_catalog::api;

/// Опции выпадающего списка: (value, label)
type Options = Vec<(String, String)>;

fn builtin_cities() -> Options {
    let mut names: Vec<String> = all_city_names().into_iter().map(str::to_string).collect();
    names.sort_by_cached_key(|n| comparison_key(n));
    names.into_iter().map(|n| (n.clone(), n)).collect()
}

fn builtin_sports() -> Options {
    SPORTS
        .iter()
        .map(|(slug, name)| (slug.to_string(), name.to_string()))
        .collect()
}

/// Adds `current` when it is not among the options (e.g. a city that only
/// exists in the URL).
pub fn with_current(mut options: Options, current: Option<&str>) -> Options {
    if let Some(current) = current {
        let key = comparison_key(current);
        if !options.iter().any(|(value, _)| comparison_key(value) == key) {
            options.insert(0, (current.to_string(), current.to_string()));
        }
    }
    options
}

fn blank(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

#[component]
pub fn FilterBar(#[prop(into)] filter: Signal<Filter>, on_change: Callback<Filter>) -> impl IntoView {
    let cities = RwSignal::new(builtin_cities());
    let sports = RwSignal::new(builtin_sports());

    wasm_bindgen_futures::spawn_local(async move {
        match api::fetch_cities().await {
            Ok(list) if !list.is_empty() => {
                let mut names: Vec<String> = list.into_iter().map(|c| c.name).collect();
                names.sort_by_cached_key(|n| comparison_key(n));
                names.dedup();
                cities.set(names.into_iter().map(|n| (n.clone(), n)).collect());
            }
            Ok(_) => {}
            Err(e) => log::warn!("Using built-in city list: {}", e),
        }
        match api::fetch_sports().await {
            Ok(list) => {
                // неизвестный slug в URL разобрался бы как город
                let known: Options = list
                    .into_iter()
                    .map(|s| (s.slug(), s.name))
                    .filter(|(slug, _)| is_known_sport_slug(slug))
                    .collect();
                if !known.is_empty() {
                    sports.set(known);
                }
            }
            Err(e) => log::warn!("Using built-in sport list: {}", e),
        }
    });

    let change = move |update: &dyn Fn(&mut Filter)| {
        let mut f = filter.get_untracked();
        update(&mut f);
        on_change.run(f.canonical());
    };

    let show_sport = move || {
        let f = filter.get();
        !(f.facility_type == Some(FacilityType::EquipmentShop) && f.city.is_some())
            && f.repair_category.is_none()
    };
    let show_repair_category = move || filter.get().facility_type == Some(FacilityType::RepairShop);

    view! {
        <div class="filter-bar">
            <select
                class="filter-bar__select"
                aria-label="Oraș"
                on:change=move |ev| {
                    let value = blank(event_target_value(&ev));
                    change(&|f: &mut Filter| f.city = value.clone());
                }
            >
                <option value="">"Toate orașele"</option>
                {move || {
                    let current = filter.get().city;
                    with_current(cities.get(), current.as_deref())
                        .into_iter()
                        .map(|(value, label)| {
                            let selected = current
                                .as_deref()
                                .map_or(false, |c| comparison_key(c) == comparison_key(&value));
                            view! { <option value=value selected=selected>{label}</option> }
                        })
                        .collect_view()
                }}
            </select>

            <Show when=show_sport>
                <select
                    class="filter-bar__select"
                    aria-label="Sport"
                    on:change=move |ev| {
                        let value = blank(event_target_value(&ev));
                        change(&|f: &mut Filter| f.sport = value.clone());
                    }
                >
                    <option value="">"Toate sporturile"</option>
                    {move || {
                        let current = filter.get().sport;
                        sports
                            .get()
                            .into_iter()
                            .map(|(value, label)| {
                                let selected = current.as_deref() == Some(value.as_str());
                                view! { <option value=value selected=selected>{label}</option> }
                            })
                            .collect_view()
                    }}
                </select>
            </Show>

            <select
                class="filter-bar__select"
                aria-label="Tip"
                on:change=move |ev| {
                    let value = FacilityType::from_code(&event_target_value(&ev));
                    change(&|f: &mut Filter| f.facility_type = value);
                }
            >
                <option value="">"Toate tipurile"</option>
                {move || {
                    let current = filter.get().facility_type;
                    FacilityType::all()
                        .into_iter()
                        .map(|t| {
                            view! {
                                <option value={t.code()} selected={current == Some(t)}>
                                    {t.display_name()}
                                </option>
                            }
                        })
                        .collect_view()
                }}
            </select>

            <Show when=show_repair_category>
                <select
                    class="filter-bar__select"
                    aria-label="Categorie reparații"
                    on:change=move |ev| {
                        let value = blank(event_target_value(&ev));
                        change(&|f: &mut Filter| f.repair_category = value.clone());
                    }
                >
                    <option value="">"Toate categoriile"</option>
                    {move || {
                        let current = filter.get().repair_category;
                        REPAIR_CATEGORIES
                            .iter()
                            .map(|(slug, name)| {
                                let selected = current.as_deref() == Some(*slug);
                                view! { <option value={*slug} selected=selected>{*name}</option> }
                            })
                            .collect_view()
                    }}
                </select>
            </Show>

            <Button
                appearance=ButtonAppearance::Subtle
                disabled=Signal::derive(move || filter.get().is_empty())
                on_click=move |_| on_change.run(Filter::default())
            >
                "Resetează"
            </Button>
        </div>
    }
}
