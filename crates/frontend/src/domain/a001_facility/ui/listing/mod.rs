pub mod state;

use contracts::domain::a001_facility::filter::Filter;
use contracts::domain::a001_facility::listing::FacilityGroup;
use contracts::shared::url_filters::{filter_to_path, parse_path, RouteResolution, REGISTRATION_PATH};
use leptos::prelude::*;
use thaw::*;

use self::state::{visible_groups, ListingBody, ListingState};
use super::facility_card::FacilityCard;
use super::filter_bar::FilterBar;
use crate::shared::navigation::{handle_internal_link, use_navigator};

#[component]
pub fn ListingPage() -> impl IntoView {
    let navigator = use_navigator();
    let state = ListingState::new();

    Effect::new(move |_| {
        let path = navigator.path.get();
        state.load(path, navigator);
    });

    // фильтр известен сразу из пути, не дожидаясь ответа
    let filter = Signal::derive(move || match parse_path(&navigator.path.get()) {
        RouteResolution::Listing(f) => f,
        _ => Filter::default(),
    });
    let on_filter_change = Callback::new(move |f: Filter| {
        navigator.navigate(&filter_to_path(&f));
    });

    let body = move || {
        let page = state.page.get();
        let error = state.error.get();
        match ListingBody::pick(
            state.not_found.get(),
            page.is_some(),
            state.loading.get(),
            error.is_some(),
        ) {
            ListingBody::NotFound => view! { <NotFound /> }.into_any(),
            ListingBody::Page => {
                let Some(page) = page else {
                    return ().into_any();
                };
                let groups = visible_groups(&page);
                let description = page.seo.description.clone();
                view! {
                    <h1 class="listing-title">{page.seo.h1_title.clone()}</h1>
                    {if groups.is_empty() {
                        view! { <NoResults /> }.into_any()
                    } else {
                        groups
                            .into_iter()
                            .map(|group| view! { <GroupSection group=group /> })
                            .collect_view()
                            .into_any()
                    }}
                    <div
                        class="seo-description"
                        inner_html=description
                        on:click=move |ev| {
                            handle_internal_link(&ev, navigator);
                        }
                    ></div>
                }
                .into_any()
            }
            ListingBody::Loading => view! {
                <Flex gap=FlexGap::Small style="justify-content:center;padding:48px;">
                    <Spinner />
                </Flex>
            }
            .into_any(),
            ListingBody::Error => view! {
                <LoadError
                    message=error.unwrap_or_default()
                    on_retry=Callback::new(move |_: ()| {
                        state.load(navigator.path.get_untracked(), navigator);
                    })
                />
            }
            .into_any(),
            ListingBody::Empty => view! { <NoResults /> }.into_any(),
        }
    };

    view! {
        <div class="listing-page">
            <FilterBar filter=filter on_change=on_filter_change />
            {body}
        </div>
    }
}

#[component]
fn GroupSection(group: FacilityGroup) -> impl IntoView {
    let count = group.facilities.len();
    view! {
        <section class="facility-group">
            <h2 class="facility-group__title">
                {group.title.clone()}
                " "
                <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>{count}</Badge>
            </h2>
            {if group.facilities.is_empty() {
                view! { <p class="facility-group__empty">"Nu am găsit rezultate"</p> }.into_any()
            } else {
                view! {
                    <div class="facility-grid">
                        {group
                            .facilities
                            .into_iter()
                            .map(|facility| view! { <FacilityCard facility=facility /> })
                            .collect_view()}
                    </div>
                }
                .into_any()
            }}
        </section>
    }
}

#[component]
fn LoadError(message: String, on_retry: Callback<()>) -> impl IntoView {
    view! {
        <div class="listing-empty listing-error">
            <p>"Nu am putut încărca lista. Încearcă din nou."</p>
            <p class="listing-error__details">{message}</p>
            <Button appearance=ButtonAppearance::Primary on_click=move |_| on_retry.run(())>
                "Reîncearcă"
            </Button>
        </div>
    }
}

#[component]
fn NoResults() -> impl IntoView {
    let navigator = use_navigator();
    view! {
        <div class="listing-empty">
            <p>"Nu am găsit rezultate"</p>
            <p>
                "Ai o bază sportivă sau un magazin? "
                <a
                    href=REGISTRATION_PATH
                    on:click=move |ev| {
                        handle_internal_link(&ev, navigator);
                    }
                >
                    "Înscrie-te gratuit"
                </a>
            </p>
        </div>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    let navigator = use_navigator();
    view! {
        <div class="listing-empty">
            <h1>"Pagina nu a fost găsită"</h1>
            <Button
                appearance=ButtonAppearance::Primary
                on_click=move |_| navigator.navigate("/toate")
            >
                "Vezi toate facilitățile"
            </Button>
        </div>
    }
}
