use contracts::shared::seo::SITE_NAME;
use contracts::shared::url_filters::{ALL_FACILITIES_PATH, REGISTRATION_PATH};
use leptos::prelude::*;
use thaw::*;

use crate::shared::navigation::{handle_internal_link, use_navigator};

#[component]
pub fn Header() -> impl IntoView {
    let navigator = use_navigator();

    view! {
        <header class="app-header">
            <a
                class="app-header__brand"
                href=ALL_FACILITIES_PATH
                on:click=move |ev| {
                    handle_internal_link(&ev, navigator);
                }
            >
                {SITE_NAME}
            </a>
            <Button
                appearance=ButtonAppearance::Primary
                on_click=move |_| navigator.navigate(REGISTRATION_PATH)
            >
                "Adaugă facilitatea ta"
            </Button>
        </header>
    }
}
