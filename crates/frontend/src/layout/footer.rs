use contracts::enums::facility_type::FacilityType;
use contracts::shared::seo::SITE_NAME;
use contracts::shared::url_filters::filter_to_path;
use contracts::domain::a001_facility::filter::Filter;
use leptos::prelude::*;

use crate::shared::navigation::{handle_internal_link, use_navigator};

/// Ссылки на страницы типов для перелинковки
#[component]
pub fn Footer() -> impl IntoView {
    let navigator = use_navigator();

    view! {
        <footer
            class="app-footer"
            on:click=move |ev| {
                handle_internal_link(&ev, navigator);
            }
        >
            <nav class="app-footer__links">
                {FacilityType::all()
                    .into_iter()
                    .map(|t| {
                        let href = filter_to_path(&Filter::new().with_type(t));
                        view! { <a href=href>{t.display_name()}</a> }
                    })
                    .collect_view()}
            </nav>
            <div class="app-footer__copy">{format!("© {}", SITE_NAME)}</div>
        </footer>
    }
}
