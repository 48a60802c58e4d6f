use crate::domain::a001_facility::ui::listing::ListingPage;
use crate::domain::a002_registration::ui::wizard::RegistrationWizard;
use crate::layout::Shell;
use crate::shared::navigation::use_navigator;
use contracts::shared::url_filters::REGISTRATION_PATH;
use leptos::prelude::*;

/// Выбор страницы по пути. Всё, что не мастер регистрации, это листинг;
/// разбор пути и 404 делает сам листинг.
#[component]
pub fn AppRoutes() -> impl IntoView {
    let navigator = use_navigator();
    let is_registration = Memo::new(move |_| {
        navigator.path.get().trim_end_matches('/') == REGISTRATION_PATH
    });

    view! {
        <Shell>
            <Show
                when=move || is_registration.get()
                fallback=|| view! { <ListingPage /> }
            >
                <RegistrationWizard />
            </Show>
        </Shell>
    }
}
