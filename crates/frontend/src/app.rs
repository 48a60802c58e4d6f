use crate::routes::routes::AppRoutes;
use crate::shared::navigation::Navigator;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    let navigator = Navigator::new();
    navigator.init_history_integration();
    provide_context(navigator);

    view! {
        <ConfigProvider>
            <AppRoutes />
        </ConfigProvider>
    }
}
