pub mod footer;
pub mod header;

use leptos::prelude::*;

use self::footer::Footer;
use self::header::Header;

#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-shell">
            <Header />
            <main class="app-main">{children()}</main>
            <Footer />
        </div>
    }
}
