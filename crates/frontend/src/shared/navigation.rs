use leptos::prelude::*;
use wasm_bindgen::JsValue;
use web_sys::window;

/// Клиентская навигация поверх History API.
///
/// `path` is always percent-decoded ("/iași", not "/ia%C8%99i").
#[derive(Clone, Copy)]
pub struct Navigator {
    pub path: RwSignal<String>,
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            path: RwSignal::new(current_path()),
        }
    }

    /// Keeps `path` in sync with back/forward buttons.
    pub fn init_history_integration(&self) {
        let path = self.path;
        let _ = window_event_listener(leptos::ev::popstate, move |_| {
            path.set(current_path());
        });
    }

    /// New history entry
    pub fn navigate(&self, to: &str) {
        if self.path.get_untracked() == to {
            return;
        }
        if let Some(history) = window().and_then(|w| w.history().ok()) {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(to));
        }
        self.path.set(to.to_string());
        scroll_to_top();
    }

    /// Rewrites the current entry (canonical redirects)
    pub fn replace(&self, to: &str) {
        if let Some(history) = window().and_then(|w| w.history().ok()) {
            if let Err(e) = history.replace_state_with_url(&JsValue::NULL, "", Some(to)) {
                log::warn!("replaceState({}) failed: {:?}", to, e);
            }
        }
        self.path.set(to.to_string());
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_navigator() -> Navigator {
    use_context::<Navigator>().expect("Navigator not found in context")
}

fn current_path() -> String {
    let raw = window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string());
    urlencoding::decode(&raw)
        .map(|p| p.into_owned())
        .unwrap_or(raw)
}

fn scroll_to_top() {
    if let Some(w) = window() {
        w.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

/// Intercepts clicks on internal `<a href="/...">` inside generated HTML.
///
/// Returns true when the click was turned into client-side navigation.
pub fn handle_internal_link(ev: &leptos::ev::MouseEvent, navigator: Navigator) -> bool {
    use wasm_bindgen::JsCast;

    if ev.ctrl_key() || ev.meta_key() || ev.shift_key() || ev.button() != 0 {
        return false;
    }
    let Some(target) = ev.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) else {
        return false;
    };
    let Some(anchor) = target.closest("a").ok().flatten() else {
        return false;
    };
    let Some(href) = anchor.get_attribute("href") else {
        return false;
    };
    if !href.starts_with('/') || href.starts_with("//") {
        return false;
    }

    ev.prevent_default();
    navigator.navigate(&href);
    true
}
