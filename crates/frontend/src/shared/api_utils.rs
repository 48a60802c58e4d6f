//! API utilities for frontend-backend communication

/// Base URL of the backend.
///
/// `API_BASE_URL` at build time wins; otherwise the backend is expected on
/// port 3000 of the host that served the page.
pub fn api_base() -> String {
    if let Some(base) = option_env!("API_BASE_URL") {
        return base.trim_end_matches('/').to_string();
    }

    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path ("/api/...")
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
