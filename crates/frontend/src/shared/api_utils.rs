//! API utilities for frontend-backend communication.

/// Base URL for API requests: the origin the page was served from.
/// Empty string outside a browser context.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    window.location().origin().unwrap_or_default()
}

/// Build a full API URL from a path starting with "/",
/// e.g. `api_url("/api/schema")`.
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
