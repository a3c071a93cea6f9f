//! URL construction for the catalog backend.

/// The REST API listens on its own port next to the static host.
const API_PORT: u16 = 3000;

/// Base URL derived from the current window location.
///
/// Outside a browser (no `window`) this returns an empty string, which turns
/// every request URL into a relative path.
pub fn api_base() -> String {
    let Some(window) = web_sys::window() else {
        return String::new();
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".into());
    let hostname = location.hostname().unwrap_or_else(|_| "127.0.0.1".into());
    format!("{}//{}:{}", protocol, hostname, API_PORT)
}

/// Full request URL for an API path such as `/products/showcase`.
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
