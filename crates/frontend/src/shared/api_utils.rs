//! Helpers for talking to the room administration backend.

/// Base URL for API requests.
///
/// Constructed from the current window location; the backend listens on
/// port 8080 in every deployment.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:8080", protocol, hostname)
}

/// Build a full API URL from a path such as `/rooms`.
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
