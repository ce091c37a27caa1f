//! API utilities for option sources
//!
//! Resolves relative API paths against the backend serving the current page.

/// Base URL of the backend: current host, port 3000
///
/// Empty string if window is not available.
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
    format!("{}//{}:3000", protocol, hostname)
}

pub fn is_absolute_url(path: &str) -> bool {
    path.starts_with("http://") || path.starts_with("https://")
}

/// Full URL for an API path; absolute URLs are returned unchanged
pub fn api_url(path: &str) -> String {
    if is_absolute_url(path) {
        return path.to_string();
    }
    format!("{}{}", api_base(), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_url_detection() {
        assert!(is_absolute_url("https://example.com/api/options"));
        assert!(is_absolute_url("http://localhost:3000/api/options"));
        assert!(!is_absolute_url("/api/options"));
    }

    #[test]
    fn test_absolute_url_passes_through() {
        assert_eq!(
            api_url("https://example.com/api/options"),
            "https://example.com/api/options"
        );
    }
}
