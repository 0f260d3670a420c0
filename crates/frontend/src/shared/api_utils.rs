//! URL helpers for frontend-backend communication

use crate::shared::config::{API_PORT, API_PREFIX};

/// Get the base URL for API requests
///
/// Built from the current window location with the backend port.
///
/// # Returns
/// - API base URL like "http://localhost:3000"
/// - Empty string if window is not available
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
    base_for(&protocol, &hostname)
}

fn base_for(protocol: &str, hostname: &str) -> String {
    format!("{}//{}:{}", protocol, hostname, API_PORT)
}

/// Join a base URL and a resource path under the `/api` prefix
///
/// # Example
/// ```ignore
/// let url = api_url(&api_base(), "/billing/invoices");
/// ```
pub fn api_url(base: &str, path: &str) -> String {
    let path = path.trim_start_matches(API_PREFIX);
    if path.starts_with('/') {
        format!("{}{}{}", base, API_PREFIX, path)
    } else {
        format!("{}{}/{}", base, API_PREFIX, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_uses_backend_port() {
        assert_eq!(base_for("https:", "practice.local"), "https://practice.local:3000");
    }

    #[test]
    fn test_url_prefixes_api_once() {
        let base = "http://localhost:3000";
        assert_eq!(
            api_url(base, "/compliance/deadlines"),
            "http://localhost:3000/api/compliance/deadlines"
        );
        assert_eq!(
            api_url(base, "/api/system/auth/me"),
            "http://localhost:3000/api/system/auth/me"
        );
        assert_eq!(
            api_url(base, "fixed-assets"),
            "http://localhost:3000/api/fixed-assets"
        );
    }
}
