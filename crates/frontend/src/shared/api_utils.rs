//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

use crate::shared::config::ApiConfig;

/// Get the base URL for API requests
///
/// Uses `api.base_url` when configured, otherwise constructs the URL from
/// the current window location and `api.port`.
///
/// # Returns
/// - API base URL like "http://localhost:5000"
/// - Empty string if window is not available (relative URLs)
pub fn api_base(config: &ApiConfig) -> String {
    if let Some(base) = config
        .base_url
        .as_deref()
        .map(str::trim)
        .filter(|b| !b.is_empty())
    {
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
    format!("{}//{}:{}", protocol, hostname, config.port)
}

/// Build a full API URL from a base and a path
///
/// # Example
/// ```rust
/// # use frontend::shared::api_utils::api_url;
/// assert_eq!(api_url("http://localhost:5000", "/api/chat"), "http://localhost:5000/api/chat");
/// ```
pub fn api_url(base: &str, path: &str) -> String {
    format!("{}{}", base, path)
}
