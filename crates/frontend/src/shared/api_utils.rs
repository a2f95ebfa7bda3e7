//! API utilities for frontend-backend communication
//!
//! The settings endpoints are served by the same server as the page, so the
//! API base is the page origin.

/// Get the base URL for API requests
///
/// # Returns
/// - API base URL like "http://192.168.1.20:5000"
/// - Empty string if window is not available, leaving API paths relative
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    window.location().origin().unwrap_or_default()
}
