//! API utilities for frontend-backend communication
//!
//! The backend serves the frontend bundle itself, so API requests go to the
//! origin the page was loaded from.

/// Get the base URL for API requests
///
/// # Returns
/// - Origin like "http://localhost:3000"
/// - Empty string if window is not available, which leaves paths relative
pub fn api_base() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/query");
/// ```
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}
