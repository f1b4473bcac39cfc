//! Backend base URL, process-global. The friends service owns all data;
//! the UI only needs to know where it lives.

use once_cell::sync::Lazy;
use std::sync::Mutex;

/// Default matches the friends service's usual local port.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

static BASE_URL: Lazy<Mutex<String>> = Lazy::new(|| Mutex::new(DEFAULT_BASE_URL.to_string()));

/// Current base URL, never with a trailing slash.
pub fn base_url() -> String {
    BASE_URL.lock().unwrap().clone()
}

/// Point the app at a different friends service (e.g. from an embedding shell).
pub fn set_base_url(url: &str) {
    let trimmed = url.trim_end_matches('/');
    *BASE_URL.lock().unwrap() = trimmed.to_string();
}
