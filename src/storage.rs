//! Durable Client-Side Storage
//!
//! Thin helpers over `window.localStorage`. Both the language preference and
//! the wizard step are read once at startup and written on every change.

/// Read a value from local storage.
pub fn local_get(key: &str) -> Option<String> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    storage.get_item(key).ok()?
}

/// Write a value to local storage. Quota or privacy-mode failures are ignored.
pub fn local_set(key: &str, value: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(key, value);
        }
    }
}

/// Remove a key from local storage.
pub fn local_remove(key: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}
