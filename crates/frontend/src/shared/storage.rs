use web_sys::window;

/// Read a value from localStorage; `None` when storage is unavailable
/// (private browsing, sandboxed iframe) or the key is unset
pub fn get_item(key: &str) -> Option<String> {
    window()?.local_storage().ok()??.get_item(key).ok()?
}
