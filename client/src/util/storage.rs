//! Browser `localStorage` access for JSON-encoded settings.

use serde::de::DeserializeOwned;

/// Load a JSON value from `localStorage` for `key`.
///
/// Missing storage, a missing key, and undecodable JSON all yield `None`.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        let raw = storage.get_item(key).ok().flatten()?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("ignoring malformed localStorage entry '{key}': {e}");
                None
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}
