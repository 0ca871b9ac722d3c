//! Typed access to the browser's storage areas.
//!
//! localStorage carries state shared across tabs (token, user record, focus
//! session); sessionStorage carries the one-shot auth notice. All helpers
//! swallow storage-access failures: a browser with storage disabled behaves
//! like one with nothing stored.

use serde::{de::DeserializeOwned, Serialize};
use web_sys::Storage;

fn local() -> Option<Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

fn session() -> Option<Storage> {
    web_sys::window().and_then(|w| w.session_storage().ok().flatten())
}

pub fn get_string(key: &str) -> Option<String> {
    local().and_then(|s| s.get_item(key).ok().flatten())
}

pub fn set_string(key: &str, value: &str) {
    if let Some(storage) = local() {
        let _ = storage.set_item(key, value);
    }
}

pub fn remove(key: &str) {
    if let Some(storage) = local() {
        let _ = storage.remove_item(key);
    }
}

/// Load and parse a JSON record. Corrupt data reads as absent.
pub fn get_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    let raw = get_string(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("discarding corrupt record under {key:?}: {err}");
            None
        }
    }
}

pub fn set_json<T: Serialize>(key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(json) => set_string(key, &json),
        Err(err) => log::error!("failed to serialize record for {key:?}: {err}"),
    }
}

/// Store the one-shot notice for the next login view load.
pub fn set_notice(key: &str, message: &str) {
    if let Some(storage) = session() {
        let _ = storage.set_item(key, message);
    }
}

/// Read and clear the one-shot notice.
pub fn take_notice(key: &str) -> Option<String> {
    let storage = session()?;
    let message = storage.get_item(key).ok().flatten()?;
    let _ = storage.remove_item(key);
    Some(message)
}
