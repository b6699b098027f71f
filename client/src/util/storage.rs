//! localStorage access for progress recorded before it reaches the server.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only resident today is the pending progress queue
//! (`pending_updates::PENDING_UPDATES_KEY`), written by lesson pages and
//! drained by the navbar's sync effect. Values are JSON. Under SSR there is no
//! storage: reads miss and writes are dropped, so server output never depends
//! on a learner's browser.

use serde::Serialize;
use serde::de::DeserializeOwned;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Read and decode `key`. Undecodable entries are logged and treated as absent.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    #[cfg(feature = "hydrate")]
    {
        let raw = local_storage()?.get_item(key).ok().flatten()?;
        serde_json::from_str(&raw)
            .map_err(|e| log::warn!("discarding unreadable {key} entry: {e}"))
            .ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Encode and store `value` under `key`. A full or disabled store loses the write.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = local_storage() else {
            return;
        };
        match serde_json::to_string(value) {
            Ok(raw) => {
                if storage.set_item(key, &raw).is_err() {
                    log::warn!("could not persist {key}");
                }
            }
            Err(e) => log::warn!("could not encode {key}: {e}"),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

pub fn remove(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}
