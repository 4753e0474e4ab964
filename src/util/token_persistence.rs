//! Browser localStorage slot for the auth token.
//!
//! The token is stored as a raw string under a fixed key so a page reload
//! restores the logged-in session. Requires a browser environment; SSR
//! paths safely report no credential.

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "authToken";

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Read the persisted token. Absence means "no credential".
pub fn load() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        storage()?.get_item(STORAGE_KEY).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist `token`, replacing any previous value.
pub fn save(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            let _ = storage.set_item(STORAGE_KEY, token);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Remove the persisted token. Safe to call when nothing is stored.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }
}
