//! `localStorage`-backed session store.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort browser-only behavior: storage that is missing
//! or throws (private mode, quota) is logged and otherwise ignored. SSR paths
//! no-op and always read as absent.

use pitch::session::SessionStore;
#[cfg(feature = "hydrate")]
use pitch::session::TOKEN_KEY;

/// Zero-sized handle to `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    match web_sys::window()?.local_storage() {
        Ok(storage) => storage,
        Err(err) => {
            log::warn!("localStorage unavailable: {err:?}");
            None
        }
    }
}

impl SessionStore for LocalStorageStore {
    fn save(&self, token: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                if let Err(err) = storage.set_item(TOKEN_KEY, token) {
                    log::warn!("failed to persist session token: {err:?}");
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    }

    fn read(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            match local_storage()?.get_item(TOKEN_KEY) {
                Ok(token) => token.filter(|t| !t.is_empty()),
                Err(err) => {
                    log::warn!("failed to read session token: {err:?}");
                    None
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                if let Err(err) = storage.remove_item(TOKEN_KEY) {
                    log::warn!("failed to remove session token: {err:?}");
                }
            }
        }
    }
}
