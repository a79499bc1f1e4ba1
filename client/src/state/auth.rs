//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login
//! redirects and identity-dependent rendering. The handle is the only writer
//! of the persisted token in the browser.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use pitch::session::{self, AuthStatus};
use pitch::token::{DecodeError, UserClaims};

use crate::util::storage::LocalStorageStore;

/// Current Unix time in milliseconds.
pub fn now_ms() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation)]
        let ms = js_sys::Date::now() as i64;
        ms
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| i64::try_from(d.as_millis()).unwrap_or(i64::MAX))
    }
}

/// Copyable handle over the reactive [`AuthStatus`].
///
/// Starts in `Loading`; [`AuthHandle::initialize`] resolves it from
/// `localStorage` once the app has hydrated.
#[derive(Clone, Copy, Debug)]
pub struct AuthHandle {
    status: RwSignal<AuthStatus>,
}

impl Default for AuthHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthHandle {
    pub fn new() -> Self {
        Self {
            status: RwSignal::new(AuthStatus::Loading),
        }
    }

    /// Tracked read of the full status.
    pub fn status(&self) -> AuthStatus {
        self.status.get()
    }

    pub fn is_loading(&self) -> bool {
        self.status.with(AuthStatus::is_loading)
    }

    pub fn is_authenticated(&self) -> bool {
        self.status.with(AuthStatus::is_authenticated)
    }

    pub fn user(&self) -> Option<UserClaims> {
        self.status.with(|s| s.user().cloned())
    }

    /// Resolve the stored token; see [`session::restore`].
    pub fn initialize(&self, now_ms: i64) {
        let status = session::restore(&LocalStorageStore, now_ms);
        #[cfg(feature = "hydrate")]
        log::debug!("auth restored: authenticated={}", status.is_authenticated());
        self.status.set(status);
    }

    /// Store a freshly issued token and authenticate with its claims.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] when the token cannot be decoded; the session
    /// is left unauthenticated.
    pub fn login(&self, token: &str) -> Result<(), DecodeError> {
        match session::login(&LocalStorageStore, token) {
            Ok(status) => {
                self.status.set(status);
                Ok(())
            }
            Err(err) => {
                self.status.set(AuthStatus::Unauthenticated);
                Err(err)
            }
        }
    }

    pub fn logout(&self) {
        self.status.set(session::logout(&LocalStorageStore));
    }
}
