//! Session store abstraction and the auth lifecycle built on top of it.
//!
//! DESIGN
//! ======
//! The lifecycle is a small state machine, `Loading -> Authenticated |
//! Unauthenticated`, expressed as free functions over a [`SessionStore`] so
//! reactive hosts (the Leptos client) can drive it from signals while plain
//! hosts (the CLI) use [`AuthSession`]. Current time is always passed in;
//! `wasm32` has no usable system clock.
//!
//! Expiry is only checked on [`restore`]. A token that expires while the app
//! stays open keeps the session authenticated until the next restore.

use std::sync::Mutex;

use crate::token::{self, DecodeError, UserClaims};

/// Storage key holding the raw bearer token.
pub const TOKEN_KEY: &str = "vakyaToken";

/// Single-slot persistent storage for the bearer token.
///
/// Implementations are best-effort: write failures are swallowed and a
/// failed read is reported as absent.
pub trait SessionStore {
    fn save(&self, token: &str);
    fn read(&self) -> Option<String>;
    fn clear(&self);
}

impl<S: SessionStore + ?Sized> SessionStore for &S {
    fn save(&self, token: &str) {
        (**self).save(token);
    }

    fn read(&self) -> Option<String> {
        (**self).read()
    }

    fn clear(&self) {
        (**self).clear();
    }
}

impl<S: SessionStore + ?Sized> SessionStore for std::sync::Arc<S> {
    fn save(&self, token: &str) {
        (**self).save(token);
    }

    fn read(&self) -> Option<String> {
        (**self).read()
    }

    fn clear(&self) {
        (**self).clear();
    }
}

/// Process-local store used by tests and server-side rendering.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: Mutex<Option<String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn with_token(token: &str) -> Self {
        Self {
            slot: Mutex::new(Some(token.to_owned())),
        }
    }
}

impl SessionStore for MemoryStore {
    fn save(&self, token: &str) {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = Some(token.to_owned());
        }
    }

    fn read(&self) -> Option<String> {
        match self.slot.lock() {
            Ok(slot) => slot.clone(),
            Err(_) => None,
        }
    }

    fn clear(&self) {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = None;
        }
    }
}

/// Authentication lifecycle state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AuthStatus {
    /// Initial state before the stored token has been inspected.
    #[default]
    Loading,
    Authenticated(UserClaims),
    Unauthenticated,
}

impl AuthStatus {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    #[must_use]
    pub fn user(&self) -> Option<&UserClaims> {
        match self {
            Self::Authenticated(claims) => Some(claims),
            _ => None,
        }
    }
}

/// Resolve the startup state from the stored token at `now_ms` (Unix
/// milliseconds).
///
/// Undecodable and expired tokens are removed from the store.
pub fn restore(store: &impl SessionStore, now_ms: i64) -> AuthStatus {
    let Some(raw) = store.read() else {
        return AuthStatus::Unauthenticated;
    };
    match token::decode(&raw) {
        Ok(claims) if !claims.is_expired_at(now_ms) => AuthStatus::Authenticated(claims),
        Ok(_) | Err(_) => {
            store.clear();
            AuthStatus::Unauthenticated
        }
    }
}

/// Persist a freshly issued token and authenticate with its claims.
///
/// # Errors
///
/// Returns [`DecodeError`] if the token does not decode; the store is cleared
/// in that case so no unusable token lingers.
pub fn login(store: &impl SessionStore, token: &str) -> Result<AuthStatus, DecodeError> {
    store.save(token);
    match token::decode(token) {
        Ok(claims) => Ok(AuthStatus::Authenticated(claims)),
        Err(err) => {
            store.clear();
            Err(err)
        }
    }
}

/// Forget the stored token.
pub fn logout(store: &impl SessionStore) -> AuthStatus {
    store.clear();
    AuthStatus::Unauthenticated
}

/// Outcome of a protected-route check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Auth is still initializing; show a placeholder.
    Wait,
    Allow,
    /// Navigate to the given path instead.
    Redirect(&'static str),
}

/// Path unauthenticated visitors are sent to.
pub const LOGIN_PATH: &str = "/login";

/// Decide whether a protected view may render for `status`.
#[must_use]
pub fn guard(status: &AuthStatus) -> GuardDecision {
    match status {
        AuthStatus::Loading => GuardDecision::Wait,
        AuthStatus::Authenticated(_) => GuardDecision::Allow,
        AuthStatus::Unauthenticated => GuardDecision::Redirect(LOGIN_PATH),
    }
}

/// A store paired with its current auth status, for non-reactive hosts.
#[derive(Debug)]
pub struct AuthSession<S: SessionStore> {
    store: S,
    status: AuthStatus,
}

impl<S: SessionStore> AuthSession<S> {
    /// Wrap `store` in the `Loading` state.
    pub fn new(store: S) -> Self {
        Self {
            store,
            status: AuthStatus::Loading,
        }
    }

    /// Run startup resolution. See [`restore`].
    pub fn initialize(&mut self, now_ms: i64) -> &AuthStatus {
        self.status = restore(&self.store, now_ms);
        &self.status
    }

    /// See [`login`].
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] if the token does not decode.
    pub fn login(&mut self, token: &str) -> Result<&AuthStatus, DecodeError> {
        match login(&self.store, token) {
            Ok(status) => {
                self.status = status;
                Ok(&self.status)
            }
            Err(err) => {
                self.status = AuthStatus::Unauthenticated;
                Err(err)
            }
        }
    }

    pub fn logout(&mut self) -> &AuthStatus {
        self.status = logout(&self.store);
        &self.status
    }

    #[must_use]
    pub fn status(&self) -> &AuthStatus {
        &self.status
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
