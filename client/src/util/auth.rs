//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components apply identical redirect behavior: protected pages send
//! unauthenticated visitors to `/login`, auth forms send signed-in users on to
//! `/dashboard`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use pitch::session::{AuthStatus, GuardDecision, guard};

use crate::state::auth::AuthHandle;

/// Landing route for an authenticated user.
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Where a protected route should send the visitor, if anywhere.
pub fn unauth_redirect(status: &AuthStatus) -> Option<&'static str> {
    match guard(status) {
        GuardDecision::Redirect(path) => Some(path),
        GuardDecision::Wait | GuardDecision::Allow => None,
    }
}

/// Where an auth form should send an already signed-in user, if anywhere.
pub fn authed_redirect(status: &AuthStatus) -> Option<&'static str> {
    status.is_authenticated().then_some(DASHBOARD_PATH)
}

/// Redirect to `/login` whenever auth has loaded and no user is present.
pub fn install_unauth_redirect<F>(auth: AuthHandle, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(path) = unauth_redirect(&auth.status()) {
            navigate(path, NavigateOptions::default());
        }
    });
}

/// Redirect to `/dashboard` as soon as a user is present.
pub fn install_authed_redirect<F>(auth: AuthHandle, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(path) = authed_redirect(&auth.status()) {
            navigate(path, NavigateOptions::default());
        }
    });
}
