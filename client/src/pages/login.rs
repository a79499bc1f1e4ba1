//! Email + password sign-in page.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use pitch::LoginRequest;

use crate::state::auth::AuthHandle;
use crate::util::auth::install_authed_redirect;

/// Shown when a failed login carries no server detail.
pub const LOGIN_FAILED: &str = "Invalid email or password";

/// Shown when the server issues a token that cannot be decoded.
pub const TOKEN_REJECTED: &str = "Received an unreadable session token. Please try again.";

/// Login body with the email trimmed; the password is sent as typed.
pub fn login_request(email: &str, password: &str) -> Option<LoginRequest> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return None;
    }
    Some(LoginRequest {
        email: email.to_owned(),
        password: password.to_owned(),
    })
}

#[component]
pub fn LoginPage(auth: AuthHandle) -> impl IntoView {
    // Also performs the post-login hop to the dashboard.
    install_authed_redirect(auth, use_navigate());

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let Some(body) = login_request(&email.get(), &password.get()) else {
            error.set(Some("Enter both email and password.".to_owned()));
            return;
        };
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::login_user(&body).await {
                Ok(token) => {
                    if let Err(err) = auth.login(&token.access_token) {
                        log::warn!("login token rejected: {err}");
                        error.set(Some(TOKEN_REJECTED.to_owned()));
                    }
                }
                Err(err) => {
                    log::warn!("login failed: {err}");
                    error.set(Some(err.detail_or(LOGIN_FAILED)));
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = body;
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Welcome Back"</h1>
                <p class="auth-card__subtitle">"Continue your journey of persuasion"</p>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        required
                        placeholder="your@email.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        required
                        placeholder="••••••••"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <Show when=move || error.get().is_some()>
                        <p class="auth-message auth-message--error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Login to Vākya" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "No access key? "
                    <a href="/register">"Create Account"</a>
                </p>
            </div>
        </div>
    }
}
