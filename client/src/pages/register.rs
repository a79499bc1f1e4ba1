//! Account creation page.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use pitch::{JOB_ROLES, RegisterRequest};

use crate::state::auth::AuthHandle;
use crate::util::auth::install_authed_redirect;

/// Shown when a failed registration carries no server detail.
pub const REGISTER_FAILED: &str = "Registration failed. Please try again.";

/// Advisory only; the server enforces the real policy.
pub const MIN_PASSWORD_CHARS: usize = 8;

/// Why the form cannot be submitted yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Enter your full name.")]
    MissingName,
    #[error("Enter your email.")]
    MissingEmail,
    #[error("Enter a password.")]
    MissingPassword,
}

/// Build the register body. Name and email are trimmed; an empty role is
/// sent as absent.
pub fn registration_request(
    full_name: &str,
    email: &str,
    job_role: &str,
    password: &str,
) -> Result<RegisterRequest, FormError> {
    let full_name = full_name.trim();
    let email = email.trim();
    if full_name.is_empty() {
        return Err(FormError::MissingName);
    }
    if email.is_empty() {
        return Err(FormError::MissingEmail);
    }
    if password.is_empty() {
        return Err(FormError::MissingPassword);
    }
    Ok(RegisterRequest {
        full_name: full_name.to_owned(),
        email: email.to_owned(),
        job_role: JOB_ROLES
            .iter()
            .find(|role| **role == job_role)
            .map(|role| (*role).to_owned()),
        password: password.to_owned(),
    })
}

/// Whether to show the short-password hint.
pub fn password_too_short(password: &str) -> bool {
    !password.is_empty() && password.chars().count() < MIN_PASSWORD_CHARS
}

#[component]
pub fn RegisterPage(auth: AuthHandle) -> impl IntoView {
    let navigate = use_navigate();
    install_authed_redirect(auth, navigate.clone());

    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let job_role = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let body = match registration_request(&full_name.get(), &email.get(), &job_role.get(), &password.get()) {
            Ok(body) => body,
            Err(err) => {
                error.set(Some(err.to_string()));
                return;
            }
        };
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::register_user(&body).await {
                    Ok(profile) => {
                        log::info!("registered {}", profile.email);
                        navigate(
                            pitch::session::LOGIN_PATH,
                            leptos_router::NavigateOptions::default(),
                        );
                    }
                    Err(err) => {
                        log::warn!("registration failed: {err}");
                        error.set(Some(err.detail_or(REGISTER_FAILED)));
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (body, &navigate);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card auth-card--wide">
                <h1>"Create Identity"</h1>
                <p class="auth-card__subtitle">"Join the circle of Vākya pitch masters"</p>
                <form class="auth-form auth-form--grid" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="text"
                        required
                        placeholder="Full Name"
                        prop:value=move || full_name.get()
                        on:input=move |ev| full_name.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="email"
                        required
                        placeholder="Email Address"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <select
                        class="auth-input"
                        prop:value=move || job_role.get()
                        on:change=move |ev| job_role.set(event_target_value(&ev))
                    >
                        <option value="" disabled>"Select Role"</option>
                        {JOB_ROLES
                            .iter()
                            .map(|role| view! { <option value=*role>{*role}</option> })
                            .collect_view()}
                    </select>
                    <input
                        class="auth-input auth-input--full"
                        type="password"
                        required
                        placeholder="Create Strong Password (min. 8 chars)"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <Show when=move || password_too_short(&password.get())>
                        <p class="auth-hint">"Use at least 8 characters."</p>
                    </Show>
                    <Show when=move || error.get().is_some()>
                        <p class="auth-message auth-message--error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating..." } else { "Begin Your Journey" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Already an initiate? "
                    <a href="/login">"Sign In"</a>
                </p>
            </div>
        </div>
    }
}
