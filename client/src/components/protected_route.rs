//! Route wrapper that renders its children only for a signed-in user.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthHandle;
use crate::util::auth::install_unauth_redirect;

/// Placeholder while auth initializes, redirect to `/login` once it resolves
/// without a user, children otherwise.
#[component]
pub fn ProtectedRoute(auth: AuthHandle, children: ChildrenFn) -> impl IntoView {
    install_unauth_redirect(auth, use_navigate());

    view! {
        <Show
            when=move || auth.is_authenticated()
            fallback=move || {
                view! {
                    <div class="route-placeholder">
                        <p>{move || if auth.is_loading() { "Loading..." } else { "Redirecting to login..." }}</p>
                    </div>
                }
            }
        >
            {children()}
        </Show>
    }
}
