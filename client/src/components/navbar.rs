//! Top navigation bar for signed-in users.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use pitch::session::LOGIN_PATH;

use crate::state::auth::AuthHandle;

#[component]
pub fn Navbar(auth: AuthHandle) -> impl IntoView {
    let navigate = use_navigate();
    let on_logout = move |_| {
        auth.logout();
        navigate(LOGIN_PATH, NavigateOptions::default());
    };

    let initial = move || auth.user().map(|u| u.initial()).unwrap_or_default();
    let name = move || auth.user().map(|u| u.display_name().to_owned()).unwrap_or_default();

    view! {
        <Show when=move || auth.is_authenticated()>
            <nav class="navbar">
                <a class="navbar__brand" href="/">"VākyaAI"</a>
                <div class="navbar__links">
                    <a class="navbar__link" href="/">"Analyze"</a>
                    <a class="navbar__link" href="/dashboard">"Library"</a>
                </div>
                <div class="navbar__user">
                    <span class="navbar__avatar" aria-hidden="true">{initial}</span>
                    <span class="navbar__name">{name}</span>
                    <button class="btn navbar__logout" on:click=on_logout.clone() title="Logout">
                        "Logout"
                    </button>
                </div>
            </nav>
        </Show>
    }
}
