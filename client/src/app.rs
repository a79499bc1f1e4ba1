//! Root application component with routing and the auth handle.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::components::protected_route::ProtectedRoute;
use crate::pages::{
    dashboard::DashboardPage, home::HomePage, login::LoginPage, register::RegisterPage,
};
use crate::state::auth::{AuthHandle, now_ms};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the single [`AuthHandle`]. The stored token is only inspected after
/// hydration, so server-rendered output always shows the `Loading` state.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = AuthHandle::new();
    Effect::new(move || auth.initialize(now_ms()));

    view! {
        <Stylesheet id="leptos" href="/pkg/vakya.css"/>
        <Title text="VākyaAI"/>

        <Router>
            <Navbar auth/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("login") view=move || view! { <LoginPage auth/> }/>
                    <Route path=StaticSegment("register") view=move || view! { <RegisterPage auth/> }/>
                    <Route
                        path=StaticSegment("")
                        view=move || {
                            view! {
                                <ProtectedRoute auth>
                                    <HomePage/>
                                </ProtectedRoute>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("dashboard")
                        view=move || {
                            view! {
                                <ProtectedRoute auth>
                                    <DashboardPage auth/>
                                </ProtectedRoute>
                            }
                        }
                    />
                </Routes>
            </main>
        </Router>
    }
}
