//! Analyze screen: draft a pitch, wait for the analysis, review the results.
//!
//! SYSTEM CONTEXT
//! ==============
//! Exactly one of the input, loading, results, or error panels is shown,
//! driven by [`AnalysisStatus`]. The submit control is disabled while a
//! request is outstanding, so there is at most one in-flight analysis.
//!
//! TRADE-OFFS
//! ==========
//! Requests are never aborted. A response arriving after the page unmounts
//! is dropped via the liveness flag; nothing else orders responses.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;
use pitch::Audience;

use crate::components::loading_screen::LoadingScreen;
use crate::components::pitch_input::PitchInput;
use crate::components::results_dashboard::ResultsDashboard;
use crate::state::analysis::AnalysisStatus;

#[component]
pub fn HomePage() -> impl IntoView {
    let status = RwSignal::new(AnalysisStatus::Idle);
    let busy = Signal::derive(move || status.with(AnalysisStatus::is_loading));

    let alive = Arc::new(AtomicBool::new(true));
    on_cleanup({
        let alive = alive.clone();
        move || alive.store(false, Ordering::Relaxed)
    });

    let on_submit = Callback::new(move |(text, audience): (String, Audience)| {
        if status.with_untracked(AnalysisStatus::is_loading) {
            return;
        }
        if insights::validate_pitch(&text).is_err() {
            return;
        }
        status.set(AnalysisStatus::Loading);

        #[cfg(feature = "hydrate")]
        {
            let alive = alive.clone();
            leptos::task::spawn_local(async move {
                let outcome = crate::net::api::analyze_pitch(&text, audience).await;
                if let Err(err) = &outcome {
                    log::error!("analysis failed: {err}");
                }
                if alive.load(Ordering::Relaxed) {
                    status.set(AnalysisStatus::from_outcome(outcome));
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&alive, audience);
        }
    });

    let reset = move |_| status.set(AnalysisStatus::Idle);

    let panel = move || match status.get() {
        AnalysisStatus::Idle => view! { <PitchInput on_submit busy/> }.into_any(),
        AnalysisStatus::Loading => view! { <LoadingScreen/> }.into_any(),
        AnalysisStatus::Success(resp) => view! {
            <div class="home__results">
                <button class="home__reset" on:click=reset>
                    "← Analyze Another Pitch"
                </button>
                <ResultsDashboard result=resp.analysis original_pitch=resp.original_pitch/>
            </div>
        }
        .into_any(),
        AnalysisStatus::Error(message) => view! {
            <div class="home__error">
                <p class="home__error-message">{message}</p>
                <button class="btn home__retry" on:click=reset>
                    "Try Again"
                </button>
            </div>
        }
        .into_any(),
    };

    view! {
        <div class="home">
            <header class="home__header">
                <h1 class="home__title">"VākyaAI"</h1>
                <p class="home__tagline">"Refine Your Words. Command Your Vision."</p>
            </header>
            <section class="home__panel">{panel}</section>
        </div>
    }
}
