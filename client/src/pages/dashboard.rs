//! Library page: history statistics, search, and a detail modal per entry.
//!
//! SYSTEM CONTEXT
//! ==============
//! History is fetched once on mount. Stats always cover the full history;
//! search narrows only the card grid. A failed fetch is logged and the page
//! falls through to the empty state.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use insights::dashboard::excerpt;
use insights::{dashboard_stats, filter_entries, format_score};
use leptos::prelude::*;
use pitch::HistoryEntry;

use crate::components::results_dashboard::ResultsDashboard;
use crate::state::auth::AuthHandle;

/// Characters of the original pitch shown on a history card.
pub const EXCERPT_CHARS: usize = 160;

/// `2024-05-01T10:30:00.123` -> `2024-05-01 10:30:00`.
pub fn timestamp_label(created_at: &str) -> String {
    let trimmed = created_at.split_once('.').map_or(created_at, |(head, _)| head);
    trimmed.replacen('T', " ", 1)
}

fn history_card(entry: HistoryEntry, selected: RwSignal<Option<HistoryEntry>>) -> impl IntoView {
    let date = entry.created_date().to_owned();
    let score = format_score(entry.analysis.overall_score);
    let text = excerpt(&entry.original_pitch, EXCERPT_CHARS);
    view! {
        <article class="history-card">
            <header class="history-card__meta">
                <span class="history-card__date">{date}</span>
                <span class="history-card__score">{score}</span>
            </header>
            <p class="history-card__excerpt">"\u{201c}" {text} "\u{201d}"</p>
            <button class="history-card__view" on:click=move |_| selected.set(Some(entry.clone()))>
                "View Scroll"
            </button>
        </article>
    }
}

fn detail_modal(entry: HistoryEntry, selected: RwSignal<Option<HistoryEntry>>) -> impl IntoView {
    let short_id = entry.short_id().to_owned();
    let stamp = timestamp_label(&entry.created_at);
    view! {
        <div class="modal">
            <div class="modal__backdrop" on:click=move |_| selected.set(None)></div>
            <div class="modal__panel">
                <header class="modal__header">
                    <div>
                        <span class="modal__archive">"Archive ID: " {short_id}</span>
                        <span class="modal__stamp">{stamp}</span>
                    </div>
                    <button class="modal__close" title="Close" on:click=move |_| selected.set(None)>
                        "×"
                    </button>
                </header>
                <div class="modal__body">
                    <ResultsDashboard result=entry.analysis original_pitch=entry.original_pitch/>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn DashboardPage(auth: AuthHandle) -> impl IntoView {
    let entries = RwSignal::new(Vec::<HistoryEntry>::new());
    let loading = RwSignal::new(true);
    let query = RwSignal::new(String::new());
    let selected = RwSignal::new(None::<HistoryEntry>);

    let alive = Arc::new(AtomicBool::new(true));
    on_cleanup({
        let alive = alive.clone();
        move || alive.store(false, Ordering::Relaxed)
    });

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let outcome = crate::net::api::get_my_analyses().await;
        if !alive.load(Ordering::Relaxed) {
            return;
        }
        match outcome {
            Ok(list) => entries.set(list),
            Err(err) => log::error!("failed to fetch analyses: {err}"),
        }
        loading.set(false);
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = alive;
    }

    let greeting = move || {
        let name = auth.user().map(|u| u.display_name().to_owned()).unwrap_or_default();
        format!("Namaste, {name}")
    };
    let stats = Memo::new(move |_| entries.with(|list| dashboard_stats(list)));

    let grid = move || {
        if loading.get() {
            return view! {
                <div class="history-grid history-grid--loading">
                    {(0..4).map(|_| view! { <div class="history-card history-card--skeleton"></div> }).collect_view()}
                </div>
            }
            .into_any();
        }
        let visible: Vec<HistoryEntry> =
            entries.with(|list| filter_entries(list, &query.get()).into_iter().cloned().collect());
        if visible.is_empty() {
            return view! {
                <div class="history-empty">
                    <h3>"The archives are empty."</h3>
                    <p>"Begin your first analysis to unlock the repository's wisdom."</p>
                    <a href="/" class="history-empty__cta">"Initiate first analysis"</a>
                </div>
            }
            .into_any();
        }
        view! {
            <div class="history-grid">
                {visible.into_iter().map(|entry| history_card(entry, selected)).collect_view()}
            </div>
        }
        .into_any()
    };

    view! {
        <div class="dashboard">
            <header class="dashboard__header">
                <h1>{greeting}</h1>
                <a href="/" class="btn dashboard__new">"New Analysis"</a>
            </header>
            <section class="dashboard__stats">
                <div class="stat">
                    <span class="stat__label">"Total Analyzed"</span>
                    <span class="stat__value">{move || stats.get().total_label()}</span>
                </div>
                <div class="stat">
                    <span class="stat__label">"Avg Scrutiny"</span>
                    <span class="stat__value">{move || stats.get().average_label()}</span>
                </div>
                <div class="stat">
                    <span class="stat__label">"Best Score"</span>
                    <span class="stat__value">{move || stats.get().best_label()}</span>
                </div>
            </section>
            <section class="dashboard__library">
                <div class="dashboard__toolbar">
                    <h2>"Pitch Repository"</h2>
                    <input
                        class="dashboard__search"
                        type="text"
                        placeholder="Search repository..."
                        prop:value=move || query.get()
                        on:input=move |ev| query.set(event_target_value(&ev))
                    />
                </div>
                {grid}
            </section>
            {move || selected.get().map(|entry| detail_modal(entry, selected))}
        </div>
    }
}
