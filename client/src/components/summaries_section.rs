//! Short-form rewrites: elevator pitch, LinkedIn hook, formal outreach.

use insights::results::SummaryKind;
use leptos::prelude::*;

use crate::util::clipboard;

fn icon(kind: SummaryKind) -> &'static str {
    match kind {
        SummaryKind::Elevator => "🎤",
        SummaryKind::Linkedin => "in",
        SummaryKind::Email => "✉",
    }
}

#[component]
pub fn SummariesSection(cards: Vec<(SummaryKind, String)>) -> impl IntoView {
    view! {
        <section class="summaries">
            {cards
                .into_iter()
                .map(|(kind, text)| {
                    let copy_text = text.clone();
                    let on_copy = move |_| {
                        let text = copy_text.clone();
                        leptos::task::spawn_local(async move {
                            if let Err(err) = clipboard::write_text(&text).await {
                                #[cfg(feature = "hydrate")]
                                log::warn!("copy failed: {err}");
                                #[cfg(not(feature = "hydrate"))]
                                let _ = err;
                            }
                        });
                    };
                    view! {
                        <article class="summaries__card">
                            <header class="summaries__label">
                                <span class="summaries__icon" aria-hidden="true">{icon(kind)}</span>
                                {kind.label()}
                            </header>
                            <p class="summaries__text">{format!("\"{text}\"")}</p>
                            <button class="summaries__copy" on:click=on_copy>"Copy"</button>
                        </article>
                    }
                })
                .collect_view()}
        </section>
    }
}
