//! Titled bullet list used for strengths, weaknesses, and suggestions.

use leptos::prelude::*;

#[component]
pub fn AnalysisCard(title: &'static str, items: Vec<String>, #[prop(default = "neutral")] tone: &'static str) -> impl IntoView {
    view! {
        <section class=format!("analysis-card analysis-card--{tone}")>
            <h3 class="analysis-card__title">{title}</h3>
            <ul class="analysis-card__list">
                {items.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}
            </ul>
        </section>
    }
}
