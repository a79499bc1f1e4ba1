//! Pass/fail checklist of pitch essentials.

use leptos::prelude::*;
use pitch::ChecklistItem;

#[component]
pub fn ChecklistSection(items: Vec<ChecklistItem>) -> impl IntoView {
    let passed = items.iter().filter(|i| i.status).count();
    let total = items.len();
    view! {
        <section class="checklist">
            <h3 class="checklist__title">"Pitch Checklist"</h3>
            <p class="checklist__summary">{format!("{passed} of {total} covered")}</p>
            <ul class="checklist__items">
                {items
                    .into_iter()
                    .map(|item| {
                        view! {
                            <li class="checklist__item" class:checklist__item--done=item.status>
                                <span class="checklist__mark" aria-hidden="true">
                                    {if item.status { "✓" } else { "✗" }}
                                </span>
                                <span>{item.label}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}
