//! Suggested slide deck outline.

use leptos::prelude::*;
use pitch::Slide;

#[component]
pub fn PresentationSection(slides: Vec<Slide>) -> impl IntoView {
    view! {
        <section class="deck">
            <h3 class="deck__title">"Deck Outline"</h3>
            <ol class="deck__slides">
                {slides
                    .into_iter()
                    .enumerate()
                    .map(|(idx, slide)| {
                        view! {
                            <li class="deck__slide">
                                <span class="deck__number">{format!("Slide {}", idx + 1)}</span>
                                <h4 class="deck__slide-title">{slide.title}</h4>
                                <ul class="deck__points">
                                    {slide.content.into_iter().map(|point| view! { <li>{point}</li> }).collect_view()}
                                </ul>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        </section>
    }
}
