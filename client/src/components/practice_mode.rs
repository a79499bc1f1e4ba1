//! Mock Q&A over the generated practice questions.

use insights::PracticeSession;
use leptos::prelude::*;

#[component]
pub fn PracticeMode(questions: Vec<String>) -> impl IntoView {
    let session = RwSignal::new(PracticeSession::new(questions));
    let draft = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let answer = draft.get_untracked();
        let mut accepted = false;
        session.update(|s| accepted = s.submit(&answer));
        if accepted {
            draft.set(String::new());
        }
    };
    let on_restart = move |_| {
        session.update(PracticeSession::restart);
        draft.set(String::new());
    };

    view! {
        <section class="practice">
            <div class="practice__pips">
                {move || {
                    session
                        .with(PracticeSession::pips)
                        .into_iter()
                        .map(|done| view! { <span class="practice__pip" class:practice__pip--done=done></span> })
                        .collect_view()
                }}
            </div>
            <Show
                when=move || !session.with(PracticeSession::is_finished)
                fallback=move || {
                    view! {
                        <div class="practice__done">
                            <h4>"Session complete"</h4>
                            <ol class="practice__transcript">
                                {move || {
                                    session
                                        .with(|s| {
                                            s.transcript()
                                                .map(|(q, a)| (q.to_owned(), a.to_owned()))
                                                .collect::<Vec<_>>()
                                        })
                                        .into_iter()
                                        .map(|(q, a)| {
                                            view! {
                                                <li>
                                                    <p class="practice__q">{q}</p>
                                                    <p class="practice__a">{a}</p>
                                                </li>
                                            }
                                        })
                                        .collect_view()
                                }}
                            </ol>
                            <button class="btn" on:click=on_restart>"Restart Practice"</button>
                        </div>
                    }
                }
            >
                <form class="practice__form" on:submit=on_submit>
                    <p class="practice__label">{move || session.with(PracticeSession::question_label)}</p>
                    <p class="practice__question">
                        {move || session.with(|s| s.current_question().map(str::to_owned))}
                    </p>
                    <textarea
                        class="practice__answer"
                        placeholder="Type your answer..."
                        prop:value=move || draft.get()
                        on:input=move |ev| draft.set(event_target_value(&ev))
                    ></textarea>
                    <button class="btn" type="submit" disabled=move || draft.get().trim().is_empty()>
                        "Submit Answer"
                    </button>
                </form>
            </Show>
        </section>
    }
}
