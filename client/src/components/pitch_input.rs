//! Pitch entry form: text area, audience picker, dictation, submit.

#[cfg(test)]
#[path = "pitch_input_test.rs"]
mod pitch_input_test;

use insights::draft::{MAX_PITCH_CHARS, append_transcript, can_submit, clamp_draft, counter_label};
use leptos::prelude::*;
use pitch::Audience;

use crate::util::voice::{self, VoiceError};

/// Tooltip for the dictation button.
fn dictate_title(supported: bool) -> String {
    if supported {
        "Dictate".to_owned()
    } else {
        VoiceError::Unsupported.to_string()
    }
}

/// Calls `on_submit` with the raw draft and audience. Submission is blocked
/// while `busy` or when the draft is blank.
#[component]
pub fn PitchInput(on_submit: Callback<(String, Audience)>, #[prop(into)] busy: Signal<bool>) -> impl IntoView {
    let text = RwSignal::new(String::new());
    let audience = RwSignal::new(Audience::default());
    let voice_alert = RwSignal::new(None::<String>);
    let listening = RwSignal::new(false);
    // Resolved after hydration so server and client markup agree.
    let voice_supported = RwSignal::new(false);
    Effect::new(move || voice_supported.set(voice::is_supported()));

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let draft = text.get_untracked();
        if !can_submit(&draft, busy.get_untracked()) {
            return;
        }
        on_submit.run((draft, audience.get_untracked()));
    };

    let on_dictate = move |_| {
        voice_alert.set(None);
        let started = voice::start_dictation(
            move |transcript| text.update(|t| *t = append_transcript(t, &transcript)),
            move || listening.set(false),
        );
        match started {
            Ok(()) => listening.set(true),
            Err(err) => voice_alert.set(Some(err.to_string())),
        }
    };

    view! {
        <form class="pitch-input" on:submit=submit>
            <div class="pitch-input__manuscript">
                <textarea
                    class="pitch-input__text"
                    placeholder="Enter your startup pitch here... (What is the problem? What is your solution?)"
                    maxlength=MAX_PITCH_CHARS.to_string()
                    spellcheck="false"
                    prop:value=move || text.get()
                    on:input=move |ev| text.set(clamp_draft(&event_target_value(&ev)))
                ></textarea>
                <span class="pitch-input__counter">{move || counter_label(&text.get())}</span>
            </div>
            <div class="pitch-input__controls">
                <label class="pitch-input__audience">
                    "Audience"
                    <select on:change=move |ev| {
                        if let Ok(choice) = event_target_value(&ev).parse::<Audience>() {
                            audience.set(choice);
                        }
                    }>
                        {Audience::ALL
                            .into_iter()
                            .map(|a| {
                                view! {
                                    <option value=a.label() selected=move || audience.get() == a>
                                        {a.label()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </label>
                <button
                    type="button"
                    class="btn pitch-input__voice"
                    class:pitch-input__voice--listening=move || listening.get()
                    on:click=on_dictate
                    title=move || dictate_title(voice_supported.get())
                >
                    {move || if listening.get() { "Listening..." } else { "🎙 Dictate" }}
                </button>
                <button
                    type="submit"
                    class="btn pitch-input__submit"
                    disabled=move || !can_submit(&text.get(), busy.get())
                >
                    {move || if busy.get() { "Analyzing..." } else { "Analyze Pitch" }}
                </button>
            </div>
            <Show when=move || voice_alert.get().is_some()>
                <p class="pitch-input__alert" role="alert">{move || voice_alert.get().unwrap_or_default()}</p>
            </Show>
        </form>
    }
}
