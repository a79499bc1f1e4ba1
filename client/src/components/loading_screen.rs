//! Staged progress indicator shown while an analysis request is in flight.
//!
//! The step cadence runs on a `gloo-timers` loop that stops on unmount.

use insights::loading::{LOADING_STEPS, progress_percent, step_done};
use leptos::prelude::*;

#[component]
pub fn LoadingScreen() -> impl IntoView {
    let step = RwSignal::new(0_usize);

    #[cfg(feature = "hydrate")]
    {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        let alive = Arc::new(AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            let last = LOADING_STEPS.len() - 1;
            loop {
                gloo_timers::future::TimeoutFuture::new(insights::loading::STEP_INTERVAL_MS).await;
                if !alive_task.load(Ordering::Relaxed) {
                    break;
                }
                let next = insights::loading::next_step(step.get_untracked());
                step.set(next);
                if next == last {
                    break;
                }
            }
        });
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }

    view! {
        <div class="loading-screen" role="status" aria-live="polite">
            <div class="loading-screen__bar">
                <div
                    class="loading-screen__fill"
                    style=move || format!("width: {}%", progress_percent(step.get()))
                ></div>
            </div>
            <p class="loading-screen__current">{move || LOADING_STEPS[step.get()].text}</p>
            <ul class="loading-screen__steps">
                {LOADING_STEPS
                    .iter()
                    .enumerate()
                    .map(|(idx, s)| {
                        view! {
                            <li
                                class="loading-screen__step"
                                class:loading-screen__step--done=move || step_done(idx, step.get())
                                class:loading-screen__step--active=move || idx == step.get()
                                data-icon=s.icon
                            >
                                {s.text}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
