//! Browser speech recognition for pitch dictation.
//!
//! The Web Speech API is optional and vendor-prefixed in some engines; its
//! absence is reported as [`VoiceError::Unsupported`] and never breaks the
//! text form. SSR always reports unsupported.

#[cfg(test)]
#[path = "voice_test.rs"]
mod voice_test;

#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast as _, JsValue, closure::Closure};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum VoiceError {
    #[error("Voice input is not supported in this browser.")]
    Unsupported,
    #[error("Voice input failed to start: {0}")]
    Start(String),
}

#[cfg(feature = "hydrate")]
const CONSTRUCTOR_NAMES: [&str; 2] = ["SpeechRecognition", "webkitSpeechRecognition"];

#[cfg(feature = "hydrate")]
fn recognition_constructor() -> Option<js_sys::Function> {
    let window = web_sys::window()?;
    CONSTRUCTOR_NAMES.into_iter().find_map(|name| {
        js_sys::Reflect::get(&window, &JsValue::from_str(name))
            .ok()?
            .dyn_into::<js_sys::Function>()
            .ok()
    })
}

#[cfg(feature = "hydrate")]
fn js_error(err: JsValue) -> VoiceError {
    VoiceError::Start(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

#[cfg(feature = "hydrate")]
fn set(target: &JsValue, key: &str, value: &JsValue) -> Result<(), VoiceError> {
    js_sys::Reflect::set(target, &JsValue::from_str(key), value)
        .map(|_| ())
        .map_err(js_error)
}

/// Concatenated transcripts of the results reported by one `result` event.
#[cfg(feature = "hydrate")]
fn event_transcript(event: &JsValue) -> Option<String> {
    use js_sys::Reflect;

    let results = Reflect::get(event, &JsValue::from_str("results")).ok()?;
    let len = Reflect::get(&results, &JsValue::from_str("length")).ok()?.as_f64()?;
    let first = Reflect::get(event, &JsValue::from_str("resultIndex"))
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let (first, len) = (first as u32, len as u32);
    let mut text = String::new();
    for idx in first..len {
        let result = Reflect::get_u32(&results, idx).ok()?;
        let best = Reflect::get_u32(&result, 0).ok()?;
        text.push_str(&Reflect::get(&best, &JsValue::from_str("transcript")).ok()?.as_string()?);
    }
    Some(text)
}

/// Whether this browser exposes speech recognition.
pub fn is_supported() -> bool {
    #[cfg(feature = "hydrate")]
    {
        recognition_constructor().is_some()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Start a single dictation session.
///
/// `on_text` receives each recognized transcript; `on_end` runs once the
/// engine stops listening.
///
/// # Errors
///
/// [`VoiceError::Unsupported`] without speech recognition, otherwise
/// [`VoiceError::Start`] if the engine refuses to start.
pub fn start_dictation<T, E>(on_text: T, on_end: E) -> Result<(), VoiceError>
where
    T: Fn(String) + 'static,
    E: Fn() + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        let ctor = recognition_constructor().ok_or(VoiceError::Unsupported)?;
        let recognition = js_sys::Reflect::construct(&ctor, &js_sys::Array::new()).map_err(js_error)?;
        set(&recognition, "lang", &JsValue::from_str("en-US"))?;
        set(&recognition, "interimResults", &JsValue::FALSE)?;

        let on_result = Closure::<dyn FnMut(JsValue)>::new(move |event: JsValue| {
            if let Some(text) = event_transcript(&event) {
                on_text(text);
            }
        });
        set(&recognition, "onresult", on_result.as_ref())?;
        on_result.forget();

        let on_stop = Closure::<dyn FnMut()>::new(move || on_end());
        set(&recognition, "onend", on_stop.as_ref())?;
        on_stop.forget();

        let start = js_sys::Reflect::get(&recognition, &JsValue::from_str("start"))
            .map_err(js_error)?
            .dyn_into::<js_sys::Function>()
            .map_err(js_error)?;
        start.call0(&recognition).map_err(js_error)?;
        log::debug!("dictation started");
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (on_text, on_end);
        Err(VoiceError::Unsupported)
    }
}
