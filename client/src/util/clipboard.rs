//! Clipboard writes for the copy buttons.
//!
//! The async Clipboard API rejects outside secure contexts or without focus;
//! callers log the failure and leave the page as it was.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "clipboard_test.rs"]
mod clipboard_test;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ClipboardError {
    #[error("clipboard is not available")]
    Unavailable,
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
}

/// Write `text` to the system clipboard and wait for the browser to accept it.
///
/// # Errors
///
/// [`ClipboardError::Unavailable`] without a window (always the case during
/// SSR), [`ClipboardError::Rejected`] if the write promise rejects.
pub async fn write_text(text: &str) -> Result<(), ClipboardError> {
    #[cfg(feature = "hydrate")]
    {
        let clipboard = web_sys::window()
            .map(|w| w.navigator().clipboard())
            .ok_or(ClipboardError::Unavailable)?;
        wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text))
            .await
            .map(|_| ())
            .map_err(|err| ClipboardError::Rejected(err.as_string().unwrap_or_else(|| format!("{err:?}"))))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
        Err(ClipboardError::Unavailable)
    }
}
