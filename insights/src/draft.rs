//! Pitch draft validation for the input form.

/// Maximum pitch length accepted by the input form, in characters.
pub const MAX_PITCH_CHARS: usize = 5000;

/// Why a draft cannot be submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("pitch is empty")]
    Empty,
    #[error("pitch exceeds {MAX_PITCH_CHARS} characters ({0})")]
    TooLong(usize),
}

/// Trimmed pitch text ready to send, or the reason it is not.
pub fn validate_pitch(text: &str) -> Result<&str, DraftError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(DraftError::Empty);
    }
    let len = trimmed.chars().count();
    if len > MAX_PITCH_CHARS {
        return Err(DraftError::TooLong(len));
    }
    Ok(trimmed)
}

/// Submit is enabled only for a valid draft while no request is in flight.
#[must_use]
pub fn can_submit(text: &str, busy: bool) -> bool {
    !busy && validate_pitch(text).is_ok()
}

/// `123 / 5000` counter under the text area.
#[must_use]
pub fn counter_label(text: &str) -> String {
    format!("{} / {MAX_PITCH_CHARS}", text.chars().count())
}

/// Truncate typed or dictated input to the character limit.
#[must_use]
pub fn clamp_draft(text: &str) -> String {
    text.chars().take(MAX_PITCH_CHARS).collect()
}

/// Append a dictated transcript to the current draft, separated by a space.
#[must_use]
pub fn append_transcript(draft: &str, transcript: &str) -> String {
    let transcript = transcript.trim();
    if transcript.is_empty() {
        return draft.to_owned();
    }
    let joined = if draft.is_empty() || draft.ends_with(char::is_whitespace) {
        format!("{draft}{transcript}")
    } else {
        format!("{draft} {transcript}")
    };
    clamp_draft(&joined)
}

#[cfg(test)]
#[path = "draft_test.rs"]
mod tests;
