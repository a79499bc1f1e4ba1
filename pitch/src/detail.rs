//! Interpretation of backend error bodies.
//!
//! The backend reports failures as `{"detail": ...}` where `detail` is either
//! a list of field-validation objects (`{"loc": [...], "msg": "..."}`) or a
//! single message string.

use serde_json::Value;

/// Message used when a validation list carries no readable `msg`.
pub const VALIDATION_FALLBACK: &str = "Validation failed";

/// Extract a user-facing message from an error body, if it carries one.
#[must_use]
pub fn detail_message(body: &Value) -> Option<String> {
    match body.get("detail")? {
        Value::Array(items) => Some(
            items
                .first()
                .and_then(|item| item.get("msg"))
                .and_then(Value::as_str)
                .filter(|msg| !msg.is_empty())
                .unwrap_or(VALIDATION_FALLBACK)
                .to_owned(),
        ),
        Value::String(message) => Some(message.clone()),
        _ => None,
    }
}

/// [`detail_message`] or `fallback` when the body has no usable detail.
#[must_use]
pub fn message_or(body: &Value, fallback: &str) -> String {
    detail_message(body).unwrap_or_else(|| fallback.to_owned())
}

#[cfg(test)]
#[path = "detail_test.rs"]
mod tests;
