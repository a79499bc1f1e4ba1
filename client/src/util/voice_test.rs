use super::*;

#[test]
fn unsupported_message_matches_alert_text() {
    assert_eq!(VoiceError::Unsupported.to_string(), "Voice input is not supported in this browser.");
}

#[test]
fn server_rendering_reports_unsupported() {
    assert!(!is_supported());
    assert_eq!(start_dictation(|_| {}, || {}), Err(VoiceError::Unsupported));
}
