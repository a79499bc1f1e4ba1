use super::*;

#[test]
fn blank_drafts_are_rejected() {
    assert_eq!(validate_pitch(""), Err(DraftError::Empty));
    assert_eq!(validate_pitch("  \n\t"), Err(DraftError::Empty));
}

#[test]
fn valid_draft_is_trimmed() {
    assert_eq!(validate_pitch("  We help X do Y \n"), Ok("We help X do Y"));
}

#[test]
fn limit_is_inclusive() {
    let at_limit = "a".repeat(MAX_PITCH_CHARS);
    assert!(validate_pitch(&at_limit).is_ok());
    let over = "a".repeat(MAX_PITCH_CHARS + 1);
    assert_eq!(validate_pitch(&over), Err(DraftError::TooLong(MAX_PITCH_CHARS + 1)));
}

#[test]
fn limit_counts_chars_not_bytes() {
    let text = "ā".repeat(MAX_PITCH_CHARS);
    assert!(validate_pitch(&text).is_ok());
}

#[test]
fn submit_requires_idle_and_valid() {
    assert!(can_submit("pitch", false));
    assert!(!can_submit("pitch", true));
    assert!(!can_submit("   ", false));
}

#[test]
fn counter_shows_limit() {
    assert_eq!(counter_label("abc"), "3 / 5000");
}

#[test]
fn clamp_truncates() {
    let long = "b".repeat(MAX_PITCH_CHARS + 10);
    assert_eq!(clamp_draft(&long).chars().count(), MAX_PITCH_CHARS);
    assert_eq!(clamp_draft("ok"), "ok");
}

#[test]
fn transcript_appends_with_single_space() {
    assert_eq!(append_transcript("", "hello"), "hello");
    assert_eq!(append_transcript("We help", " founders "), "We help founders");
    assert_eq!(append_transcript("We help ", "founders"), "We help founders");
    assert_eq!(append_transcript("keep", "  "), "keep");
}
