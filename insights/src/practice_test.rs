use super::*;

fn session() -> PracticeSession {
    PracticeSession::new(vec!["Why now?".to_owned(), "Who pays?".to_owned()])
}

#[test]
fn starts_at_first_question() {
    let s = session();
    assert_eq!(s.current_question(), Some("Why now?"));
    assert_eq!(s.question_label().as_deref(), Some("Question 1 of 2"));
    assert!(!s.is_finished());
    assert_eq!(s.pips(), vec![false, false]);
}

#[test]
fn blank_answer_does_not_advance() {
    let mut s = session();
    assert!(!s.submit("   "));
    assert_eq!(s.current_index(), 0);
}

#[test]
fn answering_all_finishes() {
    let mut s = session();
    assert!(s.submit("Market timing"));
    assert_eq!(s.question_label().as_deref(), Some("Question 2 of 2"));
    assert!(s.submit(" Schools "));
    assert!(s.is_finished());
    assert_eq!(s.question_label(), None);
    assert_eq!(s.answers(), ["Market timing".to_owned(), "Schools".to_owned()]);
    assert!(!s.submit("extra"));
    assert_eq!(s.pips(), vec![true, true]);
}

#[test]
fn restart_clears_answers() {
    let mut s = session();
    s.submit("a");
    s.submit("b");
    s.restart();
    assert!(!s.is_finished());
    assert!(s.answers().is_empty());
    assert_eq!(s.current_question(), Some("Why now?"));
}

#[test]
fn transcript_pairs_questions_with_answers() {
    let mut s = session();
    s.submit("Market timing");
    let pairs: Vec<_> = s.transcript().collect();
    assert_eq!(pairs, vec![("Why now?", "Market timing")]);
}

#[test]
fn empty_session_never_finishes() {
    let mut s = PracticeSession::new(Vec::new());
    assert!(!s.is_finished());
    assert!(!s.submit("x"));
    assert_eq!(s.question_label(), None);
}
