//! Mock Q&A walk-through over the generated practice questions.
//!
//! DESIGN
//! ======
//! Answers are kept locally and never sent anywhere. A session advances only
//! on a non-blank answer and finishes after the last question; `restart`
//! clears everything.

/// State of one practice run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PracticeSession {
    questions: Vec<String>,
    answers: Vec<String>,
}

impl PracticeSession {
    #[must_use]
    pub fn new(questions: Vec<String>) -> Self {
        Self {
            questions,
            answers: Vec::new(),
        }
    }

    #[must_use]
    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    #[must_use]
    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    /// Zero-based index of the question awaiting an answer.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.answers.len()
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&str> {
        self.questions.get(self.current_index()).map(String::as_str)
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        !self.questions.is_empty() && self.answers.len() >= self.questions.len()
    }

    /// `Question 2 of 5`, or `None` once finished.
    #[must_use]
    pub fn question_label(&self) -> Option<String> {
        self.current_question()
            .map(|_| format!("Question {} of {}", self.current_index() + 1, self.questions.len()))
    }

    /// Record an answer for the current question. Blank answers and answers
    /// after the last question are ignored; returns whether it was accepted.
    pub fn submit(&mut self, answer: &str) -> bool {
        let answer = answer.trim();
        if answer.is_empty() || self.current_question().is_none() {
            return false;
        }
        self.answers.push(answer.to_owned());
        true
    }

    pub fn restart(&mut self) {
        self.answers.clear();
    }

    /// One flag per question: answered or not.
    #[must_use]
    pub fn pips(&self) -> Vec<bool> {
        (0..self.questions.len()).map(|i| i < self.answers.len()).collect()
    }

    /// Question/answer pairs recorded so far.
    pub fn transcript(&self) -> impl Iterator<Item = (&str, &str)> {
        self.questions
            .iter()
            .zip(&self.answers)
            .map(|(q, a)| (q.as_str(), a.as_str()))
    }
}

#[cfg(test)]
#[path = "practice_test.rs"]
mod tests;
