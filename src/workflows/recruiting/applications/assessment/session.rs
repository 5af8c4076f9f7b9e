use std::collections::BTreeMap;

use super::bank::Question;
use super::category::AssessmentCategory;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    InProgress,
    Complete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("assessment unavailable: no questions drawn for this category")]
    NoQuestions,
    #[error("already at the first question")]
    AtFirstQuestion,
    #[error("session is already complete")]
    AlreadyComplete,
}

/// One candidate's pass through a drawn question set. The cursor and answer
/// map are only reachable through `record_and_advance` and `retreat`; once
/// `Complete` the session is read-only.
#[derive(Debug, Clone)]
pub struct AssessmentSession {
    category: AssessmentCategory,
    questions: Vec<Question>,
    cursor: usize,
    answers: BTreeMap<usize, String>,
    state: SessionState,
}

impl AssessmentSession {
    /// An empty question set is rejected here so no session can exist without
    /// at least one question.
    pub fn start(
        category: AssessmentCategory,
        questions: Vec<Question>,
    ) -> Result<Self, SessionError> {
        if questions.is_empty() {
            return Err(SessionError::NoQuestions);
        }

        Ok(Self {
            category,
            questions,
            cursor: 0,
            answers: BTreeMap::new(),
            state: SessionState::InProgress,
        })
    }

    pub fn category(&self) -> AssessmentCategory {
        self.category
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn answers(&self) -> &BTreeMap<usize, String> {
        &self.answers
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_complete(&self) -> bool {
        self.state == SessionState::Complete
    }

    /// Zero-based position of the question currently presented.
    pub fn position(&self) -> usize {
        self.cursor
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn current_question(&self) -> Option<&Question> {
        match self.state {
            SessionState::InProgress => self.questions.get(self.cursor),
            SessionState::Complete => None,
        }
    }

    pub fn answer_at(&self, position: usize) -> Option<&str> {
        self.answers.get(&position).map(String::as_str)
    }

    /// Stores the selection for the current question and moves forward.
    /// Re-answering a revisited question overwrites the earlier selection;
    /// the last write wins. Answering the final question completes the
    /// session.
    pub fn record_and_advance(
        &mut self,
        selected_option: impl Into<String>,
    ) -> Result<SessionState, SessionError> {
        if self.is_complete() {
            return Err(SessionError::AlreadyComplete);
        }

        self.answers.insert(self.cursor, selected_option.into());

        if self.cursor + 1 == self.questions.len() {
            self.state = SessionState::Complete;
        } else {
            self.cursor += 1;
        }

        Ok(self.state)
    }

    /// Steps back one question. Stored answers are untouched, so the revisited
    /// question presents with its earlier selection.
    pub fn retreat(&mut self) -> Result<(), SessionError> {
        if self.is_complete() {
            return Err(SessionError::AlreadyComplete);
        }
        if self.cursor == 0 {
            return Err(SessionError::AtFirstQuestion);
        }

        self.cursor -= 1;
        Ok(())
    }
}
