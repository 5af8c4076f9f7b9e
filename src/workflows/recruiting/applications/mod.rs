//! Candidate application intake: form validation, the role-aware assessment,
//! scoring, and durable recording of the outcome.

pub mod assessment;
pub mod domain;
pub mod router;
pub mod service;
pub mod sink;

#[cfg(test)]
mod tests;

pub use assessment::{
    resolve_category, score, AssessmentCategory, AssessmentSession, DecisionTier, Difficulty,
    Question, QuestionBank, ScoreBreakdown, SessionError, SessionState, DEFAULT_SAMPLE_SIZE,
};
pub use domain::{ApplicationForm, ApplicationId, ApplicationProfile, ValidationError};
pub use router::careers_router;
pub use service::{
    ApplicationServiceError, CompletionView, QuestionView, RecruitmentService, SessionId,
    StepOutcome,
};
pub use sink::{
    ApplicationRow, AssessmentOutcome, AssessmentRow, CsvRecordSink, RecordSink, SinkError,
};
