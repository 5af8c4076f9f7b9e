//! Role-aware competency assessment: category resolution, question sampling,
//! the interactive session state machine, and the pure scoring rubric.

mod bank;
mod category;
mod scoring;
mod session;

pub use bank::{Difficulty, Question, QuestionBank, DEFAULT_SAMPLE_SIZE};
pub use category::{resolve_category, AssessmentCategory, CategoryRule, CATEGORY_RULES};
pub use scoring::{score, DecisionTier, ScoreBreakdown};
pub use session::{AssessmentSession, SessionError, SessionState};
