use crate::workflows::recruiting::applications::assessment::{
    AssessmentCategory, AssessmentSession, Question, QuestionBank, SessionError, SessionState,
};

fn short_session(count: usize) -> AssessmentSession {
    let questions: Vec<Question> = QuestionBank::questions_for(AssessmentCategory::BranchManager)
        [..count]
        .to_vec();
    AssessmentSession::start(AssessmentCategory::BranchManager, questions)
        .expect("session starts with questions")
}

#[test]
fn empty_question_set_is_rejected_at_creation() {
    let err = AssessmentSession::start(AssessmentCategory::BranchManager, Vec::new())
        .expect_err("no session without questions");
    assert_eq!(err, SessionError::NoQuestions);
}

#[test]
fn session_walks_forward_and_completes_on_the_last_answer() {
    let mut session = short_session(3);
    assert_eq!(session.position(), 0);

    assert_eq!(
        session.record_and_advance("a").expect("advance"),
        SessionState::InProgress
    );
    assert_eq!(session.position(), 1);

    assert_eq!(
        session.record_and_advance("b").expect("advance"),
        SessionState::InProgress
    );
    assert_eq!(
        session.record_and_advance("c").expect("complete"),
        SessionState::Complete
    );
    assert!(session.is_complete());
    assert!(session.current_question().is_none());
}

#[test]
fn retreat_on_the_first_question_is_rejected() {
    let mut session = short_session(3);
    let err = session.retreat().expect_err("no question before the first");
    assert_eq!(err, SessionError::AtFirstQuestion);
    assert_eq!(session.position(), 0);
}

#[test]
fn revisited_question_keeps_its_answer_until_overwritten() {
    let mut session = short_session(3);
    session.record_and_advance("first pick").expect("advance");

    session.retreat().expect("step back");
    assert_eq!(session.position(), 0);
    assert_eq!(session.answer_at(0), Some("first pick"));

    session.record_and_advance("second pick").expect("advance");
    assert_eq!(session.answer_at(0), Some("second pick"));
    assert_eq!(session.answers().len(), 1);
}

#[test]
fn complete_sessions_accept_no_transitions() {
    let mut session = short_session(1);
    session.record_and_advance("only").expect("complete");

    assert_eq!(
        session.record_and_advance("again").expect_err("read-only"),
        SessionError::AlreadyComplete
    );
    assert_eq!(
        session.retreat().expect_err("read-only"),
        SessionError::AlreadyComplete
    );
}

#[test]
fn answers_survive_completion_for_scoring() {
    let mut session = short_session(2);
    session.record_and_advance("one").expect("advance");
    session.record_and_advance("two").expect("complete");

    assert_eq!(session.answer_at(0), Some("one"));
    assert_eq!(session.answer_at(1), Some("two"));
    assert_eq!(session.total_questions(), 2);
}
