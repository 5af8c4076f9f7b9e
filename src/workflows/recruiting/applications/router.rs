use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::super::auth::{authenticate, CredentialStore};
use super::super::catalog::JobCatalog;
use super::super::report::RecruitingReport;
use super::domain::ApplicationForm;
use super::service::{ApplicationServiceError, RecruitmentService, SessionId};
use super::sink::RecordSink;

/// Shared handler state: the candidate-facing service plus the HR credential
/// source.
pub struct CareersState<S> {
    pub service: Arc<RecruitmentService<S>>,
    pub credentials: Arc<dyn CredentialStore>,
}

impl<S> Clone for CareersState<S> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
            credentials: self.credentials.clone(),
        }
    }
}

/// Router builder exposing the candidate flow and the HR surface.
pub fn careers_router<S>(
    service: Arc<RecruitmentService<S>>,
    credentials: Arc<dyn CredentialStore>,
) -> Router
where
    S: RecordSink + 'static,
{
    let state = CareersState {
        service,
        credentials,
    };

    Router::new()
        .route("/api/v1/careers/jobs", get(jobs_handler::<S>))
        .route("/api/v1/careers/applications", post(submit_handler::<S>))
        .route(
            "/api/v1/careers/sessions/:session_id",
            get(current_question_handler::<S>),
        )
        .route(
            "/api/v1/careers/sessions/:session_id/answers",
            post(answer_handler::<S>),
        )
        .route(
            "/api/v1/careers/sessions/:session_id/previous",
            post(previous_handler::<S>),
        )
        .route("/api/v1/hr/login", post(hr_login_handler::<S>))
        .route("/api/v1/hr/report", get(hr_report_handler::<S>))
        .with_state(state)
}

#[derive(Debug, Deserialize)]
pub(crate) struct AnswerRequest {
    pub(crate) selected_option: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct HrLoginRequest {
    pub(crate) email: String,
    pub(crate) password: String,
}

pub(crate) async fn jobs_handler<S>(State(_state): State<CareersState<S>>) -> Response
where
    S: RecordSink + 'static,
{
    (StatusCode::OK, Json(JobCatalog::standard())).into_response()
}

pub(crate) async fn submit_handler<S>(
    State(state): State<CareersState<S>>,
    Json(form): Json<ApplicationForm>,
) -> Response
where
    S: RecordSink + 'static,
{
    match state.service.submit_application(form) {
        Ok(view) => (StatusCode::ACCEPTED, Json(view)).into_response(),
        Err(err) => service_error_response(err),
    }
}

pub(crate) async fn current_question_handler<S>(
    State(state): State<CareersState<S>>,
    Path(session_id): Path<String>,
) -> Response
where
    S: RecordSink + 'static,
{
    let id = SessionId(session_id);
    match state.service.current_question(&id) {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(err) => service_error_response(err),
    }
}

pub(crate) async fn answer_handler<S>(
    State(state): State<CareersState<S>>,
    Path(session_id): Path<String>,
    Json(request): Json<AnswerRequest>,
) -> Response
where
    S: RecordSink + 'static,
{
    let id = SessionId(session_id);
    match state.service.record_answer(&id, request.selected_option) {
        Ok(step) => (StatusCode::OK, Json(step)).into_response(),
        Err(err) => service_error_response(err),
    }
}

pub(crate) async fn previous_handler<S>(
    State(state): State<CareersState<S>>,
    Path(session_id): Path<String>,
) -> Response
where
    S: RecordSink + 'static,
{
    let id = SessionId(session_id);
    match state.service.previous_question(&id) {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(err) => service_error_response(err),
    }
}

pub(crate) async fn hr_login_handler<S>(
    State(state): State<CareersState<S>>,
    Json(request): Json<HrLoginRequest>,
) -> Response
where
    S: RecordSink + 'static,
{
    match authenticate(state.credentials.as_ref(), &request.email, &request.password) {
        Ok(()) => (StatusCode::OK, Json(json!({ "status": "ok" }))).into_response(),
        Err(err) => (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": err.to_string() })),
        )
            .into_response(),
    }
}

pub(crate) async fn hr_report_handler<S>(State(state): State<CareersState<S>>) -> Response
where
    S: RecordSink + 'static,
{
    match RecruitingReport::load(state.service.sink().as_ref()) {
        Ok(report) => (StatusCode::OK, Json(report.workbook())).into_response(),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": err.to_string() })),
        )
            .into_response(),
    }
}

fn service_error_response(error: ApplicationServiceError) -> Response {
    let status = match &error {
        ApplicationServiceError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        ApplicationServiceError::UnknownSession => StatusCode::NOT_FOUND,
        ApplicationServiceError::Session(_) => StatusCode::CONFLICT,
        ApplicationServiceError::Sink(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let payload = match &error {
        ApplicationServiceError::Validation(violation) => json!({
            "error": error.to_string(),
            "field": violation.field,
        }),
        _ => json!({ "error": error.to_string() }),
    };

    (status, Json(payload)).into_response()
}
