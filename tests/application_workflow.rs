//! End-to-end coverage of the candidate application and assessment workflow,
//! driven through the public service facade and the HTTP router.

mod common {
    use std::sync::Mutex;

    use careers_portal::workflows::recruiting::applications::{
        ApplicationForm, ApplicationId, ApplicationProfile, ApplicationRow, AssessmentCategory,
        AssessmentOutcome, AssessmentRow, QuestionBank, RecordSink, SinkError,
    };

    pub(super) fn form(position: &str, department: &str) -> ApplicationForm {
        ApplicationForm {
            name: "Ayesha Khan".to_string(),
            email: "ayesha.khan@example.com".to_string(),
            phone: "0300-1234567".to_string(),
            national_id: "42101-1234567-1".to_string(),
            position: position.to_string(),
            department: department.to_string(),
            education: "Bachelors in Business Administration".to_string(),
            experience: "3 years".to_string(),
            motivation: "Relationship banking career".to_string(),
            availability: "Immediate".to_string(),
            salary_expectation: "PKR 100,000".to_string(),
        }
    }

    fn category_for(label: &str) -> AssessmentCategory {
        AssessmentCategory::all()
            .into_iter()
            .find(|category| category.label() == label)
            .expect("known category label")
    }

    pub(super) fn correct_option_for(category_label: &str, text: &str) -> String {
        QuestionBank::questions_for(category_for(category_label))
            .iter()
            .find(|question| question.text == text)
            .map(|question| question.correct_option().to_string())
            .expect("question present in its bank")
    }

    pub(super) fn wrong_option_for(category_label: &str, text: &str) -> String {
        QuestionBank::questions_for(category_for(category_label))
            .iter()
            .find(|question| question.text == text)
            .map(|question| {
                let wrong_index = (question.correct_index + 1) % question.options.len();
                question.options[wrong_index].to_string()
            })
            .expect("question present in its bank")
    }

    #[derive(Default)]
    pub(super) struct MemorySink {
        applications: Mutex<Vec<ApplicationRow>>,
        assessments: Mutex<Vec<AssessmentRow>>,
    }

    impl RecordSink for MemorySink {
        fn record(
            &self,
            application: &ApplicationProfile,
            outcome: &AssessmentOutcome,
        ) -> Result<ApplicationId, SinkError> {
            let id = ApplicationId::generate(
                &mut rand::thread_rng(),
                chrono::Local::now().date_naive(),
            );
            self.applications
                .lock()
                .expect("lock")
                .push(ApplicationRow::from_parts(&id, application, outcome));
            self.assessments
                .lock()
                .expect("lock")
                .push(AssessmentRow::from_parts(&id, application, outcome)?);
            Ok(id)
        }

        fn list_applications(&self) -> Result<Vec<ApplicationRow>, SinkError> {
            Ok(self.applications.lock().expect("lock").clone())
        }

        fn list_assessments(&self) -> Result<Vec<AssessmentRow>, SinkError> {
            Ok(self.assessments.lock().expect("lock").clone())
        }
    }

    pub(super) struct FailingSink;

    impl RecordSink for FailingSink {
        fn record(
            &self,
            _application: &ApplicationProfile,
            _outcome: &AssessmentOutcome,
        ) -> Result<ApplicationId, SinkError> {
            Err(SinkError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                "record store offline",
            )))
        }

        fn list_applications(&self) -> Result<Vec<ApplicationRow>, SinkError> {
            Err(SinkError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                "record store offline",
            )))
        }

        fn list_assessments(&self) -> Result<Vec<AssessmentRow>, SinkError> {
            Err(SinkError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                "record store offline",
            )))
        }
    }
}

mod flow {
    use super::common::*;
    use std::sync::Arc;

    use careers_portal::workflows::recruiting::applications::{
        ApplicationServiceError, CompletionView, RecordSink, RecruitmentService, StepOutcome,
    };

    fn build_service() -> (RecruitmentService<MemorySink>, Arc<MemorySink>) {
        let sink = Arc::new(MemorySink::default());
        (RecruitmentService::new(sink.clone()), sink)
    }

    #[test]
    fn submission_opens_a_session_at_the_first_question() {
        let (service, sink) = build_service();

        let view = service
            .submit_application(form("Customer Relationship Officer", "Customer Service"))
            .expect("session opens");

        assert_eq!(view.position, 0);
        assert_eq!(view.total_questions, 12);
        assert_eq!(view.category, "Customer Relationship Officer");
        assert!(view.selected_option.is_none());
        assert!(sink.list_applications().expect("read").is_empty());
    }

    #[test]
    fn invalid_form_is_rejected_before_a_session_opens() {
        let (service, sink) = build_service();
        let mut bad_form = form("Branch Manager", "Retail Banking");
        bad_form.email = "   ".to_string();

        match service.submit_application(bad_form) {
            Err(ApplicationServiceError::Validation(violation)) => {
                assert_eq!(violation.field, "email");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
        assert!(sink.list_applications().expect("read").is_empty());
    }

    #[test]
    fn perfect_run_is_selected_and_recorded_once() {
        let (service, sink) = build_service();

        let mut view = service
            .submit_application(form("Branch Manager", "Retail Banking"))
            .expect("session opens");
        let session_id = view.session_id.clone();

        let completion: CompletionView = loop {
            let selection = correct_option_for(view.category, view.text);
            match service
                .record_answer(&view.session_id, selection)
                .expect("answer accepted")
            {
                StepOutcome::Next(next) => view = next,
                StepOutcome::Finished(done) => break done,
            }
        };

        assert_eq!(completion.score_percentage, 100.0);
        assert_eq!(completion.correct_answers, 12);
        assert_eq!(completion.points_earned, completion.points_possible);
        assert_eq!(completion.status, "Selected for Interview");

        let applications = sink.list_applications().expect("read");
        let assessments = sink.list_assessments().expect("read");
        assert_eq!(applications.len(), 1);
        assert_eq!(assessments.len(), 1);
        assert_eq!(applications[0].application_id, completion.application_id.0);
        assert_eq!(assessments[0].application_id, completion.application_id.0);
        assert_eq!(applications[0].assessment_score, "100.0%");
        assert_eq!(assessments[0].assessment_type, "Branch Manager");

        // The completed session is gone; nothing can be recorded twice.
        let err = service
            .record_answer(&session_id, "anything".to_string())
            .expect_err("session discarded after completion");
        assert!(matches!(err, ApplicationServiceError::UnknownSession));
        assert_eq!(sink.list_applications().expect("read").len(), 1);
    }

    #[test]
    fn revised_answer_replaces_the_first_selection() {
        let (service, _sink) = build_service();

        let first = service
            .submit_application(form("Assistant Manager Operations", "Operations"))
            .expect("session opens");
        let first_pick = correct_option_for(first.category, first.text);
        let first_text = first.text;

        let mut view = match service
            .record_answer(&first.session_id, first_pick.clone())
            .expect("answer accepted")
        {
            StepOutcome::Next(next) => next,
            StepOutcome::Finished(_) => panic!("twelve questions expected"),
        };

        view = service
            .previous_question(&view.session_id)
            .expect("step back");
        assert_eq!(view.position, 0);
        assert_eq!(view.text, first_text);
        assert_eq!(view.selected_option.as_deref(), Some(first_pick.as_str()));

        // Overwrite with a miss, then answer the rest correctly.
        let revised = wrong_option_for(view.category, view.text);
        let completion = loop {
            let selection = if view.position == 0 {
                revised.clone()
            } else {
                correct_option_for(view.category, view.text)
            };
            match service
                .record_answer(&view.session_id, selection)
                .expect("answer accepted")
            {
                StepOutcome::Next(next) => view = next,
                StepOutcome::Finished(done) => break done,
            }
        };

        assert_eq!(completion.correct_answers, 11);
        assert!(completion.score_percentage < 100.0);
    }

    #[test]
    fn record_store_failure_surfaces_to_the_caller() {
        let service = RecruitmentService::new(Arc::new(FailingSink));

        let mut view = service
            .submit_application(form("Treasury Officer", "Treasury"))
            .expect("session opens");
        assert_eq!(view.category, "Banking Fundamentals");

        let err = loop {
            let selection = correct_option_for(view.category, view.text);
            match service.record_answer(&view.session_id, selection) {
                Ok(StepOutcome::Next(next)) => view = next,
                Ok(StepOutcome::Finished(_)) => panic!("recording should fail"),
                Err(err) => break err,
            }
        };

        assert!(matches!(err, ApplicationServiceError::Sink(_)));
    }
}

mod routing {
    use super::common::*;
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use careers_portal::workflows::recruiting::applications::{
        careers_router, RecordSink, RecruitmentService,
    };
    use careers_portal::workflows::recruiting::auth::StaticCredentialTable;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn build_router() -> (axum::Router, Arc<MemorySink>) {
        let sink = Arc::new(MemorySink::default());
        let service = Arc::new(RecruitmentService::new(sink.clone()));
        (
            careers_router(service, Arc::new(StaticCredentialTable)),
            sink,
        )
    }

    async fn payload_of(response: axum::response::Response) -> Value {
        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        serde_json::from_slice(&body).expect("json payload")
    }

    fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(body).expect("serialize")))
            .expect("request")
    }

    #[tokio::test]
    async fn jobs_endpoint_lists_the_catalog() {
        let (router, _) = build_router();
        let response = router
            .oneshot(
                Request::builder()
                    .uri("/api/v1/careers/jobs")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::OK);
        let payload = payload_of(response).await;
        let postings = payload.as_array().expect("array of postings");
        assert!(postings
            .iter()
            .any(|posting| posting.get("title") == Some(&json!("Branch Manager"))));
    }

    #[tokio::test]
    async fn candidate_flow_runs_end_to_end_over_http() {
        let (router, sink) = build_router();

        let submit_body =
            serde_json::to_value(form("Customer Relationship Officer", "Customer Service"))
                .expect("serialize form");
        let response = router
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/v1/careers/applications",
                &submit_body,
            ))
            .await
            .expect("router dispatch");
        assert_eq!(response.status(), StatusCode::ACCEPTED);

        let mut question = payload_of(response).await;
        let session_id = question
            .get("session_id")
            .and_then(Value::as_str)
            .expect("session id")
            .to_string();
        assert_eq!(question.get("position"), Some(&json!(0)));

        let answers_uri = format!("/api/v1/careers/sessions/{session_id}/answers");
        let result = loop {
            let category = question
                .get("category")
                .and_then(Value::as_str)
                .expect("category");
            let text = question.get("text").and_then(Value::as_str).expect("text");
            let selection = correct_option_for(category, text);

            let response = router
                .clone()
                .oneshot(json_request(
                    "POST",
                    &answers_uri,
                    &json!({ "selected_option": selection }),
                ))
                .await
                .expect("router dispatch");
            assert_eq!(response.status(), StatusCode::OK);

            let payload = payload_of(response).await;
            match payload.get("step").and_then(Value::as_str) {
                Some("next") => question = payload,
                Some("finished") => break payload,
                other => panic!("unexpected step marker {other:?}"),
            }
        };

        assert_eq!(result.get("score_percentage"), Some(&json!(100.0)));
        assert_eq!(result.get("status"), Some(&json!("Selected for Interview")));
        assert!(result.get("application_id").is_some());
        assert_eq!(sink.list_applications().expect("read").len(), 1);
    }

    #[tokio::test]
    async fn unknown_session_returns_not_found() {
        let (router, _) = build_router();
        let response = router
            .oneshot(
                Request::builder()
                    .uri("/api/v1/careers/sessions/sess-999999")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn invalid_submission_is_unprocessable() {
        let (router, _) = build_router();
        let mut bad_form = form("Branch Manager", "Retail Banking");
        bad_form.phone = String::new();

        let response = router
            .oneshot(json_request(
                "POST",
                "/api/v1/careers/applications",
                &serde_json::to_value(bad_form).expect("serialize form"),
            ))
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let payload = payload_of(response).await;
        assert_eq!(payload.get("field"), Some(&json!("phone")));
    }

    #[tokio::test]
    async fn hr_login_accepts_known_accounts_only() {
        let (router, _) = build_router();

        let ok = router
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/v1/hr/login",
                &json!({
                    "email": "recruitment@careers-portal.example",
                    "password": "Recruit@2024",
                }),
            ))
            .await
            .expect("router dispatch");
        assert_eq!(ok.status(), StatusCode::OK);

        let rejected = router
            .oneshot(json_request(
                "POST",
                "/api/v1/hr/login",
                &json!({
                    "email": "recruitment@careers-portal.example",
                    "password": "wrong",
                }),
            ))
            .await
            .expect("router dispatch");
        assert_eq!(rejected.status(), StatusCode::UNAUTHORIZED);
        let payload = payload_of(rejected).await;
        assert_eq!(payload.get("error"), Some(&json!("invalid email or password")));
    }

    #[tokio::test]
    async fn hr_report_reflects_recorded_outcomes() {
        let (router, sink) = build_router();

        // Seed one completed flow through the service behind the router.
        let service = RecruitmentService::new(sink.clone());
        let mut view = service
            .submit_application(form("Branch Manager", "Retail Banking"))
            .expect("session opens");
        loop {
            let selection = correct_option_for(view.category, view.text);
            match service
                .record_answer(&view.session_id, selection)
                .expect("answer accepted")
            {
                careers_portal::workflows::recruiting::applications::StepOutcome::Next(next) => {
                    view = next
                }
                careers_portal::workflows::recruiting::applications::StepOutcome::Finished(_) => {
                    break
                }
            }
        }

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/api/v1/hr/report")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::OK);
        let payload = payload_of(response).await;
        let summary = payload.get("summary").expect("summary sheet");
        assert_eq!(summary.get("total_applications"), Some(&json!(1)));
        assert_eq!(summary.get("selected_for_interview"), Some(&json!(1)));
        assert_eq!(
            payload
                .get("candidates")
                .and_then(Value::as_array)
                .map(Vec::len),
            Some(1)
        );
        assert_eq!(
            payload
                .get("assessments")
                .and_then(Value::as_array)
                .map(Vec::len),
            Some(1)
        );
    }
}
