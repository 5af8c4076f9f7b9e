//! CSV record store coverage: append-only writes, one header per file, and
//! the Application_ID join between the two stores.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use careers_portal::workflows::recruiting::applications::{
    score, ApplicationForm, ApplicationProfile, AssessmentCategory, AssessmentOutcome,
    CsvRecordSink, QuestionBank, RecordSink,
};

fn scratch_dir(tag: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    std::env::temp_dir().join(format!(
        "careers-portal-{tag}-{}-{nanos}",
        std::process::id()
    ))
}

fn profile(name: &str) -> ApplicationProfile {
    ApplicationProfile {
        form: ApplicationForm {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
            phone: "0301-7654321".to_string(),
            national_id: "42201-7654321-9".to_string(),
            position: "Credit Analyst".to_string(),
            department: "Credit, Risk & Compliance".to_string(),
            education: "Masters in Finance".to_string(),
            experience: "2 years".to_string(),
            motivation: "Credit risk specialization".to_string(),
            availability: "Two weeks notice".to_string(),
            salary_expectation: "PKR 120,000".to_string(),
        },
        submitted_at: chrono::Local::now().naive_local(),
    }
}

fn perfect_outcome() -> AssessmentOutcome {
    let questions = QuestionBank::questions_for(AssessmentCategory::BankingFundamentals);
    let answers: BTreeMap<usize, String> = questions
        .iter()
        .enumerate()
        .map(|(position, question)| (position, question.correct_option().to_string()))
        .collect();
    let breakdown = score(questions, &answers);

    AssessmentOutcome {
        category: AssessmentCategory::BankingFundamentals,
        tier: breakdown.tier(),
        breakdown,
        raw_answers: answers,
        duration_minutes: 20,
        completed_at: chrono::Local::now().naive_local(),
    }
}

#[test]
fn record_appends_one_joined_row_to_each_store() {
    let dir = scratch_dir("append");
    let sink = CsvRecordSink::new(&dir);

    let first = sink
        .record(&profile("Aisha Raza"), &perfect_outcome())
        .expect("first recording");
    assert_eq!(sink.list_applications().expect("read").len(), 1);
    assert_eq!(sink.list_assessments().expect("read").len(), 1);

    let second = sink
        .record(&profile("Bilal Ahmed"), &perfect_outcome())
        .expect("second recording");

    let applications = sink.list_applications().expect("read");
    let assessments = sink.list_assessments().expect("read");
    assert_eq!(applications.len(), 2);
    assert_eq!(assessments.len(), 2);

    assert_eq!(applications[0].application_id, first.0);
    assert_eq!(assessments[0].application_id, first.0);
    assert_eq!(applications[1].application_id, second.0);
    assert_eq!(assessments[1].application_id, second.0);
    assert_eq!(applications[1].name, "Bilal Ahmed");
    assert_eq!(assessments[1].candidate_name, "Bilal Ahmed");

    fs::remove_dir_all(&dir).expect("cleanup");
}

#[test]
fn headers_are_written_once_per_file() {
    let dir = scratch_dir("headers");
    let sink = CsvRecordSink::new(&dir);

    sink.record(&profile("Aisha Raza"), &perfect_outcome())
        .expect("first recording");
    sink.record(&profile("Bilal Ahmed"), &perfect_outcome())
        .expect("second recording");

    let candidates = fs::read_to_string(sink.candidates_path()).expect("candidates store");
    assert_eq!(candidates.matches("Application_ID,Name,Email").count(), 1);
    assert!(candidates.starts_with("Application_ID,"));

    let assessments = fs::read_to_string(sink.assessments_path()).expect("assessments store");
    assert_eq!(
        assessments
            .matches("Application_ID,Candidate_Name")
            .count(),
        1
    );
    assert!(assessments.starts_with("Application_ID,"));

    fs::remove_dir_all(&dir).expect("cleanup");
}

#[test]
fn assigned_ids_carry_prefix_date_and_four_digit_suffix() {
    let dir = scratch_dir("ids");
    let sink = CsvRecordSink::new(&dir);

    let id = sink
        .record(&profile("Aisha Raza"), &perfect_outcome())
        .expect("recording");

    let parts: Vec<&str> = id.0.split('-').collect();
    assert_eq!(parts.len(), 3);
    assert_eq!(parts[0], "APP");
    assert_eq!(parts[1].len(), 8);
    assert!(parts[1].chars().all(|c| c.is_ascii_digit()));
    let suffix: u32 = parts[2].parse().expect("numeric suffix");
    assert!((1000..10000).contains(&suffix));

    fs::remove_dir_all(&dir).expect("cleanup");
}

#[test]
fn persisted_rows_carry_formatted_scores_and_status() {
    let dir = scratch_dir("format");
    let sink = CsvRecordSink::new(&dir);

    sink.record(&profile("Aisha Raza"), &perfect_outcome())
        .expect("recording");

    let application = &sink.list_applications().expect("read")[0];
    assert_eq!(application.assessment_score, "100.0%");
    assert_eq!(application.status, "Selected for Interview");
    assert_eq!(application.position, "Credit Analyst");

    let assessment = &sink.list_assessments().expect("read")[0];
    assert_eq!(assessment.assessment_type, "Banking Fundamentals");
    assert_eq!(assessment.total_questions, 12);
    assert_eq!(assessment.correct_answers, 12);
    assert_eq!(assessment.score_percentage, "100.0%");
    assert!(assessment.detailed_answers.starts_with('{'));

    fs::remove_dir_all(&dir).expect("cleanup");
}

#[test]
fn missing_stores_read_back_as_empty() {
    let dir = scratch_dir("empty");
    let sink = CsvRecordSink::new(&dir);

    assert!(sink.list_applications().expect("read").is_empty());
    assert!(sink.list_assessments().expect("read").is_empty());
}
