use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Args;

use crate::config::AppConfig;
use crate::error::AppError;
use crate::workflows::recruiting::applications::{
    ApplicationForm, AssessmentCategory, CsvRecordSink, QuestionBank, QuestionView,
    RecruitmentService, StepOutcome,
};
use crate::workflows::recruiting::report::RecruitingReport;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Directory for the record stores. Defaults to the configured data dir.
    #[arg(long)]
    pub(crate) data_dir: Option<PathBuf>,
    /// Answer this many leading questions incorrectly to exercise the tiers.
    #[arg(long, default_value_t = 0)]
    pub(crate) misses: usize,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ReportArgs {
    /// Directory holding the record stores. Defaults to the configured data dir.
    #[arg(long)]
    pub(crate) data_dir: Option<PathBuf>,
}

/// Scripted candidate flow: submit an application, walk the whole assessment,
/// then render the HR summary over the record stores it just wrote.
pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let data_dir = resolve_data_dir(args.data_dir)?;
    let sink = Arc::new(CsvRecordSink::new(&data_dir));
    let service = RecruitmentService::new(sink);

    println!("Careers portal demo");
    println!("Record store: {}", data_dir.display());

    let form = demo_application_form();
    println!(
        "\n- Submitting application: {} for {}",
        form.name, form.position
    );

    let mut view = service.submit_application(form).map_err(AppError::from)?;
    println!(
        "- Assessment opened: {} ({} questions)",
        view.category, view.total_questions
    );

    loop {
        let selection = demo_selection(&view, args.misses);
        match service
            .record_answer(&view.session_id, selection)
            .map_err(AppError::from)?
        {
            StepOutcome::Next(next) => view = next,
            StepOutcome::Finished(result) => {
                println!("- Application {} recorded", result.application_id.0);
                println!(
                    "  Score: {:.1}% ({} of {} correct, {}/{} points)",
                    result.score_percentage,
                    result.correct_answers,
                    result.total_questions,
                    result.points_earned,
                    result.points_possible
                );
                println!("  Decision: {}", result.status);
                break;
            }
        }
    }

    println!();
    run_hr_report(ReportArgs {
        data_dir: Some(data_dir),
    })
}

pub(crate) fn run_hr_report(args: ReportArgs) -> Result<(), AppError> {
    let data_dir = resolve_data_dir(args.data_dir)?;
    let sink = CsvRecordSink::new(&data_dir);
    let report = RecruitingReport::load(&sink).map_err(AppError::from)?;
    render_recruiting_report(&report, &data_dir);
    Ok(())
}

fn resolve_data_dir(override_dir: Option<PathBuf>) -> Result<PathBuf, AppError> {
    match override_dir {
        Some(dir) => Ok(dir),
        None => Ok(AppConfig::load()?.storage.data_dir),
    }
}

fn demo_application_form() -> ApplicationForm {
    ApplicationForm {
        name: "Ayesha Khan".to_string(),
        email: "ayesha.khan@example.com".to_string(),
        phone: "0300-1234567".to_string(),
        national_id: "42101-1234567-1".to_string(),
        position: "Customer Relationship Officer".to_string(),
        department: "Customer Service".to_string(),
        education: "Bachelors in Business Administration".to_string(),
        experience: "3 years".to_string(),
        motivation: "Looking to grow a relationship banking career".to_string(),
        availability: "Immediate".to_string(),
        salary_expectation: "PKR 100,000".to_string(),
    }
}

/// Picks the correct option for the presented question, or a deliberate miss
/// for the first `misses` positions.
fn demo_selection(view: &QuestionView, misses: usize) -> String {
    let category = AssessmentCategory::all()
        .into_iter()
        .find(|category| category.label() == view.category)
        .unwrap_or(AssessmentCategory::BankingFundamentals);

    let question = QuestionBank::questions_for(category)
        .iter()
        .find(|question| question.text == view.text);

    match question {
        Some(question) if view.position < misses => {
            let wrong_index = (question.correct_index + 1) % question.options.len();
            question.options[wrong_index].to_string()
        }
        Some(question) => question.correct_option().to_string(),
        None => view.options.first().copied().unwrap_or("").to_string(),
    }
}

fn render_recruiting_report(report: &RecruitingReport, data_dir: &Path) {
    println!("HR recruiting report");
    println!("Record store: {}", data_dir.display());

    let summary = report.summary();

    println!("\nSummary");
    println!(
        "- {} applications | {} assessments completed",
        summary.total_applications, summary.assessments_completed
    );
    println!("- Average score: {:.1}%", summary.average_score);
    println!(
        "- {} selected for interview | {} under review",
        summary.selected_for_interview, summary.under_review
    );

    if summary.by_position.is_empty() {
        println!("\nApplications by position: none");
    } else {
        println!("\nApplications by position");
        for entry in &summary.by_position {
            println!("- {}: {}", entry.position, entry.applications);
        }
    }

    if summary.by_status.is_empty() {
        println!("\nApplications by status: none");
    } else {
        println!("\nApplications by status");
        for entry in &summary.by_status {
            println!("- {}: {}", entry.status, entry.applications);
        }
    }
}
