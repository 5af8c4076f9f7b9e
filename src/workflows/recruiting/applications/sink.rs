use std::collections::BTreeMap;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::assessment::{AssessmentCategory, DecisionTier, ScoreBreakdown};
use super::domain::{ApplicationId, ApplicationProfile};

/// Completed-assessment payload recorded alongside the application.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentOutcome {
    pub category: AssessmentCategory,
    pub breakdown: ScoreBreakdown,
    pub tier: DecisionTier,
    pub raw_answers: BTreeMap<usize, String>,
    pub duration_minutes: u32,
    pub completed_at: NaiveDateTime,
}

/// Candidates-store row. Serde renames are the persisted column headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationRow {
    #[serde(rename = "Application_ID")]
    pub application_id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Phone")]
    pub phone: String,
    #[serde(rename = "National_ID")]
    pub national_id: String,
    #[serde(rename = "Position")]
    pub position: String,
    #[serde(rename = "Department")]
    pub department: String,
    #[serde(rename = "Education")]
    pub education: String,
    #[serde(rename = "Experience")]
    pub experience: String,
    #[serde(rename = "Assessment_Score")]
    pub assessment_score: String,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "Application_Date")]
    pub application_date: String,
    #[serde(rename = "Motivation")]
    pub motivation: String,
    #[serde(rename = "Availability")]
    pub availability: String,
    #[serde(rename = "Salary_Expectation")]
    pub salary_expectation: String,
}

impl ApplicationRow {
    pub fn from_parts(
        id: &ApplicationId,
        application: &ApplicationProfile,
        outcome: &AssessmentOutcome,
    ) -> Self {
        Self {
            application_id: id.0.clone(),
            name: application.form.name.clone(),
            email: application.form.email.clone(),
            phone: application.form.phone.clone(),
            national_id: application.form.national_id.clone(),
            position: application.form.position.clone(),
            department: application.form.department.clone(),
            education: application.form.education.clone(),
            experience: application.form.experience.clone(),
            assessment_score: format!("{:.1}%", outcome.breakdown.percentage),
            status: outcome.tier.label().to_string(),
            application_date: application
                .submitted_at
                .format("%Y-%m-%d %H:%M:%S")
                .to_string(),
            motivation: application.form.motivation.clone(),
            availability: application.form.availability.clone(),
            salary_expectation: application.form.salary_expectation.clone(),
        }
    }
}

/// Assessments-store row, joined to the candidates store by Application_ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentRow {
    #[serde(rename = "Application_ID")]
    pub application_id: String,
    #[serde(rename = "Candidate_Name")]
    pub candidate_name: String,
    #[serde(rename = "Position")]
    pub position: String,
    #[serde(rename = "Assessment_Type")]
    pub assessment_type: String,
    #[serde(rename = "Total_Questions")]
    pub total_questions: usize,
    #[serde(rename = "Correct_Answers")]
    pub correct_answers: usize,
    #[serde(rename = "Score_Percentage")]
    pub score_percentage: String,
    #[serde(rename = "Total_Points_Possible")]
    pub total_points_possible: u32,
    #[serde(rename = "Points_Earned")]
    pub points_earned: u32,
    #[serde(rename = "Duration_Minutes")]
    pub duration_minutes: u32,
    #[serde(rename = "Completion_Time")]
    pub completion_time: String,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "Detailed_Answers")]
    pub detailed_answers: String,
}

impl AssessmentRow {
    pub fn from_parts(
        id: &ApplicationId,
        application: &ApplicationProfile,
        outcome: &AssessmentOutcome,
    ) -> Result<Self, SinkError> {
        Ok(Self {
            application_id: id.0.clone(),
            candidate_name: application.form.name.clone(),
            position: application.form.position.clone(),
            assessment_type: outcome.category.label().to_string(),
            total_questions: outcome.breakdown.total_questions,
            correct_answers: outcome.breakdown.correct_count,
            score_percentage: format!("{:.1}%", outcome.breakdown.percentage),
            total_points_possible: outcome.breakdown.points_possible,
            points_earned: outcome.breakdown.points_earned,
            duration_minutes: outcome.duration_minutes,
            completion_time: outcome.completed_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            status: outcome.tier.label().to_string(),
            detailed_answers: serde_json::to_string(&outcome.raw_answers)?,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("record store io failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("record store codec failure: {0}")]
    Csv(#[from] csv::Error),
    #[error("answer serialization failed: {0}")]
    Answers(#[from] serde_json::Error),
}

/// Append-only recording seam. The engine calls `record` exactly once per
/// completed session; HR reporting reads back through the same trait so the
/// backing store stays swappable.
pub trait RecordSink: Send + Sync {
    /// Assigns an `ApplicationId` and appends one row to each store. There is
    /// no idempotency: calling twice records twice.
    fn record(
        &self,
        application: &ApplicationProfile,
        outcome: &AssessmentOutcome,
    ) -> Result<ApplicationId, SinkError>;

    fn list_applications(&self) -> Result<Vec<ApplicationRow>, SinkError>;

    fn list_assessments(&self) -> Result<Vec<AssessmentRow>, SinkError>;
}

/// CSV-backed sink writing `candidates.csv` and `assessments.csv` under one
/// directory. Each file gets its header on first write only.
pub struct CsvRecordSink {
    data_dir: PathBuf,
    candidates_path: PathBuf,
    assessments_path: PathBuf,
}

impl CsvRecordSink {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        let candidates_path = data_dir.join("candidates.csv");
        let assessments_path = data_dir.join("assessments.csv");
        Self {
            data_dir,
            candidates_path,
            assessments_path,
        }
    }

    pub fn candidates_path(&self) -> &Path {
        &self.candidates_path
    }

    pub fn assessments_path(&self) -> &Path {
        &self.assessments_path
    }

    fn append_row<T: Serialize>(path: &Path, row: &T) -> Result<(), SinkError> {
        let write_header = !path.exists();
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(write_header)
            .from_writer(file);
        writer.serialize(row)?;
        writer.flush()?;
        Ok(())
    }

    fn read_rows<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<Vec<T>, SinkError> {
        if !path.exists() {
            return Ok(Vec::new());
        }

        let mut reader = csv::Reader::from_path(path)?;
        let mut rows = Vec::new();
        for row in reader.deserialize() {
            rows.push(row?);
        }
        Ok(rows)
    }
}

impl RecordSink for CsvRecordSink {
    fn record(
        &self,
        application: &ApplicationProfile,
        outcome: &AssessmentOutcome,
    ) -> Result<ApplicationId, SinkError> {
        fs::create_dir_all(&self.data_dir)?;

        let id = ApplicationId::generate(&mut rand::thread_rng(), Local::now().date_naive());
        let candidate_row = ApplicationRow::from_parts(&id, application, outcome);
        let assessment_row = AssessmentRow::from_parts(&id, application, outcome)?;

        // Not atomic across the two files: a failed second append leaves the
        // candidates row in place.
        Self::append_row(&self.candidates_path, &candidate_row)?;
        Self::append_row(&self.assessments_path, &assessment_row)?;

        Ok(id)
    }

    fn list_applications(&self) -> Result<Vec<ApplicationRow>, SinkError> {
        Self::read_rows(&self.candidates_path)
    }

    fn list_assessments(&self) -> Result<Vec<AssessmentRow>, SinkError> {
        Self::read_rows(&self.assessments_path)
    }
}
