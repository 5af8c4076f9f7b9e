use serde::Serialize;

use super::super::applications::sink::{ApplicationRow, AssessmentRow};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PositionCountEntry {
    pub position: String,
    pub applications: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusCountEntry {
    pub status: String,
    pub applications: usize,
}

/// Computed summary sheet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSummaryView {
    pub total_applications: usize,
    pub assessments_completed: usize,
    pub average_score: f64,
    pub selected_for_interview: usize,
    pub under_review: usize,
    pub by_position: Vec<PositionCountEntry>,
    pub by_status: Vec<StatusCountEntry>,
}

/// Export shape mirroring the HR workbook: one sheet per record store plus
/// the computed summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkbookView {
    pub candidates: Vec<ApplicationRow>,
    pub assessments: Vec<AssessmentRow>,
    pub summary: ReportSummaryView,
}
