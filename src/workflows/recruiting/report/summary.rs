use std::collections::BTreeMap;

use super::super::applications::assessment::DecisionTier;
use super::super::applications::sink::{ApplicationRow, AssessmentRow, RecordSink, SinkError};
use super::views::{PositionCountEntry, ReportSummaryView, StatusCountEntry, WorkbookView};

/// Snapshot of both record stores at load time.
#[derive(Debug, Default)]
pub struct RecruitingReport {
    pub applications: Vec<ApplicationRow>,
    pub assessments: Vec<AssessmentRow>,
}

impl RecruitingReport {
    pub fn load<S: RecordSink + ?Sized>(sink: &S) -> Result<Self, SinkError> {
        Ok(Self {
            applications: sink.list_applications()?,
            assessments: sink.list_assessments()?,
        })
    }

    pub fn total_applications(&self) -> usize {
        self.applications.len()
    }

    pub fn assessments_completed(&self) -> usize {
        self.assessments.len()
    }

    /// Mean of the persisted score percentages. Rows whose score column does
    /// not parse are skipped rather than failing the whole report.
    pub fn average_score(&self) -> f64 {
        let scores: Vec<f64> = self
            .assessments
            .iter()
            .filter_map(|row| parse_percentage(&row.score_percentage))
            .collect();

        if scores.is_empty() {
            0.0
        } else {
            scores.iter().sum::<f64>() / scores.len() as f64
        }
    }

    pub fn selected_for_interview(&self) -> usize {
        self.count_status(DecisionTier::SelectedForInterview.label())
    }

    pub fn under_review(&self) -> usize {
        self.count_status(DecisionTier::UnderReview.label())
    }

    pub fn applications_by_position(&self) -> Vec<PositionCountEntry> {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for row in &self.applications {
            *counts.entry(row.position.as_str()).or_default() += 1;
        }

        counts
            .into_iter()
            .map(|(position, applications)| PositionCountEntry {
                position: position.to_string(),
                applications,
            })
            .collect()
    }

    pub fn applications_by_status(&self) -> Vec<StatusCountEntry> {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for row in &self.applications {
            *counts.entry(row.status.as_str()).or_default() += 1;
        }

        counts
            .into_iter()
            .map(|(status, applications)| StatusCountEntry {
                status: status.to_string(),
                applications,
            })
            .collect()
    }

    pub fn summary(&self) -> ReportSummaryView {
        ReportSummaryView {
            total_applications: self.total_applications(),
            assessments_completed: self.assessments_completed(),
            average_score: self.average_score(),
            selected_for_interview: self.selected_for_interview(),
            under_review: self.under_review(),
            by_position: self.applications_by_position(),
            by_status: self.applications_by_status(),
        }
    }

    pub fn workbook(&self) -> WorkbookView {
        WorkbookView {
            candidates: self.applications.clone(),
            assessments: self.assessments.clone(),
            summary: self.summary(),
        }
    }

    fn count_status(&self, status: &str) -> usize {
        self.applications
            .iter()
            .filter(|row| row.status == status)
            .count()
    }
}

fn parse_percentage(value: &str) -> Option<f64> {
    value.trim().trim_end_matches('%').parse().ok()
}
