use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::bank::Question;

/// Hiring decision derived from the score percentage. Thresholds are fixed
/// and boundary values fall into the higher tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionTier {
    SelectedForInterview,
    UnderReview,
    NotSelected,
}

impl DecisionTier {
    pub fn classify(percentage: f64) -> Self {
        if percentage >= 80.0 {
            Self::SelectedForInterview
        } else if percentage >= 70.0 {
            Self::UnderReview
        } else {
            Self::NotSelected
        }
    }

    /// Display name, also persisted as the Status column.
    pub const fn label(self) -> &'static str {
        match self {
            Self::SelectedForInterview => "Selected for Interview",
            Self::UnderReview => "Under Review",
            Self::NotSelected => "Not Selected",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub percentage: f64,
    pub points_earned: u32,
    pub points_possible: u32,
    pub correct_count: usize,
    pub total_questions: usize,
}

impl ScoreBreakdown {
    pub fn tier(&self) -> DecisionTier {
        DecisionTier::classify(self.percentage)
    }
}

/// Pure scoring pass over a question set and the answers recorded against it.
/// An answer is correct only when the stored selection equals the correct
/// option text exactly; unanswered positions count as incorrect. A set with
/// zero possible points scores 0% rather than dividing by zero.
pub fn score(questions: &[Question], answers: &BTreeMap<usize, String>) -> ScoreBreakdown {
    let mut points_possible = 0u32;
    let mut points_earned = 0u32;
    let mut correct_count = 0usize;

    for (position, question) in questions.iter().enumerate() {
        points_possible += question.points;
        if answers.get(&position).map(String::as_str) == Some(question.correct_option()) {
            points_earned += question.points;
            correct_count += 1;
        }
    }

    let percentage = if points_possible == 0 {
        0.0
    } else {
        f64::from(points_earned) * 100.0 / f64::from(points_possible)
    };

    ScoreBreakdown {
        percentage,
        points_earned,
        points_possible,
        correct_count,
        total_questions: questions.len(),
    }
}
