use serde::{Deserialize, Serialize};

/// The four question-bank partitions. One bank per role family plus the
/// general banking fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentCategory {
    BranchManager,
    OperationsManagement,
    CustomerRelations,
    BankingFundamentals,
}

impl AssessmentCategory {
    pub const fn all() -> [Self; 4] {
        [
            Self::BranchManager,
            Self::OperationsManagement,
            Self::CustomerRelations,
            Self::BankingFundamentals,
        ]
    }

    /// Display name, also persisted as the Assessment_Type column.
    pub const fn label(self) -> &'static str {
        match self {
            Self::BranchManager => "Branch Manager",
            Self::OperationsManagement => "Assistant Manager Operations",
            Self::CustomerRelations => "Customer Relationship Officer",
            Self::BankingFundamentals => "Banking Fundamentals",
        }
    }
}

/// One resolution rule: any marker contained in the job title selects the
/// category.
#[derive(Debug, Clone, Copy)]
pub struct CategoryRule {
    pub markers: &'static [&'static str],
    pub category: AssessmentCategory,
}

/// Ordered rule table. Titles are free text and can carry markers from more
/// than one rule, so position in this table is the tie-break: the first rule
/// with a hit wins.
pub const CATEGORY_RULES: [CategoryRule; 3] = [
    CategoryRule {
        markers: &["Branch Manager"],
        category: AssessmentCategory::BranchManager,
    },
    CategoryRule {
        markers: &["Assistant Manager Operations", "Operations"],
        category: AssessmentCategory::OperationsManagement,
    },
    CategoryRule {
        markers: &["Customer Relationship Officer", "Customer"],
        category: AssessmentCategory::CustomerRelations,
    },
];

/// Resolves a job title to its question bank. Matching is case-sensitive
/// substring containment; a title hitting no rule falls back to the general
/// banking bank.
pub fn resolve_category(job_title: &str) -> AssessmentCategory {
    for rule in &CATEGORY_RULES {
        if rule.markers.iter().any(|marker| job_title.contains(marker)) {
            return rule.category;
        }
    }
    AssessmentCategory::BankingFundamentals
}
