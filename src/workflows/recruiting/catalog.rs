use serde::Serialize;

/// A published opening. The assessment engine only consumes `title` (category
/// resolution) and `department` (persisted with the application row); the
/// remaining fields feed the public listings payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct JobPosting {
    pub title: &'static str,
    pub department: &'static str,
    pub level: &'static str,
    pub location: &'static str,
    pub salary_range: &'static str,
    pub description: &'static str,
}

/// Static catalog of open positions.
pub struct JobCatalog;

impl JobCatalog {
    pub fn standard() -> &'static [JobPosting] {
        &STANDARD_POSTINGS
    }

    /// Exact title lookup.
    pub fn find(title: &str) -> Option<&'static JobPosting> {
        STANDARD_POSTINGS
            .iter()
            .find(|posting| posting.title == title)
    }
}

static STANDARD_POSTINGS: [JobPosting; 8] = [
    JobPosting {
        title: "Branch Manager",
        department: "Retail Banking",
        level: "Senior Management",
        location: "Karachi",
        salary_range: "PKR 300,000 - 500,000",
        description: "Lead branch operations, drive business growth, and manage customer \
                      relationships while ensuring regulatory compliance.",
    },
    JobPosting {
        title: "Assistant Manager Operations",
        department: "Operations",
        level: "Middle Management",
        location: "Lahore",
        salary_range: "PKR 150,000 - 250,000",
        description: "Oversee daily branch operations, transaction processing, and cash \
                      management with a focus on service quality and controls.",
    },
    JobPosting {
        title: "Customer Relationship Officer",
        department: "Customer Service",
        level: "Officer",
        location: "Karachi",
        salary_range: "PKR 80,000 - 120,000",
        description: "Manage customer portfolios, resolve service issues, and cross-sell \
                      banking products to assigned relationships.",
    },
    JobPosting {
        title: "Credit Analyst",
        department: "Credit & Risk",
        level: "Officer",
        location: "Islamabad",
        salary_range: "PKR 120,000 - 180,000",
        description: "Assess creditworthiness of borrowers, prepare credit proposals, and \
                      monitor portfolio quality.",
    },
    JobPosting {
        title: "IT Officer",
        department: "Information Technology",
        level: "Officer",
        location: "Karachi",
        salary_range: "PKR 100,000 - 160,000",
        description: "Support core banking systems, branch infrastructure, and digital \
                      channel availability.",
    },
    JobPosting {
        title: "Risk Management Officer",
        department: "Credit & Risk",
        level: "Officer",
        location: "Karachi",
        salary_range: "PKR 130,000 - 200,000",
        description: "Identify, measure, and report operational and market risk exposures \
                      against approved limits.",
    },
    JobPosting {
        title: "Treasury Officer",
        department: "Treasury",
        level: "Officer",
        location: "Karachi",
        salary_range: "PKR 140,000 - 220,000",
        description: "Execute money market and foreign exchange transactions and manage \
                      daily liquidity positions.",
    },
    JobPosting {
        title: "Management Trainee Officer",
        department: "Human Resources",
        level: "Trainee",
        location: "Multiple Cities",
        salary_range: "PKR 70,000 - 90,000",
        description: "Rotational program across branch banking, operations, and head \
                      office functions for fresh graduates.",
    },
];
