use chrono::{NaiveDate, NaiveDateTime};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Identifier assigned when an application is recorded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApplicationId(pub String);

impl ApplicationId {
    pub const PREFIX: &'static str = "APP";

    /// Fixed prefix, recording date, and a random four-digit suffix.
    /// Collisions are possible within a day and accepted at this scale.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, today: NaiveDate) -> Self {
        Self(format!(
            "{}-{}-{}",
            Self::PREFIX,
            today.format("%Y%m%d"),
            rng.gen_range(1000..10000)
        ))
    }
}

/// Candidate-supplied application fields, checked before a session opens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub national_id: String,
    pub position: String,
    pub department: String,
    pub education: String,
    pub experience: String,
    pub motivation: String,
    pub availability: String,
    #[serde(default)]
    pub salary_expectation: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("missing required field: {field}")]
pub struct ValidationError {
    pub field: &'static str,
}

impl ApplicationForm {
    /// Rejects the first required field that is empty or whitespace.
    /// `salary_expectation` is the only optional field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let required: [(&'static str, &str); 10] = [
            ("name", &self.name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("national_id", &self.national_id),
            ("position", &self.position),
            ("department", &self.department),
            ("education", &self.education),
            ("experience", &self.experience),
            ("motivation", &self.motivation),
            ("availability", &self.availability),
        ];

        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ValidationError { field });
            }
        }

        Ok(())
    }
}

/// A validated form plus its submission timestamp; what the sink persists
/// next to the assessment outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationProfile {
    pub form: ApplicationForm,
    pub submitted_at: NaiveDateTime,
}
