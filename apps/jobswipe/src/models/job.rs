use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Seniority bucket inferred from a posting title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExperienceLevel {
    #[serde(rename = "Internship")]
    Internship,
    #[serde(rename = "Entry Level")]
    Entry,
    #[serde(rename = "Mid Level")]
    Mid,
    #[serde(rename = "Senior")]
    Senior,
}

impl ExperienceLevel {
    /// Case-insensitive keyword match on the title, first hit wins:
    /// intern > junior/entry > senior/lead > Mid Level.
    pub fn from_title(title: &str) -> Self {
        let t = title.to_lowercase();
        if t.contains("intern") {
            ExperienceLevel::Internship
        } else if t.contains("junior") || t.contains("entry") {
            ExperienceLevel::Entry
        } else if t.contains("senior") || t.contains("lead") {
            ExperienceLevel::Senior
        } else {
            ExperienceLevel::Mid
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobSourceTag {
    JSearch,
    Demo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: String,
    pub employment_type: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub benefits: Vec<String>,
    pub posted_date: NaiveDate,
    pub experience_level: ExperienceLevel,
    pub apply_url: Option<String>,
    pub source: JobSourceTag,
}

/// Status label carried by every recorded application.
pub const APPLICATION_STATUS: &str = "Ready to Apply";

/// A right-swiped posting recorded while auto-apply was on. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub application_id: String,
    #[serde(flatten)]
    pub job: JobPosting,
    pub ats_score: u8,
    pub applied_at: DateTime<Utc>,
    pub status: String,
}
