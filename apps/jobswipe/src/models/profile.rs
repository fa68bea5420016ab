use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Experience labels offered by the signup form, in display order.
pub const EXPERIENCE_OPTIONS: &[&str] = &["0-1", "1-3", "3-5", "5-10", "10+"];

/// Opaque handle to an uploaded resume. Only metadata is retained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeRef {
    pub id: Uuid,
    pub file_name: String,
    pub content_type: String,
    pub size_bytes: usize,
    pub uploaded_at: DateTime<Utc>,
}

/// Everything the user enters on the signup screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub location: String,
    pub job_title: String,
    /// One of `EXPERIENCE_OPTIONS`, or empty when not chosen.
    pub experience: String,
    /// Comma-separated, free text.
    pub skills: String,
    pub resume: Option<ResumeRef>,
    pub consent: bool,
    pub auto_apply: bool,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            location: String::new(),
            job_title: String::new(),
            experience: String::new(),
            skills: String::new(),
            resume: None,
            consent: false,
            auto_apply: true,
        }
    }
}

/// Editable subset of the profile. The resume is attached separately via upload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub skills: String,
    #[serde(default)]
    pub consent: bool,
    #[serde(default = "default_auto_apply")]
    pub auto_apply: bool,
}

fn default_auto_apply() -> bool {
    true
}

impl UserProfile {
    /// Overwrites every editable field, keeping the attached resume.
    pub fn apply_form(&mut self, form: ProfileForm) {
        self.name = form.name;
        self.email = form.email;
        self.phone = form.phone;
        self.location = form.location;
        self.job_title = form.job_title;
        self.experience = form.experience;
        self.skills = form.skills;
        self.consent = form.consent;
        self.auto_apply = form.auto_apply;
    }

    /// Lowercased, trimmed skill list. Blank entries are dropped so that they
    /// can never match as an empty substring.
    pub fn skill_list(&self) -> Vec<String> {
        self.skills
            .to_lowercase()
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// Lower bound of the experience range, in years.
    pub fn experience_years(&self) -> u32 {
        parse_experience_years(&self.experience)
    }
}

/// Leading-integer extraction on the part before the first `-`.
/// `"3-5"` → 3, `"10+"` → 10, anything unparseable → 0.
pub fn parse_experience_years(range: &str) -> u32 {
    let head = range.split('-').next().unwrap_or("").trim_start();
    let digits: String = head.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}
