//! Swipe Session — the single owner of all per-user UI state.
//!
//! `SwipeSession` is a plain state machine: every mutation goes through one of
//! its transition methods and none of them perform I/O. Fetching, opening
//! apply URLs and UX delays live in `controller`.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

use crate::matching::MatchScorer;
use crate::models::{
    Application, JobPosting, ProfileForm, ResumeRef, UserProfile, APPLICATION_STATUS,
    EXPERIENCE_OPTIONS,
};

pub mod controller;
pub mod handlers;
pub mod launcher;

pub use controller::{SessionController, UxTiming};
pub use launcher::{ApplyLauncher, ClientLauncher};

pub const PDF_CONTENT_TYPE: &str = "application/pdf";
pub const CONFIRM_MESSAGE: &str = "Job Saved! Application page opened";
/// Horizontal drag distance beyond which a release counts as a swipe.
pub const DRAG_THRESHOLD_PX: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    Welcome,
    Signup,
    Swiping,
    Dashboard,
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Screen::Welcome => "welcome",
            Screen::Signup => "signup",
            Screen::Swiping => "swiping",
            Screen::Dashboard => "dashboard",
        };
        f.write_str(name)
    }
}

/// Sub-state of `Screen::Swiping`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwipePhase {
    Loading,
    Presenting,
    Exhausted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwipeDirection {
    Left,
    Right,
}

/// Maps a drag release offset to a swipe, or `None` to snap the card back.
pub fn resolve_drag(offset_px: f64) -> Option<SwipeDirection> {
    if offset_px.abs() <= DRAG_THRESHOLD_PX || offset_px.is_nan() {
        None
    } else if offset_px > 0.0 {
        Some(SwipeDirection::Right)
    } else {
        Some(SwipeDirection::Left)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignupField {
    Consent,
    Name,
    Email,
    JobTitle,
    Skills,
    Resume,
}

impl fmt::Display for SignupField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SignupField::Consent => "consent",
            SignupField::Name => "name",
            SignupField::Email => "email",
            SignupField::JobTitle => "job_title",
            SignupField::Skills => "skills",
            SignupField::Resume => "resume",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum SessionError {
    #[error("Please fill all required fields: {}", join_fields(.0))]
    MissingFields(Vec<SignupField>),

    #[error("Experience must be one of [{}], got '{}'", EXPERIENCE_OPTIONS.join(", "), .0)]
    InvalidExperience(String),

    #[error("Please upload a PDF file (got '{0}')")]
    InvalidResumeType(String),

    #[error("Cannot {action} from the {from} screen")]
    InvalidTransition { from: Screen, action: &'static str },
}

fn join_fields(fields: &[SignupField]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Transient confirmation shown after an application is opened.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notice {
    pub message: String,
    pub expires_at: DateTime<Utc>,
}

/// Result of a single swipe.
#[derive(Debug, Clone, PartialEq)]
pub enum SwipeOutcome {
    Skipped,
    Applied(Application),
    Saved(JobPosting),
    /// Nothing to swipe on: still loading or the queue is exhausted.
    Ignored,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub applied_count: usize,
    pub average_score: u8,
    pub saved_count: usize,
    pub applications: Vec<Application>,
}

#[derive(Debug)]
pub struct SwipeSession {
    screen: Screen,
    profile: UserProfile,
    jobs: Vec<JobPosting>,
    position: usize,
    fetch_in_flight: bool,
    applied: Vec<Application>,
    saved: Vec<JobPosting>,
    /// Applications whose "applying" pause has not elapsed yet.
    pending_applies: u32,
    notice: Option<Notice>,
    application_seq: u64,
}

impl Default for SwipeSession {
    fn default() -> Self {
        Self::new()
    }
}

impl SwipeSession {
    pub fn new() -> Self {
        Self {
            screen: Screen::Welcome,
            profile: UserProfile::default(),
            jobs: Vec::new(),
            position: 0,
            fetch_in_flight: false,
            applied: Vec::new(),
            saved: Vec::new(),
            pending_applies: 0,
            notice: None,
            application_seq: 0,
        }
    }

    // ── Accessors ───────────────────────────────────────────────────────────

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// `None` outside the swiping screen.
    pub fn phase(&self) -> Option<SwipePhase> {
        if self.screen != Screen::Swiping {
            return None;
        }
        Some(if self.fetch_in_flight {
            SwipePhase::Loading
        } else if self.position < self.jobs.len() {
            SwipePhase::Presenting
        } else {
            SwipePhase::Exhausted
        })
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn current_job(&self) -> Option<&JobPosting> {
        if self.fetch_in_flight {
            return None;
        }
        self.jobs.get(self.position)
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn queue_len(&self) -> usize {
        self.jobs.len()
    }

    pub fn applied(&self) -> &[Application] {
        &self.applied
    }

    pub fn saved(&self) -> &[JobPosting] {
        &self.saved
    }

    pub fn is_applying(&self) -> bool {
        self.pending_applies > 0
    }

    pub fn active_notice(&self, now: DateTime<Utc>) -> Option<&Notice> {
        self.notice.as_ref().filter(|n| now < n.expires_at)
    }

    // ── Transitions ─────────────────────────────────────────────────────────

    /// Welcome → Signup.
    pub fn start(&mut self) -> Result<(), SessionError> {
        self.expect_screen(&[Screen::Welcome], "start signup")?;
        self.screen = Screen::Signup;
        info!("Session moved to {}", self.screen);
        Ok(())
    }

    pub fn update_profile(&mut self, form: ProfileForm) -> Result<(), SessionError> {
        self.expect_screen(
            &[Screen::Signup, Screen::Swiping, Screen::Dashboard],
            "edit the profile",
        )?;
        self.profile.apply_form(form);
        Ok(())
    }

    /// Attaches an uploaded resume. Non-PDF uploads leave the current reference untouched.
    pub fn attach_resume(
        &mut self,
        file_name: &str,
        content_type: &str,
        size_bytes: usize,
        now: DateTime<Utc>,
    ) -> Result<&ResumeRef, SessionError> {
        self.expect_screen(
            &[Screen::Signup, Screen::Swiping, Screen::Dashboard],
            "upload a resume",
        )?;
        if !is_pdf(content_type) {
            return Err(SessionError::InvalidResumeType(content_type.to_string()));
        }
        let resume = self.profile.resume.insert(ResumeRef {
            id: Uuid::new_v4(),
            file_name: file_name.to_string(),
            content_type: PDF_CONTENT_TYPE.to_string(),
            size_bytes,
            uploaded_at: now,
        });
        Ok(&*resume)
    }

    /// Signup → Swiping, guarded by consent and the required fields.
    pub fn submit_signup(&mut self) -> Result<(), SessionError> {
        self.expect_screen(&[Screen::Signup], "sign up")?;

        let missing = missing_signup_fields(&self.profile);
        if !missing.is_empty() {
            return Err(SessionError::MissingFields(missing));
        }
        let experience = &self.profile.experience;
        if !experience.is_empty() && !EXPERIENCE_OPTIONS.contains(&experience.as_str()) {
            return Err(SessionError::InvalidExperience(experience.clone()));
        }

        self.screen = Screen::Swiping;
        info!("Session moved to {}", self.screen);
        Ok(())
    }

    /// Marks a fetch as outstanding when swiping with an empty queue.
    /// Returns `true` if the caller must now issue the fetch.
    pub fn begin_fetch(&mut self) -> bool {
        if self.screen != Screen::Swiping || !self.jobs.is_empty() || self.fetch_in_flight {
            return false;
        }
        self.fetch_in_flight = true;
        true
    }

    pub fn complete_fetch(&mut self, jobs: Vec<JobPosting>) {
        self.fetch_in_flight = false;
        if self.jobs.is_empty() {
            self.jobs = jobs;
            self.position = 0;
        }
    }

    /// Handles one swipe on the current posting. Every swipe that acts on a
    /// posting advances the position by exactly one.
    pub fn swipe(
        &mut self,
        direction: SwipeDirection,
        scorer: &dyn MatchScorer,
        now: DateTime<Utc>,
    ) -> Result<SwipeOutcome, SessionError> {
        self.expect_screen(&[Screen::Swiping], "swipe")?;

        let Some(job) = self.current_job().cloned() else {
            return Ok(SwipeOutcome::Ignored);
        };

        let outcome = match direction {
            SwipeDirection::Left => SwipeOutcome::Skipped,
            SwipeDirection::Right if self.profile.auto_apply => {
                let application = Application {
                    application_id: self.next_application_id(now),
                    ats_score: scorer.score(&job, &self.profile),
                    applied_at: now,
                    status: APPLICATION_STATUS.to_string(),
                    job,
                };
                info!(
                    "Recorded application {} for '{}' (score {})",
                    application.application_id, application.job.title, application.ats_score
                );
                self.applied.push(application.clone());
                self.pending_applies += 1;
                SwipeOutcome::Applied(application)
            }
            SwipeDirection::Right => {
                self.saved.push(job.clone());
                SwipeOutcome::Saved(job)
            }
        };

        self.position += 1;
        Ok(outcome)
    }

    /// Completes one application's pause and shows the confirmation notice.
    /// The indicator stays up until the last pending application completes.
    pub fn finish_applying(&mut self, now: DateTime<Utc>, notice_for: Duration) {
        self.pending_applies = self.pending_applies.saturating_sub(1);
        self.notice = Some(Notice {
            message: CONFIRM_MESSAGE.to_string(),
            expires_at: now + notice_for,
        });
    }

    /// Swiping → Dashboard.
    pub fn open_dashboard(&mut self) -> Result<(), SessionError> {
        self.expect_screen(&[Screen::Swiping, Screen::Dashboard], "open the dashboard")?;
        self.screen = Screen::Dashboard;
        info!("Session moved to {}", self.screen);
        Ok(())
    }

    /// Dashboard → Swiping.
    pub fn back_to_jobs(&mut self) -> Result<(), SessionError> {
        self.expect_screen(&[Screen::Dashboard, Screen::Swiping], "return to jobs")?;
        self.screen = Screen::Swiping;
        info!("Session moved to {}", self.screen);
        Ok(())
    }

    pub fn dashboard(&self) -> DashboardSummary {
        let applied_count = self.applied.len();
        let average_score = if applied_count == 0 {
            0
        } else {
            let total: u32 = self.applied.iter().map(|a| a.ats_score as u32).sum();
            (total as f64 / applied_count as f64).round() as u8
        };

        DashboardSummary {
            applied_count,
            average_score,
            saved_count: self.saved.len(),
            applications: self.applied.clone(),
        }
    }

    fn expect_screen(&self, allowed: &[Screen], action: &'static str) -> Result<(), SessionError> {
        if allowed.contains(&self.screen) {
            Ok(())
        } else {
            Err(SessionError::InvalidTransition {
                from: self.screen,
                action,
            })
        }
    }

    fn next_application_id(&mut self, now: DateTime<Utc>) -> String {
        self.application_seq += 1;
        format!("APP-{}-{}", now.timestamp_millis(), self.application_seq)
    }
}

fn missing_signup_fields(profile: &UserProfile) -> Vec<SignupField> {
    let mut missing = Vec::new();
    if !profile.consent {
        missing.push(SignupField::Consent);
    }
    let text_fields = [
        (SignupField::Name, &profile.name),
        (SignupField::Email, &profile.email),
        (SignupField::JobTitle, &profile.job_title),
        (SignupField::Skills, &profile.skills),
    ];
    for (field, value) in text_fields {
        if value.trim().is_empty() {
            missing.push(field);
        }
    }
    if profile.resume.is_none() {
        missing.push(SignupField::Resume);
    }
    missing
}

/// Compares the MIME essence, ignoring case and parameters.
fn is_pdf(content_type: &str) -> bool {
    content_type
        .split(';')
        .next()
        .map(|essence| essence.trim().eq_ignore_ascii_case(PDF_CONTENT_TYPE))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jobs::fallback_jobs;
    use crate::matching::WeightedMatchScorer;
    use crate::models::{ExperienceLevel, JobSourceTag};
    use chrono::{NaiveDate, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    fn job(id: &str, title: &str) -> JobPosting {
        JobPosting {
            id: id.to_string(),
            title: title.to_string(),
            company: "Acme".to_string(),
            location: "Remote".to_string(),
            salary: "Competitive".to_string(),
            employment_type: "Full-time".to_string(),
            description: "Rust and SQL".to_string(),
            requirements: vec![],
            benefits: vec![],
            posted_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            experience_level: ExperienceLevel::from_title(title),
            apply_url: Some(format!("https://jobs.example.com/{id}")),
            source: JobSourceTag::JSearch,
        }
    }

    fn complete_form() -> ProfileForm {
        ProfileForm {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: String::new(),
            location: "Remote".to_string(),
            job_title: "Engineer".to_string(),
            experience: "3-5".to_string(),
            skills: "rust, sql".to_string(),
            consent: true,
            auto_apply: true,
        }
    }

    fn signup_session(auto_apply: bool) -> SwipeSession {
        let mut session = SwipeSession::new();
        session.start().unwrap();
        session
            .update_profile(ProfileForm {
                auto_apply,
                ..complete_form()
            })
            .unwrap();
        session
            .attach_resume("cv.pdf", PDF_CONTENT_TYPE, 1024, now())
            .unwrap();
        session.submit_signup().unwrap();
        session
    }

    fn swiping_session(auto_apply: bool, jobs: Vec<JobPosting>) -> SwipeSession {
        let mut session = signup_session(auto_apply);
        assert!(session.begin_fetch());
        session.complete_fetch(jobs);
        session
    }

    #[test]
    fn test_new_session_starts_on_welcome() {
        let session = SwipeSession::new();
        assert_eq!(session.screen(), Screen::Welcome);
        assert_eq!(session.phase(), None);
        assert!(session.profile().auto_apply);
    }

    #[test]
    fn test_start_only_from_welcome() {
        let mut session = SwipeSession::new();
        session.start().unwrap();
        assert_eq!(session.screen(), Screen::Signup);
        assert!(matches!(
            session.start(),
            Err(SessionError::InvalidTransition { from: Screen::Signup, .. })
        ));
    }

    fn form_without(field: SignupField) -> ProfileForm {
        let mut form = complete_form();
        match field {
            SignupField::Consent => form.consent = false,
            SignupField::Name => form.name.clear(),
            SignupField::Email => form.email.clear(),
            SignupField::JobTitle => form.job_title.clear(),
            SignupField::Skills => form.skills = "  ".to_string(),
            SignupField::Resume => {}
        }
        form
    }

    #[test]
    fn test_signup_rejected_for_each_single_missing_field() {
        let form_fields = [
            SignupField::Consent,
            SignupField::Name,
            SignupField::Email,
            SignupField::JobTitle,
            SignupField::Skills,
        ];

        for field in form_fields {
            let mut session = SwipeSession::new();
            session.start().unwrap();
            session.update_profile(form_without(field)).unwrap();
            session
                .attach_resume("cv.pdf", PDF_CONTENT_TYPE, 10, now())
                .unwrap();

            assert_eq!(
                session.submit_signup(),
                Err(SessionError::MissingFields(vec![field]))
            );
            assert_eq!(session.screen(), Screen::Signup);
        }

        // Resume is attached separately.
        let mut session = SwipeSession::new();
        session.start().unwrap();
        session.update_profile(complete_form()).unwrap();
        assert_eq!(
            session.submit_signup(),
            Err(SessionError::MissingFields(vec![SignupField::Resume]))
        );
        assert_eq!(session.screen(), Screen::Signup);
    }

    #[test]
    fn test_missing_fields_message_lists_fields() {
        let err = SessionError::MissingFields(vec![SignupField::Name, SignupField::Resume]);
        assert_eq!(
            err.to_string(),
            "Please fill all required fields: name, resume"
        );
    }

    #[test]
    fn test_signup_rejects_unknown_experience() {
        let mut session = SwipeSession::new();
        session.start().unwrap();
        session
            .update_profile(ProfileForm {
                experience: "forever".to_string(),
                ..complete_form()
            })
            .unwrap();
        session
            .attach_resume("cv.pdf", PDF_CONTENT_TYPE, 10, now())
            .unwrap();
        assert_eq!(
            session.submit_signup(),
            Err(SessionError::InvalidExperience("forever".to_string()))
        );
    }

    #[test]
    fn test_signup_allows_blank_experience() {
        let mut session = SwipeSession::new();
        session.start().unwrap();
        session
            .update_profile(ProfileForm {
                experience: String::new(),
                ..complete_form()
            })
            .unwrap();
        session
            .attach_resume("cv.pdf", PDF_CONTENT_TYPE, 10, now())
            .unwrap();
        assert!(session.submit_signup().is_ok());
    }

    #[test]
    fn test_non_pdf_resume_rejected_and_reference_unchanged() {
        let mut session = SwipeSession::new();
        session.start().unwrap();
        let err = session
            .attach_resume("cv.docx", "application/msword", 10, now())
            .unwrap_err();
        assert!(matches!(err, SessionError::InvalidResumeType(_)));
        assert!(session.profile().resume.is_none());

        let first = session
            .attach_resume("cv.pdf", "Application/PDF; name=cv.pdf", 10, now())
            .unwrap()
            .clone();
        assert!(session.attach_resume("cv.png", "image/png", 5, now()).is_err());
        assert_eq!(session.profile().resume.as_ref(), Some(&first));
    }

    #[test]
    fn test_begin_fetch_only_once_while_in_flight() {
        let mut session = signup_session(true);
        assert_eq!(session.phase(), Some(SwipePhase::Exhausted));
        assert!(session.begin_fetch());
        assert_eq!(session.phase(), Some(SwipePhase::Loading));
        assert!(!session.begin_fetch());
        session.complete_fetch(vec![job("a", "Engineer")]);
        assert_eq!(session.phase(), Some(SwipePhase::Presenting));
        assert!(!session.begin_fetch());
    }

    #[test]
    fn test_swipes_ignored_while_loading() {
        let mut session = signup_session(true);
        session.begin_fetch();
        let scorer = WeightedMatchScorer::default();
        assert_eq!(
            session.swipe(SwipeDirection::Right, &scorer, now()).unwrap(),
            SwipeOutcome::Ignored
        );
        assert!(session.applied().is_empty());
        assert_eq!(session.position(), 0);
    }

    #[test]
    fn test_swipe_left_only_advances() {
        let mut session = swiping_session(true, vec![job("a", "Engineer"), job("b", "Engineer")]);
        let scorer = WeightedMatchScorer::default();

        let outcome = session.swipe(SwipeDirection::Left, &scorer, now()).unwrap();
        assert_eq!(outcome, SwipeOutcome::Skipped);
        assert_eq!(session.position(), 1);
        assert!(session.applied().is_empty());
        assert!(session.saved().is_empty());
        assert_eq!(session.current_job().map(|j| j.id.as_str()), Some("b"));
    }

    #[test]
    fn test_swipe_right_with_auto_apply_records_application() {
        let mut session = swiping_session(true, vec![job("a", "Software Engineer")]);
        let scorer = WeightedMatchScorer::default();

        let outcome = session.swipe(SwipeDirection::Right, &scorer, now()).unwrap();
        let SwipeOutcome::Applied(application) = outcome else {
            panic!("expected an application");
        };
        assert_eq!(application.job.id, "a");
        assert_eq!(application.ats_score, 100);
        assert_eq!(application.status, APPLICATION_STATUS);
        assert_eq!(application.applied_at, now());
        assert!(application.application_id.starts_with("APP-"));
        assert_eq!(session.applied().len(), 1);
        assert!(session.saved().is_empty());
        assert!(session.is_applying());
        assert_eq!(session.position(), 1);
    }

    #[test]
    fn test_swipe_right_without_auto_apply_saves_only() {
        let mut session = swiping_session(false, vec![job("a", "Engineer")]);
        let scorer = WeightedMatchScorer::default();

        let outcome = session.swipe(SwipeDirection::Right, &scorer, now()).unwrap();
        assert!(matches!(outcome, SwipeOutcome::Saved(ref j) if j.id == "a"));
        assert!(session.applied().is_empty());
        assert_eq!(session.saved().len(), 1);
        assert!(!session.is_applying());
    }

    #[test]
    fn test_application_ids_unique_within_same_millisecond() {
        let jobs = vec![job("a", "Engineer"), job("b", "Engineer"), job("c", "Engineer")];
        let mut session = swiping_session(true, jobs);
        let scorer = WeightedMatchScorer::default();
        for _ in 0..3 {
            session.swipe(SwipeDirection::Right, &scorer, now()).unwrap();
        }
        let ids: std::collections::HashSet<_> = session
            .applied()
            .iter()
            .map(|a| a.application_id.clone())
            .collect();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn test_exhausted_queue_ignores_swipes() {
        let mut session = swiping_session(true, vec![job("a", "Engineer")]);
        let scorer = WeightedMatchScorer::default();
        session.swipe(SwipeDirection::Left, &scorer, now()).unwrap();
        assert_eq!(session.phase(), Some(SwipePhase::Exhausted));

        for direction in [SwipeDirection::Left, SwipeDirection::Right] {
            assert_eq!(
                session.swipe(direction, &scorer, now()).unwrap(),
                SwipeOutcome::Ignored
            );
        }
        assert_eq!(session.position(), 1);
        assert!(session.applied().is_empty());

        session.open_dashboard().unwrap();
        assert_eq!(session.screen(), Screen::Dashboard);
    }

    #[test]
    fn test_dashboard_round_trip_keeps_position_and_lists() {
        let mut session = swiping_session(true, vec![job("a", "Engineer"), job("b", "Engineer")]);
        let scorer = WeightedMatchScorer::default();
        session.swipe(SwipeDirection::Right, &scorer, now()).unwrap();

        session.open_dashboard().unwrap();
        assert!(session.swipe(SwipeDirection::Left, &scorer, now()).is_err());
        assert!(!session.begin_fetch());
        session.back_to_jobs().unwrap();

        assert_eq!(session.position(), 1);
        assert_eq!(session.applied().len(), 1);
        assert_eq!(session.current_job().map(|j| j.id.as_str()), Some("b"));
    }

    #[test]
    fn test_complete_fetch_does_not_clobber_existing_queue() {
        let mut session = swiping_session(true, vec![job("a", "Engineer")]);
        session.complete_fetch(fallback_jobs(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()));
        assert_eq!(session.queue_len(), 1);
        assert_eq!(session.current_job().map(|j| j.id.as_str()), Some("a"));
    }

    #[test]
    fn test_dashboard_average_rounds() {
        let mut session = swiping_session(
            true,
            vec![job("a", "Software Engineer"), job("b", "Data Scientist")],
        );
        let scorer = WeightedMatchScorer::default();
        session.swipe(SwipeDirection::Right, &scorer, now()).unwrap();
        session.swipe(SwipeDirection::Right, &scorer, now()).unwrap();

        let summary = session.dashboard();
        assert_eq!(summary.applied_count, 2);
        // 100 and 90 (title miss) → 95
        assert_eq!(summary.average_score, 95);
        assert_eq!(summary.saved_count, 0);
        assert_eq!(summary.applications[0].job.id, "a");
    }

    #[test]
    fn test_applying_stays_up_until_last_application_completes() {
        let jobs = vec![job("a", "Engineer"), job("b", "Engineer")];
        let mut session = swiping_session(true, jobs);
        let scorer = WeightedMatchScorer::default();

        session.swipe(SwipeDirection::Right, &scorer, now()).unwrap();
        session.swipe(SwipeDirection::Right, &scorer, now()).unwrap();

        session.finish_applying(now(), Duration::milliseconds(2000));
        assert!(session.is_applying());
        session.finish_applying(now(), Duration::milliseconds(2000));
        assert!(!session.is_applying());
    }

    #[test]
    fn test_empty_dashboard_average_is_zero() {
        assert_eq!(SwipeSession::new().dashboard().average_score, 0);
    }

    #[test]
    fn test_notice_expires() {
        let mut session = swiping_session(true, vec![job("a", "Engineer")]);
        session.finish_applying(now(), Duration::milliseconds(2000));
        assert!(!session.is_applying());
        assert_eq!(
            session.active_notice(now()).map(|n| n.message.as_str()),
            Some(CONFIRM_MESSAGE)
        );
        assert!(session
            .active_notice(now() + Duration::milliseconds(1999))
            .is_some());
        assert!(session
            .active_notice(now() + Duration::milliseconds(2000))
            .is_none());
    }

    #[test]
    fn test_resolve_drag_threshold() {
        assert_eq!(resolve_drag(150.0), Some(SwipeDirection::Right));
        assert_eq!(resolve_drag(-101.0), Some(SwipeDirection::Left));
        assert_eq!(resolve_drag(100.0), None);
        assert_eq!(resolve_drag(-40.0), None);
        assert_eq!(resolve_drag(f64::NAN), None);
    }
}
