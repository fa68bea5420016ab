//! Session Controller — owns the single `SwipeSession` and serializes every
//! transition behind one lock. The lock is never held across an `.await` on I/O.

use chrono::Utc;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, info};

use super::{
    resolve_drag, ApplyLauncher, DashboardSummary, Notice, Screen, SessionError, SwipeDirection,
    SwipeOutcome, SwipePhase, SwipeSession,
};
use crate::jobs::{load_jobs, JobSource};
use crate::matching::{MatchBreakdown, MatchScorer};
use crate::models::{Application, JobPosting, ProfileForm, ResumeRef, UserProfile};

/// Deliberate UX pauses around an auto-apply.
#[derive(Debug, Clone, Copy)]
pub struct UxTiming {
    /// How long the "applying" indicator stays up.
    pub apply_delay: Duration,
    /// How long the confirmation notice stays visible afterwards.
    pub notice_duration: Duration,
}

impl Default for UxTiming {
    fn default() -> Self {
        Self {
            apply_delay: Duration::from_millis(1000),
            notice_duration: Duration::from_millis(2000),
        }
    }
}

/// Metadata of an uploaded resume file.
#[derive(Debug, Clone)]
pub struct ResumeUpload {
    pub file_name: String,
    pub content_type: String,
    pub size_bytes: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct JobCard {
    #[serde(flatten)]
    pub job: JobPosting,
    pub match_score: u8,
    pub breakdown: MatchBreakdown,
}

/// Read-only snapshot handed to the front end.
#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub screen: Screen,
    pub phase: Option<SwipePhase>,
    pub current_job: Option<JobCard>,
    /// `"n of total"` while a posting is presented.
    pub position_label: Option<String>,
    pub applying: bool,
    pub notice: Option<Notice>,
    pub profile: UserProfile,
    pub applied_count: usize,
    pub saved_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SwipeKind {
    Skipped,
    Applied,
    Saved,
    Ignored,
    SnappedBack,
}

#[derive(Debug, Clone, Serialize)]
pub struct SwipeResult {
    pub outcome: SwipeKind,
    pub application: Option<Application>,
    pub saved: Option<JobPosting>,
    /// URL the client must open in a new tab, if any.
    pub open_url: Option<String>,
    pub view: SessionView,
}

#[derive(Clone)]
pub struct SessionController {
    session: Arc<Mutex<SwipeSession>>,
    source: Arc<dyn JobSource>,
    launcher: Arc<dyn ApplyLauncher>,
    scorer: Arc<dyn MatchScorer>,
    timing: UxTiming,
}

impl SessionController {
    pub fn new(
        source: Arc<dyn JobSource>,
        launcher: Arc<dyn ApplyLauncher>,
        scorer: Arc<dyn MatchScorer>,
        timing: UxTiming,
    ) -> Self {
        Self {
            session: Arc::new(Mutex::new(SwipeSession::new())),
            source,
            launcher,
            scorer,
            timing,
        }
    }

    pub async fn view(&self) -> SessionView {
        let session = self.session.lock().await;
        self.render(&session)
    }

    pub async fn start(&self) -> Result<SessionView, SessionError> {
        let mut session = self.session.lock().await;
        session.start()?;
        Ok(self.render(&session))
    }

    pub async fn update_profile(&self, form: ProfileForm) -> Result<SessionView, SessionError> {
        let mut session = self.session.lock().await;
        session.update_profile(form)?;
        Ok(self.render(&session))
    }

    pub async fn attach_resume(&self, upload: ResumeUpload) -> Result<ResumeRef, SessionError> {
        let mut session = self.session.lock().await;
        let resume = session.attach_resume(
            &upload.file_name,
            &upload.content_type,
            upload.size_bytes,
            Utc::now(),
        )?;
        info!("Attached resume '{}' ({} bytes)", resume.file_name, resume.size_bytes);
        Ok(resume.clone())
    }

    /// Signup → Swiping, kicking off the job fetch when the queue is empty.
    pub async fn signup(&self) -> Result<SessionView, SessionError> {
        let mut session = self.session.lock().await;
        session.submit_signup()?;
        self.enter_swiping(&mut session);
        Ok(self.render(&session))
    }

    pub async fn swipe(&self, direction: SwipeDirection) -> Result<SwipeResult, SessionError> {
        let mut session = self.session.lock().await;
        let outcome = session.swipe(direction, self.scorer.as_ref(), Utc::now())?;
        let view = self.render(&session);
        drop(session);

        let result = match outcome {
            SwipeOutcome::Skipped => SwipeResult {
                outcome: SwipeKind::Skipped,
                application: None,
                saved: None,
                open_url: None,
                view,
            },
            SwipeOutcome::Applied(application) => {
                if let Some(url) = &application.job.apply_url {
                    self.launcher.open(url);
                }
                self.schedule_apply_completion();
                SwipeResult {
                    outcome: SwipeKind::Applied,
                    open_url: application.job.apply_url.clone(),
                    application: Some(application),
                    saved: None,
                    view,
                }
            }
            SwipeOutcome::Saved(job) => SwipeResult {
                outcome: SwipeKind::Saved,
                application: None,
                saved: Some(job),
                open_url: None,
                view,
            },
            SwipeOutcome::Ignored => SwipeResult {
                outcome: SwipeKind::Ignored,
                application: None,
                saved: None,
                open_url: None,
                view,
            },
        };
        Ok(result)
    }

    /// Resolves a drag release; short drags snap back without a transition.
    pub async fn drag(&self, offset_px: f64) -> Result<SwipeResult, SessionError> {
        match resolve_drag(offset_px) {
            Some(direction) => self.swipe(direction).await,
            None => Ok(SwipeResult {
                outcome: SwipeKind::SnappedBack,
                application: None,
                saved: None,
                open_url: None,
                view: self.view().await,
            }),
        }
    }

    pub async fn open_dashboard(&self) -> Result<DashboardSummary, SessionError> {
        let mut session = self.session.lock().await;
        session.open_dashboard()?;
        Ok(session.dashboard())
    }

    /// Dashboard → Swiping. Re-issues the fetch if the queue is still empty.
    pub async fn back_to_jobs(&self) -> Result<SessionView, SessionError> {
        let mut session = self.session.lock().await;
        session.back_to_jobs()?;
        self.enter_swiping(&mut session);
        Ok(self.render(&session))
    }

    pub async fn dashboard(&self) -> DashboardSummary {
        self.session.lock().await.dashboard()
    }

    fn enter_swiping(&self, session: &mut SwipeSession) {
        if session.begin_fetch() {
            self.spawn_fetch(session.profile().clone());
        }
    }

    fn spawn_fetch(&self, profile: UserProfile) {
        let session = Arc::clone(&self.session);
        let source = Arc::clone(&self.source);
        tokio::spawn(async move {
            let jobs = load_jobs(source.as_ref(), &profile).await;
            debug!("Fetch resolved with {} postings", jobs.len());
            session.lock().await.complete_fetch(jobs);
        });
    }

    fn schedule_apply_completion(&self) {
        let session = Arc::clone(&self.session);
        let timing = self.timing;
        tokio::spawn(async move {
            tokio::time::sleep(timing.apply_delay).await;
            let notice_for = chrono::Duration::from_std(timing.notice_duration)
                .unwrap_or_else(|_| chrono::Duration::zero());
            session.lock().await.finish_applying(Utc::now(), notice_for);
        });
    }

    fn render(&self, session: &SwipeSession) -> SessionView {
        let profile = session.profile();
        let current_job = match session.phase() {
            Some(SwipePhase::Presenting) => session.current_job().map(|job| {
                let breakdown = self.scorer.breakdown(job, profile);
                JobCard {
                    job: job.clone(),
                    match_score: breakdown.total,
                    breakdown,
                }
            }),
            _ => None,
        };
        let position_label = current_job
            .as_ref()
            .map(|_| format!("{} of {}", session.position() + 1, session.queue_len()));

        SessionView {
            screen: session.screen(),
            phase: session.phase(),
            current_job,
            position_label,
            applying: session.is_applying(),
            notice: session.active_notice(Utc::now()).cloned(),
            profile: profile.clone(),
            applied_count: session.applied().len(),
            saved_count: session.saved().len(),
        }
    }
}
