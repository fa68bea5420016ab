//! Job Feed — the only place that talks to the job-search API.
//!
//! Fetch failures never escape this module as user-facing errors: `load_jobs`
//! logs them and substitutes the demo data set.

use async_trait::async_trait;
use chrono::Utc;
use thiserror::Error;
use tracing::{info, warn};

use crate::models::{JobPosting, UserProfile};

pub mod fallback;
pub mod jsearch;

pub use fallback::fallback_jobs;
pub use jsearch::JSearchClient;

/// Upper bound on postings kept from a single search page.
pub const MAX_RESULTS: usize = 20;
pub const DEFAULT_QUERY: &str = "software engineer";
pub const DEFAULT_LOCATION: &str = "remote";

#[derive(Debug, Error)]
pub enum JobFeedError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("No API key configured")]
    MissingApiKey,
}

/// A source of job postings. Swapped for a stub in tests.
#[async_trait]
pub trait JobSource: Send + Sync {
    async fn search(&self, query: &str, location: &str) -> Result<Vec<JobPosting>, JobFeedError>;
}

/// Fetches postings for the profile, degrading to the demo set on any failure.
pub async fn load_jobs(source: &dyn JobSource, profile: &UserProfile) -> Vec<JobPosting> {
    let query = non_empty_or(&profile.job_title, DEFAULT_QUERY);
    let location = non_empty_or(&profile.location, DEFAULT_LOCATION);

    match source.search(query, location).await {
        Ok(jobs) => {
            info!("Loaded {} jobs for '{query}' in '{location}'", jobs.len());
            jobs
        }
        Err(e) => {
            warn!("Job fetch failed, using demo jobs: {e}");
            fallback_jobs(Utc::now().date_naive())
        }
    }
}

fn non_empty_or<'a>(value: &'a str, default: &'a str) -> &'a str {
    if value.trim().is_empty() {
        default
    } else {
        value
    }
}
