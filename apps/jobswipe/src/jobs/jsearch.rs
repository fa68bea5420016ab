//! JSearch (RapidAPI) client and response mapping.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use super::{JobFeedError, JobSource, MAX_RESULTS};
use crate::models::{ExperienceLevel, JobPosting, JobSourceTag};

const DESCRIPTION_LIMIT: usize = 300;
const MISSING_SALARY: &str = "Competitive";
const MISSING_EMPLOYMENT_TYPE: &str = "Full-time";
const MISSING_DESCRIPTION: &str = "No description available";
const MISSING_REQUIREMENTS: &str = "See job posting for details";
const MISSING_LOCATION: &str = "Location not specified";

/// `data` is required; a 200 error envelope without it is a parse failure.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    data: Vec<RawJob>,
}

#[derive(Debug, Default, Deserialize)]
struct RawJob {
    job_id: Option<String>,
    job_title: Option<String>,
    employer_name: Option<String>,
    job_city: Option<String>,
    job_state: Option<String>,
    job_country: Option<String>,
    /// Seen as a string, a number, or null depending on the listing.
    job_salary: Option<Value>,
    job_employment_type: Option<String>,
    job_description: Option<String>,
    job_required_skills: Option<Vec<String>>,
    job_highlights: Option<Highlights>,
    job_posted_at_datetime_utc: Option<String>,
    job_apply_link: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct Highlights {
    #[serde(rename = "Benefits", default)]
    benefits: Vec<String>,
}

/// HTTP client for the JSearch search endpoint.
#[derive(Clone)]
pub struct JSearchClient {
    client: Client,
    base_url: String,
    api_host: String,
    api_key: Option<String>,
}

impl JSearchClient {
    pub fn new(
        base_url: String,
        api_host: String,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, JobFeedError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_host,
            api_key,
        })
    }
}

#[async_trait]
impl JobSource for JSearchClient {
    async fn search(&self, query: &str, location: &str) -> Result<Vec<JobPosting>, JobFeedError> {
        let api_key = self.api_key.as_deref().ok_or(JobFeedError::MissingApiKey)?;
        let search = format!("{query} in {location}");

        let response = self
            .client
            .get(format!("{}/search", self.base_url))
            .query(&[("query", search.as_str()), ("num_pages", "1")])
            .header("X-RapidAPI-Key", api_key)
            .header("X-RapidAPI-Host", &self.api_host)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(JobFeedError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        let parsed: SearchResponse = serde_json::from_str(&body)?;
        debug!("JSearch returned {} raw results", parsed.data.len());

        let today = Utc::now().date_naive();
        Ok(parsed
            .data
            .into_iter()
            .take(MAX_RESULTS)
            .enumerate()
            .map(|(i, raw)| map_job(raw, i, today))
            .collect())
    }
}

fn map_job(raw: RawJob, index: usize, today: NaiveDate) -> JobPosting {
    let title = raw.job_title.unwrap_or_default();

    JobPosting {
        id: raw.job_id.unwrap_or_else(|| format!("jsearch_{index}")),
        experience_level: ExperienceLevel::from_title(&title),
        title,
        company: raw.employer_name.unwrap_or_default(),
        location: format_location(
            raw.job_city.as_deref(),
            raw.job_state.as_deref(),
            raw.job_country.as_deref(),
        ),
        salary: format_salary(raw.job_salary),
        employment_type: non_blank(raw.job_employment_type)
            .unwrap_or_else(|| MISSING_EMPLOYMENT_TYPE.to_string()),
        description: non_blank(raw.job_description)
            .map(|d| truncate_description(&d))
            .unwrap_or_else(|| MISSING_DESCRIPTION.to_string()),
        requirements: raw
            .job_required_skills
            .unwrap_or_else(|| vec![MISSING_REQUIREMENTS.to_string()]),
        benefits: raw.job_highlights.map(|h| h.benefits).unwrap_or_default(),
        posted_date: raw
            .job_posted_at_datetime_utc
            .as_deref()
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|dt| dt.with_timezone(&Utc).date_naive())
            .unwrap_or(today),
        apply_url: non_blank(raw.job_apply_link),
        source: JobSourceTag::JSearch,
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// `"City, State"`, falling back to the country when no state is given.
fn format_location(city: Option<&str>, state: Option<&str>, country: Option<&str>) -> String {
    let region = state.filter(|s| !s.is_empty()).or(country);
    let parts: Vec<&str> = [city, region]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();

    if parts.is_empty() {
        MISSING_LOCATION.to_string()
    } else {
        parts.join(", ")
    }
}

fn format_salary(salary: Option<Value>) -> String {
    match salary {
        Some(Value::String(s)) if !s.trim().is_empty() => s,
        Some(Value::Number(n)) => n.to_string(),
        _ => MISSING_SALARY.to_string(),
    }
}

fn truncate_description(description: &str) -> String {
    if description.chars().count() <= DESCRIPTION_LIMIT {
        return description.to_string();
    }
    let cut: String = description.chars().take(DESCRIPTION_LIMIT).collect();
    format!("{cut}...")
}
