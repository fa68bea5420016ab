use chrono::NaiveDate;

use crate::models::{ExperienceLevel, JobPosting, JobSourceTag};

/// Static single-entry queue used whenever the live fetch is unavailable.
pub fn fallback_jobs(today: NaiveDate) -> Vec<JobPosting> {
    vec![JobPosting {
        id: "demo_1".to_string(),
        title: "Software Engineer".to_string(),
        company: "Tech Company".to_string(),
        location: "San Francisco, CA".to_string(),
        salary: "$100,000 - $150,000".to_string(),
        employment_type: "Full-time".to_string(),
        description: "Build amazing products with cutting-edge technology. \
                      Work with a talented team on challenging problems."
            .to_string(),
        requirements: vec![
            "Bachelor degree in CS".to_string(),
            "2+ years experience".to_string(),
            "JavaScript, React".to_string(),
        ],
        benefits: vec![
            "Health insurance".to_string(),
            "401k".to_string(),
            "Remote work".to_string(),
        ],
        posted_date: today,
        experience_level: ExperienceLevel::Mid,
        apply_url: Some("https://www.linkedin.com/jobs".to_string()),
        source: JobSourceTag::Demo,
    }]
}
