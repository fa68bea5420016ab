//! Job Matcher — scores a posting against a profile on a 0–100 scale.
//!
//! Default: `WeightedMatchScorer` (pure, deterministic, no I/O).
//!
//! `AppState` carries an `Arc<dyn MatchScorer>` so the session never depends on
//! a concrete scorer.

use serde::{Deserialize, Serialize};

use crate::models::{ExperienceLevel, JobPosting, UserProfile};

// ────────────────────────────────────────────────────────────────────────────
// Tuning constants
// ────────────────────────────────────────────────────────────────────────────

/// Inclusive year bands that count as a fit for each experience level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExperienceBands {
    pub internship_max: u32,
    pub entry_max: u32,
    pub mid_min: u32,
    pub mid_max: u32,
    pub senior_min: u32,
}

/// Points per scoring term. Skill points are scaled by the match ratio.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchWeights {
    pub skills: f64,
    pub experience_fit: f64,
    pub experience_miss: f64,
    pub title_match: f64,
    pub title_miss: f64,
    pub location_match: f64,
    pub bands: ExperienceBands,
}

impl MatchWeights {
    pub const DEFAULT: MatchWeights = MatchWeights {
        skills: 40.0,
        experience_fit: 30.0,
        experience_miss: 15.0,
        title_match: 20.0,
        title_miss: 10.0,
        location_match: 10.0,
        bands: ExperienceBands {
            internship_max: 0,
            entry_max: 2,
            mid_min: 3,
            mid_max: 7,
            senior_min: 5,
        },
    };
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self::DEFAULT
    }
}

pub const MAX_SCORE: u8 = 100;

// ────────────────────────────────────────────────────────────────────────────
// Output
// ────────────────────────────────────────────────────────────────────────────

/// Per-term contributions plus the rounded, clamped total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchBreakdown {
    pub skills: f64,
    pub matched_skills: Vec<String>,
    pub experience: f64,
    pub title: f64,
    pub location: f64,
    pub total: u8,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Implement this to swap scoring backends without touching the session.
pub trait MatchScorer: Send + Sync {
    fn breakdown(&self, job: &JobPosting, profile: &UserProfile) -> MatchBreakdown;

    fn score(&self, job: &JobPosting, profile: &UserProfile) -> u8 {
        self.breakdown(job, profile).total
    }
}

/// Weighted keyword scorer used by default.
#[derive(Debug, Clone, Default)]
pub struct WeightedMatchScorer {
    pub weights: MatchWeights,
}

impl MatchScorer for WeightedMatchScorer {
    fn breakdown(&self, job: &JobPosting, profile: &UserProfile) -> MatchBreakdown {
        compute_breakdown(job, profile, &self.weights)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core algorithm
// ────────────────────────────────────────────────────────────────────────────

pub fn compute_breakdown(
    job: &JobPosting,
    profile: &UserProfile,
    weights: &MatchWeights,
) -> MatchBreakdown {
    let skills = profile.skill_list();
    let haystack = format!("{} {}", job.title, job.description).to_lowercase();

    let matched_skills: Vec<String> = skills
        .iter()
        .filter(|skill| haystack.contains(skill.as_str()))
        .cloned()
        .collect();

    let denominator = skills.len().max(1) as f64;
    let skills_points = weights.skills * (matched_skills.len() as f64 / denominator);

    let experience_points = if experience_fits(
        job.experience_level,
        profile.experience_years(),
        &weights.bands,
    ) {
        weights.experience_fit
    } else {
        weights.experience_miss
    };

    let title_points = if job
        .title
        .to_lowercase()
        .contains(&profile.job_title.to_lowercase())
    {
        weights.title_match
    } else {
        weights.title_miss
    };

    let location_points = if location_fits(&job.location, &profile.location) {
        weights.location_match
    } else {
        0.0
    };

    let sum = skills_points + experience_points + title_points + location_points;
    let total = sum.round().clamp(0.0, MAX_SCORE as f64) as u8;

    MatchBreakdown {
        skills: skills_points,
        matched_skills,
        experience: experience_points,
        title: title_points,
        location: location_points,
        total,
    }
}

fn experience_fits(level: ExperienceLevel, years: u32, bands: &ExperienceBands) -> bool {
    match level {
        ExperienceLevel::Internship => years <= bands.internship_max,
        ExperienceLevel::Entry => years <= bands.entry_max,
        ExperienceLevel::Mid => (bands.mid_min..=bands.mid_max).contains(&years),
        ExperienceLevel::Senior => years >= bands.senior_min,
    }
}

fn location_fits(job_location: &str, profile_location: &str) -> bool {
    let job_location = job_location.to_lowercase();
    let profile_location = profile_location.to_lowercase();

    job_location.contains(&profile_location)
        || profile_location.contains("remote")
        || job_location.contains("remote")
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
