pub mod job;
pub mod profile;

pub use job::{Application, ExperienceLevel, JobPosting, JobSourceTag, APPLICATION_STATUS};
pub use profile::{ProfileForm, ResumeRef, UserProfile, EXPERIENCE_OPTIONS};
