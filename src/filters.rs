use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::jobs::{ExperienceLevel, JobRecord, JobType};

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Discrete constraints applied on top of the text query.
/// Empty lists and `None` mean "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub job_type: Vec<JobType>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub experience_level: Vec<ExperienceLevel>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub industry: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_min: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_max: Option<u64>,
    /// Days
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posted_within: Option<i64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skills: Vec<String>,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        self.job_type.is_empty()
            && self.experience_level.is_empty()
            && self.industry.is_empty()
            && self.remote != Some(true)
            && self.location.as_deref().map_or(true, |l| l.trim().is_empty())
            && self.salary_min.is_none()
            && self.salary_max.is_none()
            && self.posted_within.is_none()
            && self.skills.is_empty()
    }
}

/// Whole days since `posted`, rounded up. Negative for future postings.
pub fn days_since(posted: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let secs = (now - posted).num_seconds();
    // ceiling division that also rounds negatives toward zero
    if secs > 0 {
        (secs + SECONDS_PER_DAY - 1) / SECONDS_PER_DAY
    } else {
        secs / SECONDS_PER_DAY
    }
}

pub fn matches_criteria(job: &JobRecord, criteria: &FilterCriteria, now: DateTime<Utc>) -> bool {
    if !criteria.job_type.is_empty() && !criteria.job_type.contains(&job.job_type) {
        return false;
    }

    if !criteria.experience_level.is_empty()
        && !criteria.experience_level.contains(&job.experience_level)
    {
        return false;
    }

    if !criteria.industry.is_empty() {
        let Some(industry) = job.industry.as_ref().map(|i| i.to_lowercase()) else {
            return false;
        };
        if !criteria
            .industry
            .iter()
            .any(|wanted| industry.contains(&wanted.to_lowercase()))
        {
            return false;
        }
    }

    if criteria.remote == Some(true) && !job.remote {
        return false;
    }

    if let Some(location) = &criteria.location {
        let location = location.trim().to_lowercase();
        if !location.is_empty() && !job.location.to_lowercase().contains(&location) {
            return false;
        }
    }

    // missing bounds on the job never disqualify it
    if let (Some(wanted_min), Some(job_max)) = (criteria.salary_min, job.salary_max) {
        if job_max < wanted_min {
            return false;
        }
    }
    if let (Some(wanted_max), Some(job_min)) = (criteria.salary_max, job.salary_min) {
        if job_min > wanted_max {
            return false;
        }
    }

    if let Some(days) = criteria.posted_within {
        if days_since(job.posted, now) > days {
            return false;
        }
    }

    if !criteria.skills.is_empty() {
        let job_skills: Vec<String> = job.skills.iter().map(|s| s.to_lowercase()).collect();
        if !criteria
            .skills
            .iter()
            .all(|skill| job_skills.contains(&skill.to_lowercase()))
        {
            return false;
        }
    }

    true
}

/// Apply criteria to jobs, preserving their order.
pub fn apply_filters<'a, I>(jobs: I, criteria: &FilterCriteria, now: DateTime<Utc>) -> Vec<&'a JobRecord>
where
    I: IntoIterator<Item = &'a JobRecord>,
{
    jobs.into_iter()
        .filter(|job| matches_criteria(job, criteria, now))
        .collect()
}
