use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    filters::{self, FilterCriteria},
    jobs::JobRecord,
    pagination::{self, Page},
    search_query,
};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub query: Option<String>,

    #[serde(default)]
    pub criteria: FilterCriteria,

    #[serde(default)]
    pub page: Option<usize>,

    #[serde(default)]
    pub page_size: Option<usize>,
}

pub type SearchResponse = Page<JobRecord>;

/// Text query first, then structured criteria. Order of `jobs` is preserved.
pub fn search_jobs<'a>(
    jobs: &'a [JobRecord],
    query: Option<&str>,
    criteria: &FilterCriteria,
    now: DateTime<Utc>,
) -> Vec<&'a JobRecord> {
    let parsed = search_query::parse(query.unwrap_or_default());
    log::debug!("parsed query: {parsed:?}");

    let by_text = search_query::filter_by_query(jobs, &parsed);
    let found = if criteria.is_empty() {
        by_text
    } else {
        filters::apply_filters(by_text, criteria, now)
    };

    log::debug!("{} of {} jobs matched", found.len(), jobs.len());
    found
}

/// Search and paginate. Missing page defaults to 1, missing page size to
/// `default_page_size`.
pub fn search(
    jobs: &[JobRecord],
    request: &SearchRequest,
    default_page_size: usize,
    now: DateTime<Utc>,
) -> SearchResponse {
    let found = search_jobs(jobs, request.query.as_deref(), &request.criteria, now);

    pagination::paginate(
        found,
        request.page.unwrap_or(1),
        request.page_size.unwrap_or(default_page_size),
    )
    .map(JobRecord::clone)
}
