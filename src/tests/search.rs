use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::filters::FilterCriteria;
use crate::jobs::{mock_jobs_at, JobRecord, JobType};
use crate::search::{search, search_jobs, SearchRequest};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 9, 30, 0).unwrap()
}

fn ids(jobs: &[&JobRecord]) -> Vec<u64> {
    jobs.iter().map(|j| j.id).collect()
}

fn query_ids(jobs: &[JobRecord], query: &str) -> Vec<u64> {
    ids(&search_jobs(jobs, Some(query), &FilterCriteria::default(), now()))
}

#[test]
fn test_empty_query_and_criteria_is_identity() {
    let jobs = mock_jobs_at(now());
    let all: Vec<u64> = jobs.iter().map(|j| j.id).collect();

    assert_eq!(ids(&search_jobs(&jobs, None, &FilterCriteria::default(), now())), all);
    assert_eq!(query_ids(&jobs, ""), all);
    assert_eq!(query_ids(&jobs, "   "), all);
}

#[test]
fn test_phrase_query() {
    let jobs = mock_jobs_at(now());
    assert_eq!(query_ids(&jobs, "\"product manager\""), vec![5]);
}

#[test]
fn test_required_and_excluded_terms() {
    let jobs = mock_jobs_at(now());
    // job 7 is a junior react developer
    assert_eq!(query_ids(&jobs, "developer +react -junior"), vec![1]);
    assert_eq!(query_ids(&jobs, "developer +react"), vec![1, 7]);
}

#[test]
fn test_or_query() {
    let jobs = mock_jobs_at(now());
    let found = query_ids(&jobs, "designer OR developer");
    assert_eq!(found, vec![1, 2, 7]);
    assert!(!found.contains(&5)); // product manager
}

#[test]
fn test_title_terms_always_match_unless_excluded() {
    let jobs = mock_jobs_at(now());
    for job in &jobs {
        for word in job.title.split_whitespace() {
            let found = query_ids(&jobs, word);
            assert!(found.contains(&job.id), "{word:?} should find job {}", job.id);

            let excluded = query_ids(&jobs, &format!("{word} -{word}"));
            assert!(!excluded.contains(&job.id));
        }
    }
}

#[test]
fn test_synonym_broadens_regular_term() {
    let jobs = mock_jobs_at(now());
    // "programmer" appears nowhere, but developer/engineer titles match
    let found = query_ids(&jobs, "programmer");
    assert!(found.contains(&1));
    assert!(found.contains(&3));
    assert!(!found.contains(&4));
}

#[test]
fn test_text_and_criteria_combine() {
    let jobs = mock_jobs_at(now());
    let criteria = FilterCriteria {
        remote: Some(true),
        job_type: vec![JobType::FullTime],
        ..Default::default()
    };
    let found = search_jobs(&jobs, Some("react"), &criteria, now());
    assert_eq!(ids(&found), vec![1]);
}

#[test]
fn test_posted_within_excludes_older_jobs() {
    let mut jobs = mock_jobs_at(now());
    jobs[0].posted = now() - Duration::days(5);
    let criteria = FilterCriteria {
        posted_within: Some(3),
        ..Default::default()
    };
    let found = ids(&search_jobs(&jobs, None, &criteria, now()));
    assert!(!found.contains(&1));
    assert!(found.contains(&3));
}

#[test]
fn test_search_paginates() {
    let jobs = mock_jobs_at(now());
    let request = SearchRequest {
        page: Some(2),
        page_size: Some(3),
        ..Default::default()
    };
    let page = search(&jobs, &request, 10, now());
    assert_eq!(page.items.iter().map(|j| j.id).collect::<Vec<_>>(), vec![4, 5, 6]);
    assert_eq!(page.total_results, 8);
    assert_eq!(page.total_pages, 3);
    assert!(page.has_next_page);
    assert!(page.has_previous_page);
}

#[test]
fn test_search_defaults_and_clamps_page() {
    let jobs = mock_jobs_at(now());
    let request = SearchRequest {
        query: Some("remote".to_string()),
        page: Some(0),
        ..Default::default()
    };
    let page = search(&jobs, &request, 10, now());
    assert_eq!(page.page, 1);
    assert_eq!(page.page_size, 10);
    assert!(!page.has_previous_page);
}

#[test]
fn test_search_request_from_json() {
    let request: SearchRequest = serde_json::from_str(
        r#"{"query": "engineer", "criteria": {"remote": true, "job_type": ["full-time"], "salary_min": 125000}}"#,
    )
    .unwrap();
    let jobs = mock_jobs_at(now());
    let page = search(&jobs, &request, 10, now());
    assert_eq!(page.items.iter().map(|j| j.id).collect::<Vec<_>>(), vec![3, 5, 8]);
}
