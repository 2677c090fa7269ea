use super::parser::ParsedQuery;
use super::synonyms::synonyms_for;
use crate::jobs::JobRecord;

/// Regular terms up to this many chars match any job.
const AUTO_PASS_MAX_CHARS: usize = 2;

pub fn eval(query: &ParsedQuery, job: &JobRecord) -> bool {
    eval_text(query, &job.searchable_text())
}

/// `text` must already be lowercased.
pub fn eval_text(query: &ParsedQuery, text: &str) -> bool {
    let contains = |term: &String| text.contains(&term.to_lowercase());

    if query.excluded_terms.iter().any(contains) {
        return false;
    }

    if !query.required_terms.iter().all(contains) {
        return false;
    }

    if !query.or_terms.is_empty() {
        return query.or_terms.iter().any(contains);
    }

    query
        .regular_terms
        .iter()
        .all(|term| eval_regular_term(term, text))
}

fn eval_regular_term(term: &str, text: &str) -> bool {
    if term.chars().count() <= AUTO_PASS_MAX_CHARS {
        return true;
    }

    let term_lower = term.to_lowercase();
    text.contains(&term_lower)
        || synonyms_for(&term_lower)
            .iter()
            .any(|synonym| text.contains(synonym))
}

/// Stable filter: keeps matching jobs in their original order.
pub fn filter_by_query<'a>(jobs: &'a [JobRecord], query: &ParsedQuery) -> Vec<&'a JobRecord> {
    if query.is_empty() {
        return jobs.iter().collect();
    }
    jobs.iter().filter(|job| eval(query, job)).collect()
}
