use once_cell::sync::Lazy;
use std::collections::{BTreeMap, HashMap};

const SYNONYM_ENTRIES: &[(&str, &[&str])] = &[
    ("developer", &["development", "engineer", "programmer", "coder", "software"]),
    ("engineer", &["engineering", "developer", "programmer"]),
    ("programmer", &["developer", "engineer", "coder"]),
    ("designer", &["design", "user experience", "user interface", "creative"]),
    ("manager", &["management", "lead", "director"]),
    ("analyst", &["analysis", "analytics", "data"]),
    ("frontend", &["front-end", "front end", "react", "vue", "angular"]),
    ("backend", &["back-end", "back end", "server", "api"]),
    ("fullstack", &["full-stack", "full stack"]),
    ("intern", &["internship", "trainee", "graduate"]),
    ("marketing", &["marketer", "growth", "brand", "campaign"]),
    ("sales", &["business development", "account executive"]),
    ("remote", &["work from home", "wfh", "distributed"]),
    ("startup", &["start-up", "early stage"]),
    ("javascript", &["typescript", "node.js", "ecmascript"]),
    ("machine learning", &["artificial intelligence", "deep learning", "data science"]),
    ("executive", &["chief", "cto", "ceo", "vice president"]),
];

static SYNONYMS: Lazy<HashMap<&'static str, &'static [&'static str]>> =
    Lazy::new(|| SYNONYM_ENTRIES.iter().copied().collect());

/// Related terms for `term` (case-insensitive); empty when there are none.
pub fn synonyms_for(term: &str) -> &'static [&'static str] {
    SYNONYMS
        .get(term.to_lowercase().as_str())
        .copied()
        .unwrap_or(&[])
}

/// Whole table, sorted by canonical term.
pub fn table() -> BTreeMap<&'static str, &'static [&'static str]> {
    SYNONYMS.iter().map(|(k, v)| (*k, *v)).collect()
}
