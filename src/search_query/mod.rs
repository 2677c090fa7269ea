mod eval;
mod lexer;
mod parser;
mod synonyms;

pub use eval::{eval, filter_by_query};
pub use parser::ParsedQuery;
pub use synonyms::{synonyms_for, table as synonym_table};

/// Parse a free-text job query into term buckets.
///
/// Behavior:
/// - `"quoted phrase"` → one regular term, whitespace kept
/// - `+term` → required, `-term` → excluded (bare `+`/`-` are dropped)
/// - `a or b` (any case) → `a` and `b` become OR terms
/// - `or` at either end → plain regular term
/// - Empty/whitespace input → empty query (matches everything)
///
/// Never fails.
pub fn parse(input: &str) -> ParsedQuery {
    parser::parse(lexer::tokenize(input))
}

/// Convenience: parse + evaluate in one call.
#[cfg(test)]
pub fn matches(query: &str, job: &crate::jobs::JobRecord) -> bool {
    eval(&parse(query), job)
}
