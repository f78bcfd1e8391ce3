//! Deterministic text relevance scoring for the in-process store.
//!
//! Mirrors the behaviour of PostgreSQL's `plainto_tsquery` closely enough for
//! development and tests: every query term must be present (AND semantics),
//! and more occurrences rank higher, normalised by document length.

use std::collections::BTreeSet;

/// Splits text into lower-cased alphanumeric tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Distinct query terms in sorted order.
pub fn query_terms(query: &str) -> BTreeSet<String> {
    tokenize(query).into_iter().collect()
}

/// Scores `fields` against `query`.
///
/// Returns `0.0` when the query has no terms or any term is missing from
/// every field. Identical input always yields the identical score.
pub fn rank(fields: &[&str], query: &str) -> f64 {
    let terms = query_terms(query);
    if terms.is_empty() {
        return 0.0;
    }

    let tokens: Vec<String> = fields.iter().flat_map(|field| tokenize(field)).collect();
    if tokens.is_empty() {
        return 0.0;
    }

    let mut hits = 0usize;
    for term in &terms {
        let frequency = tokens.iter().filter(|token| *token == term).count();
        if frequency == 0 {
            return 0.0;
        }
        hits += frequency;
    }

    hits as f64 / (1.0 + (tokens.len() as f64).ln())
}
