use std::collections::HashSet;

use crate::inverted_index::{KeywordIndex, Occurrence};

use super::search_result::SearchResult;

/// Number of documents a search returns unless told otherwise.
pub const DEFAULT_LIMIT: usize = 5;

/// Documents containing `first` or `second`, highest frequency first, at most
/// `limit` of them, each document once.
///
/// Keywords are looked up as given and must already be normalized. At equal
/// frequency the documents of `first` come before those of `second`.
pub fn top_k_search_scored(
    index: &KeywordIndex,
    first: &str,
    second: &str,
    limit: usize,
) -> Vec<SearchResult> {
    let first = index.get(first);
    let second = index.get(second);

    let mut candidates: Vec<&Occurrence> = first.iter().collect();
    candidates.extend(second.iter().filter(|occurrence| !first.contains(occurrence)));

    // Stable, so ties keep the order above.
    candidates.sort_by(|a, b| b.frequency.cmp(&a.frequency));

    let mut seen = HashSet::new();
    candidates
        .into_iter()
        .filter(|occurrence| seen.insert(occurrence.document.as_str()))
        .take(limit)
        .map(|occurrence| SearchResult::new(occurrence.document.clone(), occurrence.frequency))
        .collect()
}

/// Like [`top_k_search_scored`], returning only the document identifiers.
pub fn top_k_search(index: &KeywordIndex, first: &str, second: &str, limit: usize) -> Vec<String> {
    top_k_search_scored(index, first, second, limit)
        .into_iter()
        .map(|result| result.document)
        .collect()
}
