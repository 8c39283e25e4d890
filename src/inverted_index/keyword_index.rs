use std::collections::{hash_map::Iter as HashMapIter, HashMap};

use tracing::{debug, trace};

use super::occurrence::{Occurrence, OccurrenceList};

/// Keyword occurrences of a single document, keyed by keyword.
pub type FrequencyTable = HashMap<String, Occurrence>;

/// Maps every keyword to its occurrences across all indexed documents, each
/// list ordered by non-increasing frequency.
#[derive(Debug, Default, Clone)]
pub struct KeywordIndex {
    index: HashMap<String, OccurrenceList>,
}

impl KeywordIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Occurrences of `keyword`, or an empty slice if it was never indexed.
    /// The lookup is exact: `keyword` must already be normalized.
    pub fn get(&self, keyword: &str) -> &[Occurrence] {
        self.index.get(keyword).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.index.contains_key(keyword)
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.index.keys().map(String::as_str)
    }

    pub fn iter(&self) -> HashMapIter<'_, String, OccurrenceList> {
        self.index.iter()
    }

    /// Merges one document's keyword table into the index.
    pub fn merge(&mut self, table: FrequencyTable) {
        debug!(keywords = table.len(), "merging keyword table");

        for (keyword, occurrence) in table {
            let occurrences = self.index.entry(keyword).or_default();
            occurrences.push(occurrence);

            let midpoints = insert_last_occurrence(occurrences);
            trace!(?midpoints, "placed occurrence");
        }
    }
}

impl<'a> IntoIterator for &'a KeywordIndex {
    type Item = (&'a String, &'a OccurrenceList);
    type IntoIter = HashMapIter<'a, String, OccurrenceList>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Moves the last occurrence of `occurrences` to its place by frequency.
///
/// Every element but the last must already be in non-increasing frequency
/// order. The insertion point is found by binary search; the midpoints probed
/// along the way are returned. A list of one element needs no search and
/// yields no midpoints.
///
/// Among equal frequencies the final position depends on where the search
/// lands, so only the non-increasing order is guaranteed.
pub fn insert_last_occurrence(occurrences: &mut OccurrenceList) -> Vec<usize> {
    let mut midpoints = Vec::new();

    let Some(last) = occurrences.pop() else {
        return midpoints;
    };

    let mut low = 0;
    let mut high = occurrences.len();

    while low < high {
        let mid = (low + high) / 2;
        midpoints.push(mid);

        match last.frequency.cmp(&occurrences[mid].frequency) {
            std::cmp::Ordering::Equal => break,
            std::cmp::Ordering::Greater => high = mid,
            std::cmp::Ordering::Less => low = mid + 1,
        }
    }

    occurrences.insert((low + high) / 2, last);

    midpoints
}
