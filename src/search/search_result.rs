use serde::Serialize;

use crate::inverted_index::{DocID, Frequency};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub document: DocID,
    pub frequency: Frequency,
}

impl SearchResult {
    pub const fn new(document: DocID, frequency: Frequency) -> Self {
        Self {
            document,
            frequency,
        }
    }
}
