use std::fmt;

pub type DocID = String;
pub type Frequency = u32;

/// How many times one keyword occurs in one document.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Occurrence {
    pub document: DocID,
    pub frequency: Frequency,
}

impl Occurrence {
    pub const fn new(document: DocID, frequency: Frequency) -> Self {
        Self {
            document,
            frequency,
        }
    }

    /// Counts one more occurrence, saturating at the maximum frequency.
    pub fn increment(&mut self) {
        self.frequency = self.frequency.saturating_add(1);
    }
}

impl fmt::Display for Occurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.document, self.frequency)
    }
}

/// Occurrences of one keyword, kept in non-increasing frequency order.
pub type OccurrenceList = Vec<Occurrence>;
