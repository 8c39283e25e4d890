pub mod keyword_index;
pub mod occurrence;

pub use keyword_index::{insert_last_occurrence, FrequencyTable, KeywordIndex};
pub use occurrence::{DocID, Frequency, Occurrence, OccurrenceList};
