pub mod engine;
pub mod search_result;

pub use engine::{top_k_search, top_k_search_scored, DEFAULT_LIMIT};
pub use search_result::SearchResult;
