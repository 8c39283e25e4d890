pub mod error;
pub mod indexer;
pub mod inverted_index;
pub mod search;
pub mod search_engine;
pub mod source;
pub mod tokenizer;

pub use error::{Error, Result};
pub use inverted_index::{KeywordIndex, Occurrence};
pub use search_engine::{build_index, SearchEngine};
pub use tokenizer::{NoiseWords, Tokenizer};
