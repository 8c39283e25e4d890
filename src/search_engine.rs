use crate::{
    error::Result,
    indexer::index_documents,
    inverted_index::{KeywordIndex, Occurrence},
    search::{engine, SearchResult},
    source::DocumentSource,
    tokenizer::{NoiseWords, Tokenizer},
};

/// Owns the noise words and the keyword index built from a corpus, and
/// answers searches over it.
pub struct SearchEngine {
    tokenizer: Tokenizer,
    index: KeywordIndex,
}

impl SearchEngine {
    pub fn new(noise_words: NoiseWords) -> Self {
        Self {
            tokenizer: Tokenizer::new(noise_words),
            index: KeywordIndex::new(),
        }
    }

    /// Creates an engine and indexes `documents` in order.
    pub fn build<S, D>(noise_words: NoiseWords, source: &S, documents: &[D]) -> Result<Self>
    where
        S: DocumentSource + ?Sized,
        D: AsRef<str>,
    {
        let mut engine = Self::new(noise_words);
        engine.build_index(source, documents)?;
        Ok(engine)
    }

    /// Indexes `documents` in order. The first document that cannot be read
    /// aborts the build; documents indexed before it are kept.
    pub fn build_index<S, D>(&mut self, source: &S, documents: &[D]) -> Result<()>
    where
        S: DocumentSource + ?Sized,
        D: AsRef<str>,
    {
        index_documents(&mut self.index, &self.tokenizer, source, documents)
    }

    /// Normalizes a raw word into a keyword, `None` if it is not indexable.
    pub fn keyword(&self, word: &str) -> Option<String> {
        self.tokenizer.keyword(word)
    }

    pub const fn index(&self) -> &KeywordIndex {
        &self.index
    }

    pub fn into_index(self) -> KeywordIndex {
        self.index
    }

    pub fn lookup_occurrences(&self, keyword: &str) -> &[Occurrence] {
        self.index.get(keyword)
    }

    pub fn top_k_search(&self, first: &str, second: &str, limit: usize) -> Vec<String> {
        engine::top_k_search(&self.index, first, second, limit)
    }

    pub fn top_k_search_scored(
        &self,
        first: &str,
        second: &str,
        limit: usize,
    ) -> Vec<SearchResult> {
        engine::top_k_search_scored(&self.index, first, second, limit)
    }
}

/// Builds a keyword index over `documents`.
pub fn build_index<S, D>(documents: &[D], noise_words: NoiseWords, source: &S) -> Result<KeywordIndex>
where
    S: DocumentSource + ?Sized,
    D: AsRef<str>,
{
    SearchEngine::build(noise_words, source, documents).map(SearchEngine::into_index)
}
