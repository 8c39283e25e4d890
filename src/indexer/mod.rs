use tracing::{debug, info};

use crate::{
    error::Result,
    inverted_index::{FrequencyTable, KeywordIndex, Occurrence},
    source::DocumentSource,
    tokenizer::Tokenizer,
};

/// Counts the keywords of one document.
pub fn load_keywords(tokenizer: &Tokenizer, document: &str, text: &str) -> FrequencyTable {
    let mut keywords = FrequencyTable::new();

    for keyword in tokenizer.tokenize(text) {
        keywords
            .entry(keyword)
            .and_modify(Occurrence::increment)
            .or_insert_with(|| Occurrence::new(document.to_string(), 1));
    }

    keywords
}

/// Loads each document in order and merges it into `index`.
///
/// Stops at the first document that cannot be read. Documents merged before
/// that point stay in `index`.
pub fn index_documents<S, D>(
    index: &mut KeywordIndex,
    tokenizer: &Tokenizer,
    source: &S,
    documents: &[D],
) -> Result<()>
where
    S: DocumentSource + ?Sized,
    D: AsRef<str>,
{
    for document in documents {
        let document = document.as_ref();
        let text = source.read_document(document)?;

        let keywords = load_keywords(tokenizer, document, &text);
        debug!(document, keywords = keywords.len(), "loaded document");

        index.merge(keywords);
    }

    info!(
        documents = documents.len(),
        keywords = index.len(),
        "built keyword index"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::Error, source::MemorySource, tokenizer::NoiseWords};

    fn tokenizer() -> Tokenizer {
        Tokenizer::new(["the", "a", "of"].into_iter().collect())
    }

    #[test]
    fn counts_keywords() {
        let keywords = load_keywords(
            &tokenizer(),
            "AliceCh1.txt",
            "Alice was beginning to get very tired. Alice, tired of sitting by her sister",
        );

        assert_eq!(
            keywords.get("alice"),
            Some(&Occurrence::new("AliceCh1.txt".to_string(), 2))
        );
        assert_eq!(keywords.get("tired").map(|o| o.frequency), Some(2));
        assert_eq!(keywords.get("sister").map(|o| o.frequency), Some(1));
        assert!(!keywords.contains_key("of"));
        assert!(!keywords.contains_key("tired."));
    }

    #[test]
    fn empty_document_has_no_keywords() {
        assert!(load_keywords(&tokenizer(), "empty.txt", "").is_empty());
        assert!(load_keywords(&tokenizer(), "noise.txt", "the a of 1865 ...").is_empty());
    }

    #[test]
    fn indexes_documents_in_order() {
        let source: MemorySource = [
            ("a.txt", "rabbit rabbit hole"),
            ("b.txt", "rabbit rabbit rabbit"),
            ("c.txt", "hole"),
        ]
        .into_iter()
        .collect();

        let mut index = KeywordIndex::new();
        index_documents(&mut index, &tokenizer(), &source, &["a.txt", "b.txt", "c.txt"])
            .expect("Failed to index documents");

        assert_eq!(
            index.get("rabbit"),
            [
                Occurrence::new("b.txt".to_string(), 3),
                Occurrence::new("a.txt".to_string(), 2),
            ]
        );
        assert_eq!(index.get("hole").len(), 2);
    }

    #[test]
    fn missing_document_aborts() {
        let source: MemorySource = [("a.txt", "rabbit"), ("c.txt", "hole")].into_iter().collect();

        let mut index = KeywordIndex::new();
        let result = index_documents(
            &mut index,
            &Tokenizer::new(NoiseWords::new()),
            &source,
            &["a.txt", "b.txt", "c.txt"],
        );

        assert!(matches!(
            result,
            Err(Error::DocumentNotFound { document, .. }) if document == "b.txt"
        ));
        assert!(index.contains("rabbit"));
        assert!(!index.contains("hole"));
    }
}
