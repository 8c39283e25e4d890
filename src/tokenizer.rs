use std::collections::HashSet;

/// Characters stripped from the end of a word.
const TRAILING_PUNCTUATION: [char; 6] = ['.', ',', '?', ':', ';', '!'];

/// Characters that disqualify a word when they survive trailing stripping.
const INNER_PUNCTUATION: [char; 8] = ['.', ',', '\'', '-', '?', ':', ';', '!'];

/// Words that are never indexed. Membership is case-insensitive.
#[derive(Debug, Default, Clone)]
pub struct NoiseWords {
    words: HashSet<String>,
}

impl NoiseWords {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, word: &str) {
        self.words.insert(word.to_lowercase());
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for NoiseWords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut noise_words = Self::new();
        for word in iter {
            noise_words.insert(word.as_ref());
        }
        noise_words
    }
}

pub struct Tokenizer {
    noise_words: NoiseWords,
}

impl Tokenizer {
    pub const fn new(noise_words: NoiseWords) -> Self {
        Self { noise_words }
    }

    /// Returns the canonical keyword for a raw whitespace-delimited word, or
    /// `None` when the word is not indexable.
    ///
    /// Only trailing punctuation is stripped. Leading or interior punctuation,
    /// apostrophes and hyphens anywhere reject the whole word.
    pub fn keyword(&self, word: &str) -> Option<String> {
        let word = word.to_lowercase();

        if word.is_empty() || word.chars().any(|c| c.is_ascii_digit()) {
            return None;
        }

        let stripped = word.trim_end_matches(&TRAILING_PUNCTUATION[..]);

        if stripped.is_empty() || stripped.contains(&INNER_PUNCTUATION[..]) {
            return None;
        }

        if self.noise_words.contains(stripped) {
            return None;
        }

        Some(stripped.to_string())
    }

    pub fn tokenize<'a>(&'a self, text: &'a str) -> impl Iterator<Item = String> + 'a {
        text.split_whitespace().filter_map(|word| self.keyword(word))
    }
}
