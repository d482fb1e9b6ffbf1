//! Word-count feature extraction

use std::collections::HashMap;

use regex::Regex;

use super::SparseVector;

/// Bag-of-words vectorizer.
///
/// The vocabulary is built once by [`CountVectorizer::fit`] and frozen
/// afterwards: [`CountVectorizer::transform`] maps every document into the same
/// feature space, ignoring tokens that were never seen during training.
pub struct CountVectorizer {
    /// Vocabulary: token -> feature index.
    vocabulary: HashMap<String, usize>,
    /// Token pattern: lowercase word tokens of length >= 2.
    token_pattern: Regex,
}

impl std::fmt::Debug for CountVectorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CountVectorizer")
            .field("vocabulary_size", &self.vocabulary.len())
            .finish()
    }
}

impl CountVectorizer {
    /// Build the vocabulary from the training documents.
    ///
    /// Feature indices are assigned in first-seen order, so fitting the same
    /// corpus always produces the same feature space.
    pub fn fit<S: AsRef<str>>(documents: &[S]) -> Self {
        let token_pattern = token_pattern();
        let mut vocabulary = HashMap::new();

        for doc in documents {
            for token in tokenize(&token_pattern, doc.as_ref()) {
                let next_idx = vocabulary.len();
                vocabulary.entry(token).or_insert(next_idx);
            }
        }

        Self {
            vocabulary,
            token_pattern,
        }
    }

    /// Transform a document into a sparse word-count vector over the frozen
    /// vocabulary. Unseen tokens are dropped.
    pub fn transform(&self, document: &str) -> SparseVector {
        let mut counts: HashMap<usize, f64> = HashMap::new();

        for token in tokenize(&self.token_pattern, document) {
            if let Some(&idx) = self.vocabulary.get(&token) {
                *counts.entry(idx).or_insert(0.0) += 1.0;
            }
        }

        let mut features: SparseVector = counts.into_iter().collect();
        features.sort_unstable_by_key(|&(idx, _)| idx);
        features
    }

    /// Number of features in the frozen vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }
}

fn token_pattern() -> Regex {
    // Word tokens of two or more characters, the usual text-vectorizer default.
    Regex::new(r"\b\w\w+\b").expect("token pattern is valid")
}

fn tokenize<'a>(pattern: &'a Regex, text: &'a str) -> impl Iterator<Item = String> + 'a {
    pattern
        .find_iter(text)
        .map(|m| m.as_str().to_lowercase())
}
