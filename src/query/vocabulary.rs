//! Frequency-counted term vocabulary.
//!
//! [`Vocabulary`] is the search space of query mutation: every term ever
//! ingested, with how often it occurred.

use std::collections::BTreeMap;
use std::fmt;

use rand::Rng;

use crate::error::{Error, Result};
use crate::ga::operators::sample_indices;

/// Term → occurrence count.
///
/// Counts only grow, except through [`clear`](Vocabulary::clear). Terms are
/// kept in an ordered map, so [`word_list`](Vocabulary::word_list) has a
/// deterministic order and a seeded RNG reproduces the same samples.
///
/// # Examples
///
/// ```
/// use evolve_query::query::Vocabulary;
///
/// let vocabulary = Vocabulary::from_text("a b c a b a");
/// assert_eq!(vocabulary.word_list(), vec!["a", "b", "c"]);
/// assert_eq!(vocabulary.count("a"), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    words: BTreeMap<String, usize>,
}

impl Vocabulary {
    /// Creates an empty vocabulary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a vocabulary seeded from whitespace-separated `text`.
    pub fn from_text(text: &str) -> Self {
        let mut vocabulary = Self::new();
        vocabulary.add_words_from(text);
        vocabulary
    }

    /// Splits text on whitespace.
    pub fn tokenized(text: &str) -> Vec<&str> {
        text.split_whitespace().collect()
    }

    /// Increments the count of each word; unknown words start at 1.
    pub fn add_words<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            *self.words.entry(word.as_ref().to_owned()).or_insert(0) += 1;
        }
    }

    /// Tokenizes `text` and adds its words.
    pub fn add_words_from(&mut self, text: &str) {
        self.add_words(Self::tokenized(text));
    }

    /// Distinct known terms.
    pub fn word_list(&self) -> Vec<String> {
        self.words.keys().cloned().collect()
    }

    /// Occurrence count of `word`, 0 if unknown.
    pub fn count(&self, word: &str) -> usize {
        self.words.get(word).copied().unwrap_or(0)
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Forgets every term.
    pub fn clear(&mut self) {
        self.words.clear();
    }

    /// `(term, count)` pairs, most frequent first.
    ///
    /// Ties keep alphabetical order.
    pub fn by_frequency(&self) -> Vec<(&str, usize)> {
        let mut pairs: Vec<(&str, usize)> = self
            .words
            .iter()
            .map(|(word, &count)| (word.as_str(), count))
            .collect();
        pairs.sort_by(|a, b| b.1.cmp(&a.1));
        pairs
    }

    /// Draws `n` distinct terms uniformly at random, none of them in `without`.
    ///
    /// # Errors
    /// [`Error::InsufficientVocabulary`] if fewer than `n` terms are eligible.
    pub fn sample<R: Rng>(&self, n: usize, without: &[String], rng: &mut R) -> Result<Vec<String>> {
        let eligible: Vec<&String> = self
            .words
            .keys()
            .filter(|word| !without.contains(*word))
            .collect();

        let picked = sample_indices(eligible.len(), n, rng).ok_or(Error::InsufficientVocabulary {
            requested: n,
            available: eligible.len(),
        })?;

        Ok(picked.into_iter().map(|i| eligible[i].clone()).collect())
    }
}

impl fmt::Display for Vocabulary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self
            .by_frequency()
            .into_iter()
            .map(|(word, count)| format!("{:>5} {}", count, word))
            .collect();
        write!(f, "{}", lines.join("\n"))
    }
}
