//! Scoring oracle contract.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;
use crate::query::{BoolQuery, Vocabulary};

/// Identifier the oracle assigns to an indexed document.
pub type DocumentId = String;

/// An indexed document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(rename = "_id")]
    pub id: DocumentId,
    pub full_text: String,
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_text)
    }
}

/// A document index that scores query phenotypes against documents.
///
/// The evolutionary engine only depends on this trait: it ingests the
/// language corpus, picks the hidden target, and asks for a relevance
/// explanation per query and round.
///
/// # Implementing
///
/// ```ignore
/// impl ScoringOracle for SearchCluster {
///     fn ingest<S: AsRef<str>>(&mut self, texts: &[S]) -> Result<()> {
///         for text in texts {
///             self.vocabulary.add_words_from(text.as_ref());
///         }
///         self.bulk_index(texts)
///     }
///     // ...
/// }
/// ```
pub trait ScoringOracle {
    /// Indexes documents.
    ///
    /// Every text must also be fed to the oracle's vocabulary through
    /// [`Vocabulary::add_words_from`].
    fn ingest<S: AsRef<str>>(&mut self, texts: &[S]) -> Result<()>;

    /// Terms seen by [`ingest`](Self::ingest).
    fn vocabulary(&self) -> &Vocabulary;

    /// Returns one indexed document, chosen uniformly at random.
    fn pick_random_target<R: Rng>(&self, rng: &mut R) -> Result<Document>;

    /// Explains how `query` scores against document `id`.
    ///
    /// The result carries the relevance score at `explanation.value`.
    fn explain(&self, query: &BoolQuery, id: &str) -> Result<Value>;
}
