//! In-memory full-text index with BM25 scoring.
//!
//! [`MemoryIndex`] stands in for an external search server. It analyzes
//! text the way a standard full-text analyzer does (lowercase, split on
//! anything that is not alphanumeric), evaluates [`BoolQuery`] phenotypes
//! with must / must-not semantics, and returns explanations shaped like a
//! search server's explain response.
//!
//! # References
//!
//! - Robertson & Zaragoza (2009), "The Probabilistic Relevance Framework:
//!   BM25 and Beyond"

use std::collections::HashMap;

use log::debug;
use rand::Rng;
use serde::Serialize;
use serde_json::{json, Value};

use super::types::{Document, DocumentId, ScoringOracle};
use crate::error::{Error, Result};
use crate::ga::operators::random_index;
use crate::ga::sort_descending;
use crate::query::{BoolQuery, Vocabulary, FULL_TEXT_FIELD};

/// Splits text into lowercase alphanumeric tokens.
///
/// # Examples
///
/// ```
/// use evolve_query::oracle::analyze;
///
/// assert_eq!(analyze("Lorem ipsum, DOLOR sit-amet."), vec!["lorem", "ipsum", "dolor", "sit", "amet"]);
/// ```
pub fn analyze(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// BM25 parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bm25 {
    /// Term frequency saturation.
    pub k1: f64,

    /// Document length normalization (0.0–1.0).
    pub b: f64,
}

impl Default for Bm25 {
    fn default() -> Self {
        Self { k1: 1.2, b: 0.75 }
    }
}

/// A scored search result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit {
    #[serde(flatten)]
    pub document: Document,
    #[serde(rename = "_score")]
    pub score: f64,
}

#[derive(Debug, Clone)]
struct IndexedDocument {
    document: Document,
    term_freqs: HashMap<String, usize>,
    len: usize,
}

/// How one document fares against one query.
#[derive(Debug, Clone)]
struct Evaluation {
    matched: bool,
    score: f64,
    description: String,
    details: Vec<Value>,
}

impl Evaluation {
    fn miss(description: String) -> Self {
        Self {
            matched: false,
            score: 0.0,
            description,
            details: Vec::new(),
        }
    }
}

/// In-memory document index.
///
/// Document ids are assigned sequentially (`"0"`, `"1"`, ...).
///
/// # Examples
///
/// ```
/// use evolve_query::oracle::{MemoryIndex, ScoringOracle};
/// use evolve_query::query::Query;
///
/// let mut index = MemoryIndex::new("demo");
/// index.ingest(&["the cat sat", "the dog ran"]).unwrap();
///
/// let query = Query::new(vec!["cat".into()], vec![]);
/// let hits = index.search(query.body());
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].document.full_text, "the cat sat");
/// ```
#[derive(Debug, Clone)]
pub struct MemoryIndex {
    name: String,
    bm25: Bm25,
    documents: Vec<IndexedDocument>,
    doc_freqs: HashMap<String, usize>,
    total_len: usize,
    vocabulary: Vocabulary,
}

impl MemoryIndex {
    /// Creates an empty index.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bm25: Bm25::default(),
            documents: Vec::new(),
            doc_freqs: HashMap::new(),
            total_len: 0,
            vocabulary: Vocabulary::new(),
        }
    }

    /// Sets the BM25 parameters.
    pub fn with_bm25(mut self, bm25: Bm25) -> Self {
        self.bm25 = bm25;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of indexed documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Indexes one document and returns its id.
    pub fn add(&mut self, text: &str) -> DocumentId {
        self.vocabulary.add_words_from(text);

        let tokens = analyze(text);
        let mut term_freqs: HashMap<String, usize> = HashMap::new();
        for token in &tokens {
            *term_freqs.entry(token.clone()).or_insert(0) += 1;
        }
        for token in term_freqs.keys() {
            *self.doc_freqs.entry(token.clone()).or_insert(0) += 1;
        }
        self.total_len += tokens.len();

        let id = self.documents.len().to_string();
        self.documents.push(IndexedDocument {
            document: Document {
                id: id.clone(),
                full_text: text.to_owned(),
            },
            term_freqs,
            len: tokens.len(),
        });
        id
    }

    /// Indexes several documents.
    pub fn add_bulk<S: AsRef<str>>(&mut self, texts: &[S]) -> Vec<DocumentId> {
        texts.iter().map(|text| self.add(text.as_ref())).collect()
    }

    /// Looks up a document by id.
    pub fn get(&self, id: &str) -> Result<&Document> {
        self.indexed(id).map(|doc| &doc.document)
    }

    /// All documents matching `query`, best first.
    pub fn search(&self, query: &BoolQuery) -> Vec<SearchHit> {
        let mut hits: Vec<SearchHit> = self
            .documents
            .iter()
            .filter_map(|doc| {
                let eval = self.evaluate(doc, query);
                eval.matched.then(|| SearchHit {
                    document: doc.document.clone(),
                    score: eval.score,
                })
            })
            .collect();
        sort_descending(&mut hits, |hit| hit.score);
        hits
    }

    fn indexed(&self, id: &str) -> Result<&IndexedDocument> {
        id.parse::<usize>()
            .ok()
            .and_then(|i| self.documents.get(i))
            .ok_or_else(|| Error::UnknownDocument(id.to_owned()))
    }

    fn average_len(&self) -> f64 {
        if self.documents.is_empty() {
            return 0.0;
        }
        self.total_len as f64 / self.documents.len() as f64
    }

    /// BM25 contribution of one token, `None` if the document lacks it.
    fn token_score(&self, doc: &IndexedDocument, token: &str) -> Option<(f64, Value)> {
        let tf = *doc.term_freqs.get(token)? as f64;
        let n = self.documents.len() as f64;
        let df = self.doc_freqs.get(token).copied().unwrap_or(0) as f64;
        let Bm25 { k1, b } = self.bm25;

        let idf = (1.0 + (n - df + 0.5) / (df + 0.5)).ln();
        let norm = k1 * (1.0 - b + b * doc.len as f64 / self.average_len());
        let score = idf * tf * (k1 + 1.0) / (tf + norm);

        let detail = json!({
            "value": score,
            "description": format!("weight({FULL_TEXT_FIELD}:{token}) [BM25]"),
            "details": [
                { "value": idf, "description": "idf, computed as log(1 + (N - n + 0.5) / (n + 0.5))" },
                { "value": tf, "description": "freq, occurrences of term within document" },
            ],
        });
        Some((score, detail))
    }

    /// Scores a `match` clause: the sum over analyzed tokens present in
    /// the document, `None` if no token matches.
    fn clause_score(&self, doc: &IndexedDocument, term: &str) -> Option<(f64, Value)> {
        let matches: Vec<(f64, Value)> = analyze(term)
            .iter()
            .filter_map(|token| self.token_score(doc, token))
            .collect();
        if matches.is_empty() {
            return None;
        }

        let score: f64 = matches.iter().map(|(s, _)| s).sum();
        let details: Vec<Value> = matches.into_iter().map(|(_, d)| d).collect();
        Some((
            score,
            json!({ "value": score, "description": "sum of:", "details": details }),
        ))
    }

    fn evaluate(&self, doc: &IndexedDocument, query: &BoolQuery) -> Evaluation {
        if query.is_empty() {
            return Evaluation {
                matched: true,
                score: 1.0,
                description: "*:*".into(),
                details: Vec::new(),
            };
        }

        let mut score = 0.0;
        let mut details = Vec::with_capacity(query.must().len());
        for term in query.must() {
            match self.clause_score(doc, term) {
                Some((s, detail)) => {
                    score += s;
                    details.push(detail);
                }
                None => {
                    return Evaluation::miss(format!(
                        "no match on required clause ({FULL_TEXT_FIELD}:{term})"
                    ))
                }
            }
        }

        if let Some(term) = query
            .must_not()
            .iter()
            .find(|term| self.clause_score(doc, term).is_some())
        {
            return Evaluation::miss(format!(
                "match on prohibited clause ({FULL_TEXT_FIELD}:{term})"
            ));
        }

        let description = if query.must().is_empty() {
            "ConstantScore(*:*)^0.0".to_owned()
        } else {
            "sum of:".to_owned()
        };
        Evaluation {
            matched: true,
            score,
            description,
            details,
        }
    }
}

impl ScoringOracle for MemoryIndex {
    fn ingest<S: AsRef<str>>(&mut self, texts: &[S]) -> Result<()> {
        let ids = self.add_bulk(texts);
        debug!("indexed {} documents into {}", ids.len(), self.name);
        Ok(())
    }

    fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    fn pick_random_target<R: Rng>(&self, rng: &mut R) -> Result<Document> {
        let i = random_index(self.documents.len(), rng).ok_or(Error::EmptyIndex)?;
        Ok(self.documents[i].document.clone())
    }

    fn explain(&self, query: &BoolQuery, id: &str) -> Result<Value> {
        let doc = self.indexed(id)?;
        let eval = self.evaluate(doc, query);

        Ok(json!({
            "_index": self.name,
            "_id": id,
            "matched": eval.matched,
            "explanation": {
                "value": eval.score,
                "description": eval.description,
                "details": eval.details,
            },
        }))
    }
}
