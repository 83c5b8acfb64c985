//! Query phenotype: the structured boolean query sent to the oracle.

use serde_json::{json, Value};

/// Document field every clause matches against.
pub const FULL_TEXT_FIELD: &str = "full_text";

/// Structured boolean query derived from a genotype.
///
/// One positive `match` clause per must term and one negative clause per
/// must-not term, in genotype order. The JSON form mirrors a full-text
/// search request body:
///
/// ```json
/// {"query": {"bool": {
///     "must":     [{"match": {"full_text": "term"}}],
///     "must_not": [{"match": {"full_text": "other"}}]
/// }}}
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoolQuery {
    must: Vec<String>,
    must_not: Vec<String>,
}

impl BoolQuery {
    /// Builds the phenotype for the given term lists.
    pub fn from_terms(musts: &[String], must_nots: &[String]) -> Self {
        Self {
            must: musts.to_vec(),
            must_not: must_nots.to_vec(),
        }
    }

    /// Terms of the positive clauses.
    pub fn must(&self) -> &[String] {
        &self.must
    }

    /// Terms of the negative clauses.
    pub fn must_not(&self) -> &[String] {
        &self.must_not
    }

    /// Whether the query has no clause at all.
    pub fn is_empty(&self) -> bool {
        self.must.is_empty() && self.must_not.is_empty()
    }

    /// Request body as JSON.
    pub fn to_value(&self) -> Value {
        json!({
            "query": {
                "bool": {
                    "must": Self::clauses(&self.must),
                    "must_not": Self::clauses(&self.must_not),
                }
            }
        })
    }

    /// Compact JSON body.
    ///
    /// Clause order follows genotype order, so the same term set inserted
    /// in a different order yields a different key.
    pub fn canonical(&self) -> String {
        self.to_value().to_string()
    }

    /// Indented JSON body.
    pub fn to_json_pretty(&self) -> String {
        format!("{:#}", self.to_value())
    }

    fn clauses(terms: &[String]) -> Vec<Value> {
        terms
            .iter()
            .map(|term| json!({ "match": { FULL_TEXT_FIELD: term } }))
            .collect()
    }
}
