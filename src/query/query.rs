//! A single query individual.

use std::fmt;

use log::debug;
use rand::Rng;
use serde_json::Value;

use super::phenotype::BoolQuery;
use crate::error::{Error, Result};
use crate::ga::operators::{random_element, random_index};
use crate::ga::{Fitness, Individual};

/// JSON pointer to the score inside an oracle explanation.
const EXPLANATION_SCORE: &str = "/explanation/value";

/// A boolean retrieval query evolving as an individual.
///
/// The genotype is two ordered term lists: `musts` (terms a document must
/// match) and `must_nots` (terms it must not match). The phenotype is a
/// [`BoolQuery`] recomputed whenever the genotype changes.
///
/// # Examples
///
/// ```
/// use evolve_query::query::Query;
///
/// let query = Query::new(vec!["cat".into(), "apple".into()], vec!["dog".into()]);
/// assert_eq!(query.size(), 3);
/// assert_eq!(query.to_string(), "[+apple,+cat,-dog]");
/// ```
#[derive(Debug, Clone)]
pub struct Query {
    musts: Vec<String>,
    must_nots: Vec<String>,
    fitness: f64,
    n_mutations: usize,
    last_explanation: Option<Value>,
    body: BoolQuery,
}

impl Query {
    /// Creates a query with fitness 0.0.
    pub fn new(musts: Vec<String>, must_nots: Vec<String>) -> Self {
        let body = BoolQuery::from_terms(&musts, &must_nots);
        Self {
            musts,
            must_nots,
            fitness: Fitness::zero(),
            n_mutations: 0,
            last_explanation: None,
            body,
        }
    }

    /// Sets the initial fitness.
    pub fn with_fitness(mut self, fitness: f64) -> Self {
        self.fitness = fitness;
        self
    }

    pub fn musts(&self) -> &[String] {
        &self.musts
    }

    pub fn must_nots(&self) -> &[String] {
        &self.must_nots
    }

    /// The phenotype.
    pub fn body(&self) -> &BoolQuery {
        &self.body
    }

    /// Raw result of the most recent scoring call.
    pub fn last_explanation(&self) -> Option<&Value> {
        self.last_explanation.as_ref()
    }

    /// Total number of terms.
    pub fn size(&self) -> usize {
        self.musts.len() + self.must_nots.len()
    }

    /// Duplicate-detection key: the compact phenotype JSON.
    pub fn canonical(&self) -> String {
        self.body.canonical()
    }

    /// Indented phenotype JSON.
    pub fn to_json_pretty(&self) -> String {
        self.body.to_json_pretty()
    }

    /// Takes the fitness from an oracle explanation.
    ///
    /// The score is read from `explanation.value`. The whole result is kept
    /// as [`last_explanation`](Self::last_explanation), replacing the
    /// previous one.
    ///
    /// # Errors
    /// [`Error::MalformedExplanation`] if the score is missing or not a
    /// number. The query is left unchanged.
    pub fn update_with_explanation(&mut self, explanation: Value) -> Result<()> {
        let score = explanation
            .pointer(EXPLANATION_SCORE)
            .and_then(Value::as_f64)
            .ok_or_else(|| {
                Error::MalformedExplanation(format!("missing numeric {EXPLANATION_SCORE}"))
            })?;

        self.fitness = score;
        self.last_explanation = Some(explanation);
        Ok(())
    }

    /// Applies one random mutation event.
    ///
    /// Picks `musts` or `must_nots`, then either appends a term from
    /// `words` that the list does not contain yet, or removes a random
    /// term. Adding is a no-op when every word is already present, removing
    /// is a no-op on an empty list. The phenotype is refreshed and the
    /// mutation counted either way.
    pub fn mutate_terms<R: Rng>(&mut self, words: &[String], rng: &mut R) {
        let terms = if rng.random_bool(0.5) {
            &mut self.musts
        } else {
            &mut self.must_nots
        };

        if rng.random_bool(0.5) {
            if let Some(term) = random_element(words, terms.as_slice(), rng).cloned() {
                terms.push(term);
            }
        } else if let Some(i) = random_index(terms.len(), rng) {
            terms.remove(i);
        }

        self.update_body();
        self.n_mutations += 1;
    }

    fn update_body(&mut self) {
        self.body = BoolQuery::from_terms(&self.musts, &self.must_nots);
    }
}

impl Individual for Query {
    type Fitness = f64;
    type Gene = String;

    fn fitness(&self) -> f64 {
        self.fitness
    }

    fn mutation_count(&self) -> usize {
        self.n_mutations
    }

    /// # Errors
    /// [`Error::EmptyWordPool`] if `pool` is empty.
    fn mutate<R: Rng>(&mut self, pool: &[String], rng: &mut R) -> Result<()> {
        if pool.is_empty() {
            return Err(Error::EmptyWordPool);
        }

        self.mutate_terms(pool, rng);

        debug!("mutated positive terms: {:?}", self.musts);
        debug!("mutated negative terms: {:?}", self.must_nots);
        Ok(())
    }

    fn recombine(&self, _other: &Self) -> Result<Self> {
        Err(Error::CrossoverUnsupported)
    }

    /// Hit ratio `hits / total`, or 0.0 when `total` is 0.
    ///
    /// # Panics
    /// Panics if `hits > total`.
    fn update_fitness(&mut self, hits: usize, total: usize) {
        assert!(hits <= total, "hits ({hits}) must not exceed total ({total})");

        self.fitness = if total == 0 {
            0.0
        } else {
            hits as f64 / total as f64
        };
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut signed: Vec<String> = self
            .musts
            .iter()
            .map(|term| format!("+{term}"))
            .chain(self.must_nots.iter().map(|term| format!("-{term}")))
            .collect();
        signed.sort();
        write!(f, "[{}]", signed.join(","))
    }
}
