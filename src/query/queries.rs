//! The query population.

use std::collections::HashSet;
use std::sync::Arc;

use log::{debug, error};
use rand::Rng;

use super::query::Query;
use crate::error::{Error, Result};
use crate::ga::operators::sample_indices;
use crate::ga::{sort_descending, without_lowest, Fitness, Individual, Population, RecombinationMode};

/// A population of [`Query`] individuals.
///
/// Individuals are kept in insertion order; [`sorted_queries`](Self::sorted_queries)
/// gives the fitness ranking. The word pool is shared and read-only: it is
/// where mutation draws new terms from.
///
/// # Examples
///
/// ```
/// use evolve_query::ga::{Population, RecombinationMode};
/// use evolve_query::query::{Queries, Query};
///
/// let mut queries = Queries::new(
///     vec!["cat".into(), "dog".into()],
///     vec![Query::new(vec!["cat".into()], vec![]).with_fitness(1.0)],
/// );
/// queries.recombine(RecombinationMode::Clone).unwrap();
/// assert_eq!(queries.size(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Queries {
    queries: Vec<Query>,
    words: Arc<[String]>,
}

impl Queries {
    /// Creates a population over the given word pool.
    pub fn new(words: impl Into<Arc<[String]>>, queries: Vec<Query>) -> Self {
        Self {
            queries,
            words: words.into(),
        }
    }

    /// The individuals in insertion order.
    pub fn queries(&self) -> &[Query] {
        &self.queries
    }

    /// The word pool mutation draws from.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Mutable access for scoring.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Query> {
        self.queries.iter_mut()
    }

    /// Mean fitness, 0.0 for an empty population.
    pub fn average_score(&self) -> f64 {
        if self.queries.is_empty() {
            return 0.0;
        }
        let total: f64 = self.queries.iter().map(|q| q.fitness().to_f64()).sum();
        total / self.queries.len() as f64
    }

    /// Individuals ordered by fitness, highest first. Ties keep insertion order.
    pub fn sorted_queries(&self) -> Vec<&Query> {
        let mut sorted: Vec<&Query> = self.queries.iter().collect();
        sort_descending(&mut sorted, |q| q.fitness());
        sorted
    }
}

impl Population for Queries {
    type Individual = Query;

    fn individuals(&self) -> &[Query] {
        &self.queries
    }

    fn add(&mut self, individual: Query) {
        self.queries.push(individual);
    }

    /// Appends a copy of every individual.
    ///
    /// # Errors
    /// [`Error::UnsupportedRecombinationMode`] for anything but
    /// [`RecombinationMode::Clone`]. The error is fatal.
    fn recombine(&mut self, mode: RecombinationMode) -> Result<()> {
        match mode {
            RecombinationMode::Clone => {
                let clones = self.queries.clone();
                self.queries.extend(clones);
                Ok(())
            }
            other => {
                error!("Recombination mode {other:?} not implemented.");
                Err(Error::UnsupportedRecombinationMode(other))
            }
        }
    }

    /// Mutates every query; queries left without terms die.
    fn mutate<R: Rng>(&mut self, rng: &mut R) -> Result<()> {
        for query in self.queries.iter_mut() {
            query.mutate(&self.words, rng)?;
        }
        self.queries.retain(|q| q.size() > 0);
        Ok(())
    }

    /// Removes every query whose fitness equals the worst fitness.
    ///
    /// When all fitness values are equal, every query is worst and the
    /// population dies out.
    fn select(&mut self) {
        let queries = std::mem::take(&mut self.queries);
        self.queries = without_lowest(queries, |q| q.fitness());
    }

    /// # Errors
    /// [`Error::OutOfRange`] if `k` exceeds the population size; nothing
    /// is removed in that case.
    fn random_purge<R: Rng>(&mut self, k: usize, rng: &mut R) -> Result<()> {
        debug!("Removing {k} random members from population");

        let size = self.queries.len();
        let doomed = sample_indices(size, k, rng).ok_or(Error::OutOfRange { requested: k, size })?;

        let mut keep = vec![true; size];
        for i in doomed {
            keep[i] = false;
        }
        let mut flags = keep.into_iter();
        self.queries.retain(|_| flags.next().unwrap_or(true));
        Ok(())
    }

    /// Keeps the first query per phenotype, in order.
    fn remove_duplicates(&mut self) {
        let mut seen = HashSet::new();
        self.queries.retain(|q| seen.insert(q.canonical()));
    }
}
