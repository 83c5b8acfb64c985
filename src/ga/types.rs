//! Core trait definitions for the evolutionary engine.
//!
//! [`Individual`] and [`Population`] define the contract between the
//! operator menu and a concrete representation such as
//! [`Query`](crate::query::Query) / [`Queries`](crate::query::Queries).

use rand::Rng;

use crate::error::Result;

/// Marker trait for fitness values.
///
/// Fitness must support comparison and be cheaply copyable.
/// Higher fitness is considered better (maximization): scores come from
/// a relevance oracle where larger means a closer match.
///
/// Built-in implementations exist for `f64` and `f32`.
pub trait Fitness: PartialOrd + Copy + std::fmt::Debug + 'static {
    /// The fitness of an individual that has not been scored yet.
    fn zero() -> Self;

    /// Converts the fitness to `f64` for averaging and display.
    fn to_f64(self) -> f64;
}

impl Fitness for f64 {
    fn zero() -> Self {
        0.0
    }

    fn to_f64(self) -> f64 {
        self
    }
}

impl Fitness for f32 {
    fn zero() -> Self {
        0.0
    }

    fn to_f64(self) -> f64 {
        self as f64
    }
}

/// A candidate solution in the population.
///
/// Individuals carry their own fitness and count how often they were
/// mutated. Mutation draws from an externally supplied gene pool, so the
/// individual itself never owns the search space.
///
/// # Implementing
///
/// ```ignore
/// #[derive(Clone)]
/// struct Word {
///     letters: Vec<char>,
///     fitness: f64,
///     mutations: usize,
/// }
///
/// impl Individual for Word {
///     type Fitness = f64;
///     type Gene = char;
///     fn fitness(&self) -> f64 { self.fitness }
///     fn mutation_count(&self) -> usize { self.mutations }
///     fn mutate<R: Rng>(&mut self, pool: &[char], rng: &mut R) -> Result<()> {
///         self.letters.push(*pool.choose(rng).ok_or(Error::EmptyWordPool)?);
///         self.mutations += 1;
///         Ok(())
///     }
///     fn recombine(&self, _other: &Self) -> Result<Self> { Err(Error::CrossoverUnsupported) }
///     fn update_fitness(&mut self, hits: usize, total: usize) { /* ... */ }
/// }
/// ```
pub trait Individual: Clone {
    /// The fitness type. Must implement [`Fitness`].
    type Fitness: Fitness;

    /// The unit drawn from the gene pool during mutation.
    type Gene;

    /// Returns the current fitness of this individual.
    fn fitness(&self) -> Self::Fitness;

    /// Number of successful mutations applied so far.
    fn mutation_count(&self) -> usize;

    /// Mutates the individual in place, drawing new genes from `pool`.
    fn mutate<R: Rng>(&mut self, pool: &[Self::Gene], rng: &mut R) -> Result<()>;

    /// Produces an offspring from `self` and `other` without modifying
    /// either parent.
    fn recombine(&self, other: &Self) -> Result<Self>;

    /// Sets the fitness from a hit ratio.
    ///
    /// # Panics
    /// Implementations panic if `hits > total`.
    fn update_fitness(&mut self, hits: usize, total: usize);
}

/// How a population produces offspring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecombinationMode {
    /// Every individual is copied once, doubling the population.
    #[default]
    Clone,

    /// Pairwise genetic crossover. Declared, never implemented.
    Crossover,
}

/// An evolvable collection of individuals.
///
/// Each operator runs to completion and modifies the population in
/// place. Any operator may shrink the population to zero individuals;
/// an empty population is a valid terminal state.
pub trait Population {
    /// The individual type held by this population.
    type Individual: Individual;

    /// The individuals in insertion order.
    fn individuals(&self) -> &[Self::Individual];

    /// Adds one individual at the end.
    fn add(&mut self, individual: Self::Individual);

    /// Number of individuals.
    fn size(&self) -> usize {
        self.individuals().len()
    }

    /// Adds offspring to the population.
    fn recombine(&mut self, mode: RecombinationMode) -> Result<()>;

    /// Mutates every individual.
    fn mutate<R: Rng>(&mut self, rng: &mut R) -> Result<()>;

    /// Removes the least fit individuals.
    fn select(&mut self);

    /// Removes `k` randomly chosen individuals.
    fn random_purge<R: Rng>(&mut self, k: usize, rng: &mut R) -> Result<()>;

    /// Removes individuals that duplicate an earlier one.
    fn remove_duplicates(&mut self);
}
