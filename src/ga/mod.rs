//! Genetic algorithm building blocks.
//!
//! A small, representation-agnostic layer: capability traits that a
//! concrete individual and population implement, plus the random and
//! selection helpers their operators are built from. There is no
//! automatic evolutionary loop here; a human picks one operator per
//! generation (see [`session`](crate::session)).
//!
//! # Core Traits
//!
//! - [`Individual`]: a candidate solution that can mutate, recombine and
//!   take a fitness score
//! - [`Population`]: an evolvable collection with recombination, mutation,
//!   selection, random purge and deduplication
//!
//! # Submodules
//!
//! - [`operators`]: blacklist-aware random pick, sampling without replacement
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Takagi (2001), "Interactive Evolutionary Computation: Fusion of the
//!   Capabilities of EC Optimization and Human Evaluation"

pub mod operators;
mod selection;
mod types;

pub use selection::{sort_descending, without_lowest};
pub use types::{Fitness, Individual, Population, RecombinationMode};
