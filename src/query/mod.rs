//! Query evolution.
//!
//! Boolean retrieval queries as GA individuals. A [`Query`] genotype is a
//! pair of term lists; its phenotype is a [`BoolQuery`] that a scoring
//! oracle can evaluate against a target document. [`Queries`] implements
//! the population operators, and [`Vocabulary`] bounds the mutation
//! search space.
//!
//! # Key Types
//!
//! - [`Vocabulary`]: frequency-counted terms, sampled for seeds
//! - [`Query`]: one individual (must / must-not terms, fitness)
//! - [`Queries`]: the population
//! - [`BoolQuery`]: the derived phenotype

mod phenotype;
#[allow(clippy::module_inception)]
mod query;
mod queries;
mod vocabulary;

pub use phenotype::{BoolQuery, FULL_TEXT_FIELD};
pub use queries::Queries;
pub use query::Query;
pub use vocabulary::Vocabulary;
