//! Human-in-the-loop evolution of boolean retrieval queries.
//!
//! A population of queries (sets of required and forbidden terms) evolves
//! toward one that best matches a hidden target document. Every
//! generation each query is scored by a relevance oracle, and a human
//! picks one operator to apply: clone, select, purge, mutate or
//! deduplicate.
//!
//! - **GA layer** ([`ga`]): `Individual` / `Population` capability traits
//!   and the random and selection helpers their operators use.
//! - **Queries** ([`query`]): the query individual, its phenotype, the
//!   population and the vocabulary that bounds mutation.
//! - **Oracle** ([`oracle`]): the scoring contract and an in-memory BM25
//!   index implementing it.
//! - **Session** ([`session`]): the operator menu and the interactive
//!   game loop.
//!
//! # Architecture
//!
//! All randomness flows through a single `Rng` passed by mutable
//! reference, so a fixed seed reproduces an entire run. Evaluation is
//! sequential and each operator runs to completion before the next
//! generation starts.

pub mod error;
pub mod ga;
pub mod oracle;
pub mod query;
pub mod session;

pub use error::{Error, Result};
