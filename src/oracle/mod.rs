//! Relevance scoring oracle.
//!
//! The evolutionary engine measures fitness by asking an oracle how well a
//! query phenotype matches the hidden target document. [`ScoringOracle`]
//! is the contract; [`MemoryIndex`] is a self-contained implementation
//! using BM25.

mod memory;
mod types;

pub use memory::{analyze, Bm25, MemoryIndex, SearchHit};
pub use types::{Document, DocumentId, ScoringOracle};
