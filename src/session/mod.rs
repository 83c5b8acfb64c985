//! Interactive evolution sessions.
//!
//! A human plays the selection pressure: every generation the population
//! is scored against a hidden target document, printed, and the player
//! picks one operator from a fixed menu.
//!
//! # Key Types
//!
//! - [`SessionConfig`]: rounds, corpus limit, seed
//! - [`Session`]: the game loop
//! - [`Action`] / [`Operator`]: the menu and its tagged operators
//!
//! # References
//!
//! - Takagi (2001), "Interactive Evolutionary Computation: Fusion of the
//!   Capabilities of EC Optimization and Human Evaluation"

mod action;
mod config;
pub mod report;
mod runner;

pub use action::{Action, Operator};
pub use config::SessionConfig;
pub use runner::{Session, SessionOutcome};
