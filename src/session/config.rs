//! Session configuration.
//!
//! [`SessionConfig`] holds the parameters of one interactive run.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Configuration for an interactive evolution session.
///
/// # Defaults
///
/// ```
/// use evolve_query::session::SessionConfig;
///
/// let config = SessionConfig::default();
/// assert_eq!(config.rounds, 10);
/// assert!(config.max_lines.is_none());
/// ```
///
/// # Builder Pattern
///
/// ```
/// use evolve_query::session::SessionConfig;
///
/// let config = SessionConfig::default()
///     .with_rounds(25)
///     .with_max_lines(100)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Maximum number of generations to play.
    pub rounds: usize,

    /// Number of leading corpus lines to index.
    ///
    /// `None` indexes every line.
    pub max_lines: Option<usize>,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,

    /// Name of the document index.
    pub index_name: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            rounds: 10,
            max_lines: None,
            seed: None,
            index_name: "evolve_a_query".to_owned(),
        }
    }
}

impl SessionConfig {
    /// Sets the number of rounds.
    pub fn with_rounds(mut self, n: usize) -> Self {
        self.rounds = n;
        self
    }

    /// Limits how many corpus lines are indexed.
    pub fn with_max_lines(mut self, n: usize) -> Self {
        self.max_lines = Some(n);
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the index name.
    pub fn with_index_name(mut self, name: impl Into<String>) -> Self {
        self.index_name = name.into();
        self
    }

    /// The leading lines to index.
    pub fn limit_lines<'a, T>(&self, lines: &'a [T]) -> &'a [T] {
        match self.max_lines {
            Some(n) => &lines[..n.min(lines.len())],
            None => lines,
        }
    }

    /// The session's random source.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        }
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.rounds == 0 {
            return Err("rounds must be at least 1".into());
        }
        if self.max_lines == Some(0) {
            return Err("max_lines must be positive or None".into());
        }
        if self.index_name.trim().is_empty() {
            return Err("index_name must not be empty".into());
        }
        Ok(())
    }
}
