//! The interactive evolution loop.
//!
//! [`Session`] orchestrates one game:
//! index target → seed query → (score → report → prompt → apply) × rounds → summary.

use std::io::{BufRead, Write};

use log::{debug, info, warn};
use rand::Rng;

use super::action::Action;
use super::config::SessionConfig;
use super::report;
use crate::error::{Error, Result};
use crate::ga::Population;
use crate::oracle::{Document, ScoringOracle};
use crate::query::{Queries, Query};

/// Result of a finished session.
#[derive(Debug, Clone)]
pub struct SessionOutcome {
    /// The hidden document the queries evolved toward.
    pub target: Document,

    /// Number of operators applied.
    pub generations: usize,

    /// Best average score seen, starting from the seed population.
    pub high_score: f64,

    /// Whether the population died out.
    pub extinct: bool,

    /// The population when the game ended.
    pub queries: Queries,
}

/// One interactive evolution game.
///
/// # Usage
///
/// ```ignore
/// let mut index = MemoryIndex::new("corpus");
/// index.ingest(&lines)?;
/// let config = SessionConfig::default().with_seed(42);
/// let rng = config.rng();
/// let outcome = Session::new(index, config, rng).run(stdin.lock(), stdout.lock())?;
/// ```
pub struct Session<O, R> {
    oracle: O,
    config: SessionConfig,
    rng: R,
    actions: Vec<Action>,
}

impl<O: ScoringOracle, R: Rng> Session<O, R> {
    /// Creates a session over an oracle that has already ingested its corpus.
    pub fn new(oracle: O, config: SessionConfig, rng: R) -> Self {
        Self {
            oracle,
            config,
            rng,
            actions: Action::menu(),
        }
    }

    /// The operator menu.
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    /// Plays the game, reading choices from `input` and writing reports to
    /// `output`.
    ///
    /// # Errors
    /// Oracle and operator errors end the game and are returned unchanged;
    /// check [`Error::is_fatal`] to tell configuration mistakes apart.
    /// [`Error::InputClosed`] if `input` runs dry while prompting.
    pub fn run<I: BufRead, W: Write>(&mut self, mut input: I, mut output: W) -> Result<SessionOutcome> {
        let target = self.oracle.pick_random_target(&mut self.rng)?;
        debug!("target_sentence: {target}");

        let vocabulary = self.oracle.vocabulary();
        let seed = Query::new(vocabulary.sample(1, &[], &mut self.rng)?, Vec::new());
        debug!("seed_query: {seed}\n{}", seed.to_json_pretty());

        let mut queries = Queries::new(vocabulary.word_list(), vec![seed]);
        let mut high_score = queries.average_score();
        let mut generations = 0;
        let mut extinct = false;

        for generation in 0..self.config.rounds {
            debug!("computing fitness scores for each individual in population");
            self.score(&mut queries, &target)?;

            writeln!(
                output,
                "{}",
                report::section_title(&format!("Generation {}", generation + 1))
            )?;
            writeln!(
                output,
                "{}",
                report::titled_blocks(&[
                    ("Vocabulary", self.oracle.vocabulary().to_string()),
                    ("Queries", report::queries(&queries)),
                    ("Average score (\"fitness\")", report::score(queries.average_score())),
                    ("Evolutionary actions", report::actions(&self.actions)),
                ])
            )?;

            let choice = prompt_action(&mut input, &mut output, self.actions.len())?;
            let action = self.actions[choice];
            info!("generation {}: {}", generation + 1, action.title());
            action.operator().apply(&mut queries, &mut self.rng)?;
            generations += 1;

            high_score = high_score.max(queries.average_score());

            if queries.size() == 0 {
                warn!("population extinct after {generations} generations");
                writeln!(output, "Your queries died out. You lost. Game over.")?;
                extinct = true;
                break;
            }
        }

        writeln!(output, "{}", report::delimiter())?;
        writeln!(
            output,
            "{}",
            report::titled_blocks(&[
                ("Best average score", report::score(high_score)),
                ("Target sentence", target.to_string()),
                ("Last queries", report::queries(&queries)),
            ])
        )?;

        Ok(SessionOutcome {
            target,
            generations,
            high_score,
            extinct,
            queries,
        })
    }

    fn score(&self, queries: &mut Queries, target: &Document) -> Result<()> {
        for query in queries.iter_mut() {
            let explanation = self.oracle.explain(query.body(), &target.id)?;
            query.update_with_explanation(explanation)?;
        }
        Ok(())
    }
}

/// Reads action numbers until one falls in `0..count`.
///
/// Anything else prints a hint and prompts again.
fn prompt_action<I: BufRead, W: Write>(input: &mut I, output: &mut W, count: usize) -> Result<usize> {
    loop {
        write!(output, "Which evolutionary action to take?\n> ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(Error::InputClosed);
        }

        match line.trim().parse::<usize>() {
            Ok(choice) if choice < count => return Ok(choice),
            _ => writeln!(output, "{}", report::prompt_number(0, count.saturating_sub(1)))?,
        }
    }
}
