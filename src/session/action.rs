//! The operator menu.

use rand::Rng;

use crate::error::Result;
use crate::ga::{Population, RecombinationMode};

/// An evolutionary operator the player can apply to a population.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// Add offspring using the given mode.
    Recombine(RecombinationMode),
    /// Drop every individual sharing the worst fitness.
    Select,
    /// Drop this many random individuals.
    RandomPurge(usize),
    /// Mutate every individual.
    Mutate,
    /// Drop repeated individuals.
    RemoveDuplicates,
}

impl Operator {
    /// Runs the operator on `population`.
    pub fn apply<P: Population, R: Rng>(&self, population: &mut P, rng: &mut R) -> Result<()> {
        match *self {
            Operator::Recombine(mode) => population.recombine(mode),
            Operator::Select => {
                population.select();
                Ok(())
            }
            Operator::RandomPurge(k) => population.random_purge(k, rng),
            Operator::Mutate => population.mutate(rng),
            Operator::RemoveDuplicates => {
                population.remove_duplicates();
                Ok(())
            }
        }
    }
}

/// A menu entry: a title, a description and the operator it triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Action {
    title: &'static str,
    description: &'static str,
    operator: Operator,
}

impl Action {
    pub const fn new(title: &'static str, description: &'static str, operator: Operator) -> Self {
        Self {
            title,
            description,
            operator,
        }
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// The fixed, ordered menu offered every generation.
    pub fn menu() -> Vec<Action> {
        vec![
            Action::new(
                "Love Is In The Air",
                "... but for now just clone each query once, doubling the population size.",
                Operator::Recombine(RecombinationMode::Clone),
            ),
            Action::new(
                "The Weak Shall Perish",
                "Remove all queries whose scores match the worst score.",
                Operator::Select,
            ),
            Action::new(
                "Deus Ex Machina",
                "Remove random queries from the population.",
                Operator::RandomPurge(1),
            ),
            Action::new(
                "Gamma Party",
                "Apply random mutations throughout the population. For each query, either a term \
                 will be removed or a random new term will be added with a random prefix (+/-).",
                Operator::Mutate,
            ),
            Action::new(
                "This Town Is Too Small For The Both Of Us",
                "Remove duplicate queries.",
                Operator::RemoveDuplicates,
            ),
        ]
    }
}
