//! Text blocks printed each generation.

use colored::Colorize;

use super::action::Action;
use crate::ga::{Fitness, Individual};
use crate::query::Queries;

/// Width of section delimiters.
pub const WIDTH: usize = 80;

/// A line of `=`.
pub fn delimiter() -> String {
    "=".repeat(WIDTH)
}

/// A title framed by delimiters.
pub fn section_title(title: &str) -> String {
    format!("{}\n{}\n{}", delimiter(), title, delimiter())
}

/// A score with at least one fractional digit (`0.0`, `2.0`, `0.125`).
pub fn score(value: f64) -> String {
    format!("{value:?}")
}

/// Ranked queries, best first: rank, score, signed terms.
pub fn queries(queries: &Queries) -> String {
    queries
        .sorted_queries()
        .iter()
        .enumerate()
        .map(|(i, query)| {
            format!("{:>5}. {:0<10} {}", i + 1, score(query.fitness().to_f64()), query)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// The numbered action menu.
pub fn actions(actions: &[Action]) -> String {
    actions
        .iter()
        .enumerate()
        .map(|(i, action)| {
            format!("[{}] {}\n\t{}\n", i, action.title().bold(), action.description())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Hint shown after an invalid choice.
pub fn prompt_number(from: usize, to: usize) -> String {
    format!("Please type a number from {from} to {to}.")
}

/// `title:\nblock` pairs separated by blank lines.
pub fn titled_blocks(blocks: &[(&str, String)]) -> String {
    blocks
        .iter()
        .map(|(title, block)| format!("{title}:\n{block}"))
        .collect::<Vec<_>>()
        .join("\n\n")
}
