//! End-to-end games against the in-memory index.

use std::io::Cursor;

use evolve_query::ga::{Individual, Population};
use evolve_query::oracle::{MemoryIndex, ScoringOracle};
use evolve_query::session::{Session, SessionConfig, SessionOutcome};

const CORPUS: [&str; 5] = [
    "The quick brown fox jumps over the lazy dog.",
    "A journey of a thousand miles begins with a single step.",
    "All that glitters is not gold.",
    "The early bird catches the worm.",
    "Actions speak louder than words.",
];

fn play(seed: u64, rounds: usize, script: &str) -> (SessionOutcome, String) {
    let mut index = MemoryIndex::new("integration");
    index.ingest(&CORPUS).unwrap();

    let config = SessionConfig::default().with_rounds(rounds).with_seed(seed);
    let rng = config.rng();
    let mut session = Session::new(index, config, rng);

    let mut output = Vec::new();
    let outcome = session.run(Cursor::new(script.to_owned()), &mut output).unwrap();
    (outcome, String::from_utf8(output).unwrap())
}

#[test]
fn seeded_games_are_reproducible() {
    // clone, mutate, mutate, deduplicate, clone, mutate
    let script = "0\n3\n3\n4\n0\n3\n";

    let (first, first_text) = play(42, 6, script);
    let (second, second_text) = play(42, 6, script);

    assert_eq!(first.target, second.target);
    assert_eq!(first.generations, second.generations);
    assert_eq!(first_text, second_text);

    let render = |o: &SessionOutcome| -> Vec<String> {
        o.queries.queries().iter().map(|q| q.to_string()).collect()
    };
    assert_eq!(render(&first), render(&second));
}

#[test]
fn invalid_choices_are_reprompted() {
    let (outcome, text) = play(7, 1, "hello\n\n99\n0\n");

    assert_eq!(outcome.generations, 1);
    assert_eq!(outcome.queries.size(), 2);
    assert_eq!(text.matches("Please type a number from 0 to 4.").count(), 3);
}

#[test]
fn seed_query_scores_against_target() {
    let (outcome, text) = play(3, 1, "0\n");

    assert!(CORPUS.contains(&outcome.target.full_text.as_str()));
    assert!(text.contains(&format!("Target sentence:\n{}", outcome.target.full_text)));

    // one term drawn from the vocabulary, cloned once
    for query in outcome.queries.queries() {
        assert_eq!(query.size(), 1);
        assert!(query.fitness() >= 0.0);
        assert!(query.last_explanation().is_some());
    }
}

#[test]
fn high_score_tracks_best_average() {
    let (outcome, _) = play(11, 4, "0\n3\n0\n3\n");

    assert!(outcome.high_score >= 0.0);
    assert!(outcome.high_score >= outcome.queries.average_score());
}

#[test]
fn purge_to_extinction_ends_game() {
    let (outcome, text) = play(5, 10, "2\n");

    assert!(outcome.extinct);
    assert_eq!(outcome.generations, 1);
    assert!(text.contains("Game over."));
    assert!(!text.contains("Generation 2"));
}
