//! Property-based tests for evolve-query
//!
//! Uses proptest to verify population and vocabulary invariants.

use std::collections::HashSet;

use evolve_query::ga::{Individual, Population, RecombinationMode};
use evolve_query::query::{Queries, Query, Vocabulary};
use evolve_query::Error;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn term() -> impl Strategy<Value = String> {
    "[a-e]{1,2}"
}

fn query() -> impl Strategy<Value = Query> {
    (
        prop::collection::vec(term(), 0..4),
        prop::collection::vec(term(), 0..4),
        prop::sample::select(vec![0.0, 0.5, 1.0, 2.5]),
    )
        .prop_map(|(musts, must_nots, fitness)| Query::new(musts, must_nots).with_fitness(fitness))
}

fn population() -> impl Strategy<Value = Queries> {
    (
        prop::collection::vec(term(), 1..8),
        prop::collection::vec(query(), 0..12),
    )
        .prop_map(|(words, queries)| Queries::new(words, queries))
}

fn canonical_keys(queries: &Queries) -> Vec<String> {
    queries.queries().iter().map(Query::canonical).collect()
}

proptest! {
    // ==================== Population Properties ====================

    #[test]
    fn average_score_of_empty_population_is_zero(words in prop::collection::vec(term(), 0..5)) {
        let queries = Queries::new(words, vec![]);
        prop_assert_eq!(queries.average_score(), 0.0);
    }

    #[test]
    fn clone_doubles_population(mut queries in population()) {
        prop_assume!(queries.size() > 0);
        let before = queries.size();
        let distinct_before: HashSet<String> = canonical_keys(&queries).into_iter().collect();

        queries.recombine(RecombinationMode::Clone).unwrap();

        prop_assert_eq!(queries.size(), before * 2);
        let keys = canonical_keys(&queries);
        let distinct_after: HashSet<String> = keys.iter().cloned().collect();
        prop_assert_eq!(distinct_after, distinct_before);
        prop_assert_eq!(&keys[..before], &keys[before..]);
    }

    #[test]
    fn select_removes_exactly_the_worst(mut queries in population()) {
        prop_assume!(queries.size() > 0);
        let fitness: Vec<f64> = queries.queries().iter().map(|q| q.fitness()).collect();
        let worst = fitness.iter().cloned().fold(f64::INFINITY, f64::min);
        let expected = fitness.iter().filter(|&&f| f > worst).count();

        queries.select();

        prop_assert_eq!(queries.size(), expected);
        prop_assert!(queries.queries().iter().all(|q| q.fitness() > worst));
    }

    #[test]
    fn random_purge_bounds(mut queries in population(), seed in any::<u64>(), extra in 1usize..4) {
        let mut rng = StdRng::seed_from_u64(seed);
        let size = queries.size();
        let keys = canonical_keys(&queries);

        let err = queries.random_purge(size + extra, &mut rng);
        prop_assert!(
            matches!(err, Err(Error::OutOfRange { .. })),
            "expected OutOfRange, got {:?}",
            err
        );
        prop_assert_eq!(canonical_keys(&queries), keys);

        if size > 0 {
            queries.random_purge(size - 1, &mut rng).unwrap();
            prop_assert_eq!(queries.size(), 1);
        }
    }

    #[test]
    fn remove_duplicates_is_idempotent(mut queries in population()) {
        let distinct: HashSet<String> = canonical_keys(&queries).into_iter().collect();

        queries.remove_duplicates();
        let once = canonical_keys(&queries);
        queries.remove_duplicates();
        let twice = canonical_keys(&queries);

        prop_assert_eq!(&once, &twice);
        prop_assert_eq!(once.len(), distinct.len());
    }

    #[test]
    fn mutation_keeps_only_non_empty_queries(mut queries in population(), seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let before = queries.size();

        queries.mutate(&mut rng).unwrap();

        prop_assert!(queries.size() <= before);
        prop_assert!(queries.queries().iter().all(|q| q.size() > 0));
    }

    // ==================== Query Properties ====================

    #[test]
    fn mutate_terms_changes_size_by_at_most_one(
        mut query in query(),
        pool in prop::collection::vec(term(), 1..6),
        seed in any::<u64>()
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let before = query.size();

        query.mutate_terms(&pool, &mut rng);

        let after = query.size();
        prop_assert!(after + 1 >= before && after <= before + 1);
        prop_assert_eq!(query.mutation_count(), 1);
        prop_assert_eq!(query.body().must(), query.musts());
        prop_assert_eq!(query.body().must_not(), query.must_nots());
    }

    #[test]
    fn hit_ratio_fitness(hits in 0usize..100, extra in 0usize..100) {
        let mut query = Query::new(vec!["t".into()], vec![]);
        let total = hits + extra;

        query.update_fitness(hits, total);

        if total == 0 {
            prop_assert_eq!(query.fitness(), 0.0);
        } else {
            prop_assert!((query.fitness() - hits as f64 / total as f64).abs() < 1e-12);
        }
    }

    #[test]
    fn display_is_sorted_and_signed(query in query()) {
        let shown = query.to_string();
        prop_assert!(shown.starts_with('[') && shown.ends_with(']'));

        let inner = &shown[1..shown.len() - 1];
        let parts: Vec<&str> = if inner.is_empty() { vec![] } else { inner.split(',').collect() };
        prop_assert_eq!(parts.len(), query.size());
        prop_assert!(parts.windows(2).all(|w| w[0] <= w[1]));
        prop_assert!(parts.iter().all(|p| p.starts_with('+') || p.starts_with('-')));
    }

    // ==================== Vocabulary Properties ====================

    #[test]
    fn sample_excludes_blacklist(
        text in prop::collection::vec(term(), 0..20),
        without in prop::collection::vec(term(), 0..5),
        n in 0usize..6,
        seed in any::<u64>()
    ) {
        let vocabulary = Vocabulary::from_text(&text.join(" "));
        let eligible = vocabulary
            .word_list()
            .into_iter()
            .filter(|w| !without.contains(w))
            .count();
        let mut rng = StdRng::seed_from_u64(seed);

        match vocabulary.sample(n, &without, &mut rng) {
            Ok(sample) => {
                prop_assert!(n <= eligible);
                prop_assert_eq!(sample.len(), n);
                let unique: HashSet<&String> = sample.iter().collect();
                prop_assert_eq!(unique.len(), n);
                prop_assert!(sample.iter().all(|w| !without.contains(w)));
            }
            Err(Error::InsufficientVocabulary { requested, available }) => {
                prop_assert!(n > eligible);
                prop_assert_eq!(requested, n);
                prop_assert_eq!(available, eligible);
            }
            Err(other) => prop_assert!(false, "unexpected error {}", other),
        }
    }

    #[test]
    fn vocabulary_counts_match_occurrences(text in prop::collection::vec(term(), 0..30)) {
        let vocabulary = Vocabulary::from_text(&text.join(" "));
        for word in vocabulary.word_list() {
            let occurrences = text.iter().filter(|w| **w == word).count();
            prop_assert_eq!(vocabulary.count(&word), occurrences);
        }
        let distinct: HashSet<&String> = text.iter().collect();
        prop_assert_eq!(vocabulary.len(), distinct.len());
    }
}

#[test]
fn select_on_reference_population() {
    let make = |fitness: &[f64]| {
        Queries::new(
            vec!["w".to_string()],
            fitness
                .iter()
                .enumerate()
                .map(|(i, &f)| Query::new(vec![format!("t{i}")], vec![]).with_fitness(f))
                .collect(),
        )
    };

    let mut queries = make(&[1.1, 2.4, 3.7]);
    queries.select();
    assert_eq!(queries.size(), 2);

    let mut queries = make(&[5.0, 5.0, 5.0]);
    queries.select();
    assert_eq!(queries.size(), 0);
}

#[test]
fn vocabulary_reference_counts() {
    let vocabulary = Vocabulary::from_text("a b c a b a");
    assert_eq!(vocabulary.word_list(), vec!["a", "b", "c"]);
    assert_eq!(
        (vocabulary.count("a"), vocabulary.count("b"), vocabulary.count("c")),
        (3, 2, 1)
    );
}
