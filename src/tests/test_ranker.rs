use approx::assert_relative_eq;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::SimspaceError;
use crate::matrix::SimilarityMatrix;
use crate::ranker::{rank_neighbors, rank_neighbors_batch};
use crate::tests::fixture_matrix;

/// Square matrix with unit diagonal and seeded off-diagonal scores in
/// [0, 1), so the self-score is always the strict row maximum.
fn random_matrix(nitems: usize, seed: u64) -> SimilarityMatrix {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let rows: Vec<Vec<f64>> = (0..nitems)
        .map(|i| {
            (0..nitems)
                .map(|j| if i == j { 1.0 } else { rng.random::<f64>() * 0.99 })
                .collect()
        })
        .collect();
    SimilarityMatrix::from_rows(rows).expect("generated rows are square")
}

#[test]
fn ranker_worked_example_with_tie_break() {
    // row for A: [1.0, 0.9, 0.2, 0.8, 0.05, 0.9]
    // tie at 0.9 between positions 1 and 5 resolves to ascending index
    let matrix = fixture_matrix();

    let ranked = rank_neighbors(&matrix, 0, 5).unwrap();
    let positions: Vec<usize> = ranked.iter().map(|&(p, _)| p).collect();
    assert_eq!(positions, vec![1, 5, 3, 2, 4]);

    assert_relative_eq!(ranked[0].1, 0.9);
    assert_relative_eq!(ranked[1].1, 0.9);
    assert_relative_eq!(ranked[2].1, 0.8);
    assert_relative_eq!(ranked[3].1, 0.2);
    assert_relative_eq!(ranked[4].1, 0.05);
}

#[test]
fn ranker_returns_min_k_n_minus_one_without_query() {
    let nitems = 40;
    let matrix = random_matrix(nitems, 42);

    for &k in &[1usize, 5, 17, nitems - 1] {
        for query in [0, 7, nitems - 1] {
            let ranked = rank_neighbors(&matrix, query, k).unwrap();
            assert_eq!(ranked.len(), k.min(nitems - 1));
            assert!(
                ranked.iter().all(|&(p, _)| p != query),
                "query {query} leaked into its own results at k={k}"
            );
        }
    }
}

#[test]
fn ranker_scores_are_non_increasing() {
    let matrix = random_matrix(64, 7);

    let ranked = rank_neighbors(&matrix, 12, 63).unwrap();
    for window in ranked.windows(2) {
        assert!(
            window[0].1 >= window[1].1,
            "scores increased: {:?} then {:?}",
            window[0],
            window[1]
        );
    }
}

#[test]
fn ranker_is_deterministic() {
    let matrix = random_matrix(32, 99);

    let first = rank_neighbors(&matrix, 3, 10).unwrap();
    let second = rank_neighbors(&matrix, 3, 10).unwrap();
    assert_eq!(first, second);
}

#[test]
fn ranker_k_zero_returns_empty() {
    let matrix = fixture_matrix();

    let ranked = rank_neighbors(&matrix, 2, 0).unwrap();
    assert!(ranked.is_empty());
}

#[test]
fn ranker_k_beyond_catalog_returns_all_others() {
    let matrix = fixture_matrix();
    let nitems = matrix.nitems();

    // no padding, no error: every other item ranked once
    let ranked = rank_neighbors(&matrix, 0, nitems * 3).unwrap();
    assert_eq!(ranked.len(), nitems - 1);

    let mut positions: Vec<usize> = ranked.iter().map(|&(p, _)| p).collect();
    positions.sort_unstable();
    assert_eq!(positions, vec![1, 2, 3, 4, 5]);
}

#[test]
fn ranker_rejects_out_of_range_query() {
    let matrix = fixture_matrix();

    let err = rank_neighbors(&matrix, 6, 5).unwrap_err();
    assert!(
        matches!(err, SimspaceError::PositionOutOfRange { position: 6, len: 6 }),
        "expected PositionOutOfRange, got {err:?}"
    );
}

#[test]
fn ranker_keeps_quirk_when_self_not_top() {
    // The first ranked entry is dropped without checking it is the query.
    // When another column outscores the self-score, the query leaks into
    // the result and the true top neighbor is lost. Pinned on purpose.
    let matrix = SimilarityMatrix::from_rows(vec![
        vec![0.9, 1.0, 0.1],
        vec![1.0, 0.9, 0.2],
        vec![0.1, 0.2, 1.0],
    ])
    .unwrap();

    let ranked = rank_neighbors(&matrix, 0, 2).unwrap();
    let positions: Vec<usize> = ranked.iter().map(|&(p, _)| p).collect();

    // position 1 (score 1.0) was ranked first and dropped; the query
    // itself (score 0.9) survives in the output
    assert_eq!(positions, vec![0, 2]);
    assert_relative_eq!(ranked[0].1, 0.9);
}

#[test]
fn ranker_batch_agrees_with_single_queries() {
    let matrix = random_matrix(48, 1234);
    let queries: Vec<usize> = (0..48).step_by(3).collect();

    let batch = rank_neighbors_batch(&matrix, &queries, 5).unwrap();
    assert_eq!(batch.len(), queries.len());

    for (&query, ranked) in queries.iter().zip(&batch) {
        let single = rank_neighbors(&matrix, query, 5).unwrap();
        assert_eq!(ranked, &single, "batch diverged for query {query}");
    }
}

#[test]
fn ranker_batch_fails_on_invalid_position() {
    let matrix = fixture_matrix();

    let err = rank_neighbors_batch(&matrix, &[0, 99], 2).unwrap_err();
    assert!(matches!(err, SimspaceError::PositionOutOfRange { position: 99, .. }));
}
