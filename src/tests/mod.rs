mod test_ranker;

use crate::catalog::Catalog;
use crate::matrix::SimilarityMatrix;

/// Six-title fixture whose first row exercises a score tie (positions 1
/// and 5 both at 0.9) on top of the usual self-maximum at the diagonal.
pub fn fixture_titles() -> Vec<String> {
    ["A", "B", "C", "D", "E", "F"].iter().map(|s| s.to_string()).collect()
}

pub fn fixture_rows() -> Vec<Vec<f64>> {
    vec![
        vec![1.0, 0.9, 0.2, 0.8, 0.05, 0.9],
        vec![0.9, 1.0, 0.3, 0.5, 0.10, 0.7],
        vec![0.2, 0.3, 1.0, 0.4, 0.60, 0.1],
        vec![0.8, 0.5, 0.4, 1.0, 0.20, 0.3],
        vec![0.05, 0.1, 0.6, 0.2, 1.0, 0.15],
        vec![0.9, 0.7, 0.1, 0.3, 0.15, 1.0],
    ]
}

pub fn fixture_catalog() -> Catalog {
    Catalog::from_titles(fixture_titles())
}

pub fn fixture_matrix() -> SimilarityMatrix {
    SimilarityMatrix::from_rows(fixture_rows()).expect("fixture rows are square")
}
