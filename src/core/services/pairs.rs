//! Pairwise near-duplicate title scan

use crate::core::models::{NamedItem, SimilarPair};

use super::similarity::{DEFAULT_SIMILARITY_THRESHOLD, similar};

/// Find near-duplicate titles using the default threshold
///
/// See [`find_similar_pairs_with`].
#[must_use]
pub fn find_similar_pairs<T: NamedItem>(items: &[T]) -> Vec<SimilarPair> {
    find_similar_pairs_with(items, DEFAULT_SIMILARITY_THRESHOLD)
}

/// Find near-duplicate titles among `items`
///
/// Every unordered pair `(i, j)` with `i < j` is compared once, in order:
/// outer index ascending, inner index ascending from `i + 1`. Absent titles
/// never match.
///
/// The scan is quadratic in `items.len()`. Run it over the attributes or
/// facts of a single dataset, not over a whole workspace.
#[must_use]
pub fn find_similar_pairs_with<T: NamedItem>(items: &[T], threshold: f64) -> Vec<SimilarPair> {
    let mut pairs = Vec::new();

    for (i, first) in items.iter().enumerate() {
        let first_title = first.title().unwrap_or_default();
        for second in &items[i + 1..] {
            let second_title = second.title().unwrap_or_default();
            if similar(first_title, second_title, threshold) {
                pairs.push(SimilarPair::new(first_title, second_title));
            }
        }
    }

    pairs
}
