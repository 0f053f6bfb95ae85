//! Brute-force reference implementations and random point generators used to check the
//! tree-based algorithms in [`crate::traversal`] against a linear scan.
//!
//! Grounded on `kiddo::test_utils`, which plays the same role for that crate's own test
//! suite and benchmarks.

use crate::point::{sqr_distance, Point};
use ordered_float::OrderedFloat;
use rand::distr::{Distribution, StandardUniform};
use rand::Rng;

/// Linear-scan closest point, used as the ground truth for
/// [`crate::traversal::find_closest_point`] in tests.
pub fn linear_fcp<P: Point<D>, const D: usize>(query: &P, points: &[P]) -> Option<usize> {
    points
        .iter()
        .enumerate()
        .map(|(i, p)| (i, OrderedFloat(sqr_distance::<P, D>(query, p))))
        .min_by_key(|(_, d)| *d)
        .map(|(i, _)| i)
}

/// Linear-scan k-nearest-neighbors, used as the ground truth for
/// [`crate::traversal::k_nearest`] in tests. Returns up to `k` `(index, dist_sq)`
/// pairs sorted ascending by distance, restricted to `dist_sq <= max_radius_sq`.
pub fn linear_knn<P: Point<D>, const D: usize>(
    query: &P,
    points: &[P],
    k: usize,
    max_radius_sq: P::Scalar,
) -> Vec<(usize, P::Scalar)> {
    let mut all: Vec<(usize, P::Scalar)> = points
        .iter()
        .enumerate()
        .map(|(i, p)| (i, sqr_distance::<P, D>(query, p)))
        .filter(|(_, d)| *d <= max_radius_sq)
        .collect();
    all.sort_by(|a, b| {
        OrderedFloat(a.1)
            .cmp(&OrderedFloat(b.1))
            .then(a.0.cmp(&b.0))
    });
    all.truncate(k);
    all
}

/// Generates `n` random `D`-dimensional points with coordinates drawn uniformly from
/// `Standard` (i.e. `[0, 1)` for floats), using `rng`.
pub fn random_points<P, R, const D: usize>(n: usize, rng: &mut R) -> Vec<[P; D]>
where
    P: crate::point::Axis,
    StandardUniform: Distribution<P>,
    R: Rng,
{
    (0..n)
        .map(|_| std::array::from_fn(|_| rng.random::<P>()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn linear_fcp_matches_hand_computed_nearest() {
        let points = [[0.0f64, 0.0], [5.0, 5.0], [1.0, 1.0]];
        let query = [1.1f64, 0.9];
        assert_eq!(linear_fcp::<[f64; 2], 2>(&query, &points), Some(2));
    }

    #[test]
    fn linear_knn_sorts_ascending_and_respects_radius() {
        let points = [[0.0f64, 0.0], [1.0, 0.0], [2.0, 0.0], [10.0, 0.0]];
        let query = [0.0f64, 0.0];
        let got = linear_knn::<[f64; 2], 2>(&query, &points, 2, 100.0);
        assert_eq!(got, vec![(0, 0.0), (1, 1.0)]);

        let restricted = linear_knn::<[f64; 2], 2>(&query, &points, 10, 5.0);
        assert_eq!(restricted, vec![(0, 0.0), (1, 1.0), (2, 4.0)]);
    }

    #[test]
    fn random_points_generates_the_requested_count() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let pts = random_points::<f32, _, 3>(50, &mut rng);
        assert_eq!(pts.len(), 50);
    }
}
