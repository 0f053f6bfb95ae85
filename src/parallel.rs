//! Parallel dispatch of independent queries across a batch.
//!
//! Grounded on `kiddo`'s `rayon` feature gate (`Cargo.toml`'s `[dependencies.rayon]`,
//! `optional = true`) and on the sibling spatial-index crate `geo-index`, which exposes
//! the same "optional rayon, sequential by default" shape in its own `Cargo.toml`. Each
//! query is independent — no shared mutable state crosses queries — so this is a plain
//! `par_iter().map()` with no synchronization to design.

use crate::candidate::{CandidateList, Neighbor};
use crate::point::Point;
use crate::traversal::{find_closest_point, k_nearest};

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Runs [`find_closest_point`] for every query in `queries` against `points`.
///
/// Uses a `rayon` work-stealing pool when the `rayon` feature is enabled, and a plain
/// sequential iterator otherwise. Both paths produce identical output.
pub fn find_closest_point_batch<P, const D: usize>(
    queries: &[P],
    points: &[P],
) -> Vec<Option<usize>>
where
    P: Point<D> + Sync,
{
    #[cfg(feature = "rayon")]
    {
        queries
            .par_iter()
            .map(|q| find_closest_point::<P, D>(q, points))
            .collect()
    }
    #[cfg(not(feature = "rayon"))]
    {
        queries
            .iter()
            .map(|q| find_closest_point::<P, D>(q, points))
            .collect()
    }
}

/// Runs k-nearest-neighbors for every query in `queries` against `points`, building a
/// fresh `CL` (e.g. [`crate::candidate::FixedCandidateList`]) per query via
/// `new_list`.
///
/// `new_list` is called once per query rather than shared, since each query's
/// candidate list is independent; `Send`-ness of the closure is what lets this run
/// under `rayon` without any locking.
pub fn k_nearest_batch<P, const D: usize, CL, F>(
    queries: &[P],
    points: &[P],
    new_list: F,
) -> Vec<Vec<Neighbor<P::Scalar>>>
where
    P: Point<D> + Sync,
    CL: CandidateList<P::Scalar>,
    F: Fn() -> CL + Sync,
{
    #[cfg(feature = "rayon")]
    {
        queries
            .par_iter()
            .map(|q| {
                let mut cl = new_list();
                k_nearest::<P, D, CL>(&mut cl, q, points);
                cl.into_sorted_vec()
            })
            .collect()
    }
    #[cfg(not(feature = "rayon"))]
    {
        queries
            .iter()
            .map(|q| {
                let mut cl = new_list();
                k_nearest::<P, D, CL>(&mut cl, q, points);
                cl.into_sorted_vec()
            })
            .collect()
    }
}
