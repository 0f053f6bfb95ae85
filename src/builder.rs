//! In-place left-balanced k-d tree construction.
//!
//! Grounded directly on `original_source/cpukd/builder.h`'s `buildTree`/`buildTree_rec`,
//! restructured as an explicit work-stack rather than call-stack recursion — the same
//! shape `kiddo::float::kdtree::KdTreeNoBorrow::from_points_with_points_sorter` uses for
//! its own construction job queue, so that pathologically unbalanced inputs can't blow
//! the call stack.

use crate::geometry::{left_child, right_child, subtree_size};
use crate::point::Point;

#[cfg(feature = "tracing")]
use tracing::debug;

/// Chooses how ties on the splitting coordinate are resolved while sorting each
/// node's range during construction.
///
/// Grounded on `keyde::SortingStrategy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortingStrategy {
    /// `sort_unstable_by` — faster, but does not guarantee [`crate::builder::build_tree`]
    /// is strictly idempotent when the input contains duplicate coordinates.
    UnstableSort,
    /// `sort_by` — a stable sort, so applying `build_tree` to an already-built array
    /// with duplicate split coordinates reproduces the same array (spec `§8`
    /// invariant 7).
    StableSort,
}

impl Default for SortingStrategy {
    fn default() -> Self {
        Self::UnstableSort
    }
}

/// Construction-time configuration, bundled for forward-extensibility the way
/// `kiddo`'s `with_capacity`/`with_*` constructors thread a small config struct
/// through tree construction rather than growing an ever-longer argument list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BuildConfig {
    /// Tie-breaking sort used at every node during construction.
    pub strategy: SortingStrategy,
}

impl BuildConfig {
    /// Shorthand for `BuildConfig { strategy }`.
    pub fn with_strategy(strategy: SortingStrategy) -> Self {
        Self { strategy }
    }
}

/// Rearranges `points` in place so that it satisfies both the left-balanced implicit
/// layout and the k-d invariant, using [`SortingStrategy::UnstableSort`].
///
/// `N == 0` is a no-op; `N == 1` leaves the single point unchanged.
#[inline]
pub fn build_tree<P: Point<D>, const D: usize>(points: &mut [P]) {
    build_tree_with_strategy::<P, D>(points, SortingStrategy::default());
}

/// Same as [`build_tree`] but takes a [`BuildConfig`] instead of a bare strategy, for
/// callers that already thread a config struct through their own construction code.
#[inline]
pub fn build_tree_with_config<P: Point<D>, const D: usize>(points: &mut [P], config: BuildConfig) {
    build_tree_with_strategy::<P, D>(points, config.strategy);
}

/// Same as [`build_tree`] but lets the caller pick the sort used at each node.
pub fn build_tree_with_strategy<P: Point<D>, const D: usize>(
    points: &mut [P],
    strategy: SortingStrategy,
) {
    let n = points.len();
    if n <= 1 {
        return;
    }

    #[cfg(feature = "tracing")]
    debug!(n, d = D, ?strategy, "building left-balanced k-d tree");

    let mut scratch: Vec<P> = points.to_vec();

    struct Job {
        tgt: usize,
        level: usize,
        begin: usize,
        end: usize,
    }

    let mut jobs = vec![Job {
        tgt: 0,
        level: 0,
        begin: 0,
        end: n,
    }];

    while let Some(Job {
        tgt,
        level,
        begin,
        end,
    }) = jobs.pop()
    {
        if tgt >= n {
            continue;
        }

        if end - begin == 1 {
            points[tgt] = scratch[begin];
            continue;
        }

        let d = level % D;
        let slice = &mut scratch[begin..end];
        match strategy {
            SortingStrategy::UnstableSort => {
                slice.sort_unstable_by(|a, b| a.coord(d).partial_cmp(&b.coord(d)).unwrap())
            }
            SortingStrategy::StableSort => {
                slice.sort_by(|a, b| a.coord(d).partial_cmp(&b.coord(d)).unwrap())
            }
        }

        let pivot = begin + subtree_size(left_child(tgt), n);
        points[tgt] = scratch[pivot];

        jobs.push(Job {
            tgt: left_child(tgt),
            level: level + 1,
            begin,
            end: pivot,
        });
        jobs.push(Job {
            tgt: right_child(tgt),
            level: level + 1,
            begin: pivot + 1,
            end,
        });
    }
}
