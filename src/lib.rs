//! A left-balanced, implicit-array k-d tree.
//!
//! `flatkd` stores a k-d tree as a single flat array of points with no pointers, no
//! child-index fields and no separate node type: point `i`'s children live at `2i + 1`
//! and `2i + 2`, exactly as in a binary heap. [`builder::build_tree`] rearranges a
//! caller-owned `&mut [P]` into that layout in place; [`traversal::find_closest_point`]
//! and [`traversal::k_nearest`] then walk it with two integers of state and no
//! recursion or stack.
//!
//! Built once, queried many times — there is no insert, remove or rebalance. See
//! [`verify::is_valid_kdtree`] for a standalone recursive check of the k-d invariant,
//! useful in tests and behind the `verify` feature for downstream consumers who want
//! the same assurance.
//!
//! # Features
//!
//! - `tracing` (default): emits `tracing::debug!` around tree construction and
//!   batched parallel queries.
//! - `verify` (default): exposes [`verify::is_valid_kdtree`].
//! - `rayon`: enables [`parallel::find_closest_point_batch`] and
//!   [`parallel::k_nearest_batch`], which dispatch a slice of queries across a
//!   `rayon` thread pool instead of a sequential loop.
//! - `test_utils`: exposes [`test_utils`]'s brute-force comparators and random point
//!   generators to downstream crates that want to write their own property tests
//!   against `flatkd`.

pub mod builder;
pub mod candidate;
pub mod error;
pub mod geometry;
pub mod parallel;
pub mod point;
#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
pub mod traversal;
#[cfg(feature = "verify")]
pub mod verify;

pub use builder::{
    build_tree, build_tree_with_config, build_tree_with_strategy, BuildConfig, SortingStrategy,
};
pub use candidate::{CandidateList, FixedCandidateList, HeapCandidateList, Neighbor};
pub use error::TreeError;
pub use point::{distance, sqr_distance, Axis, Point};
pub use traversal::{find_closest_point, find_closest_point_within, k_nearest};

#[cfg(feature = "verify")]
pub use verify::is_valid_kdtree;
