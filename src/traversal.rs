//! Stackless, recursion-free traversal shared by find-closest-point and kNN.
//!
//! Grounded line-for-line on `original_source/cpukd/fcp.h` and `cpukd/knn.h`'s
//! `while (true)` loops. The traversal carries only two node indices — `prev` and
//! `curr` — and reconstructs the next step from the geometry at `curr`; there is no
//! recursion and no explicit `stack`/`Vec` of frames, which keeps this friendly to a
//! future SIMT port (spec `§1`).

use crate::candidate::CandidateList;
use crate::geometry::level;
use crate::point::{distance, sqr_distance, Axis, Point};

/// Returns the index in `points` closest to `query`, or `None` if `points` is empty.
#[inline]
pub fn find_closest_point<P: Point<D>, const D: usize>(query: &P, points: &[P]) -> Option<usize> {
    find_closest_point_within::<P, D>(query, points, P::Scalar::infinity())
}

/// Same as [`find_closest_point`], but only considers points within `max_radius` of
/// `query`. Returns `None` if `points` is empty or no point falls within the radius.
pub fn find_closest_point_within<P: Point<D>, const D: usize>(
    query: &P,
    points: &[P],
    max_radius: P::Scalar,
) -> Option<usize> {
    let n = points.len();
    if n == 0 {
        return None;
    }
    let n = n as isize;

    let mut best_dist = max_radius;
    let mut best_idx: Option<usize> = None;

    let mut prev: isize = -1;
    let mut curr: isize = 0;

    loop {
        let parent = (curr + 1) / 2 - 1;

        if curr >= n {
            // Phantom-child step: curr doesn't exist, bounce straight back up so the
            // parent's prev == close_child / prev == far_child tests stay uniform.
            prev = curr;
            curr = parent;
            continue;
        }

        let idx = curr as usize;
        let child = 2 * curr + 1;
        let from_child = prev >= child;

        if !from_child {
            let dist = distance::<P, D>(query, &points[idx]);
            if dist < best_dist {
                best_dist = dist;
                best_idx = Some(idx);
            }
        }

        let d = level(idx) as usize % D;
        let delta = query.coord(d) - points[idx].coord(d);
        let side: isize = if delta > P::Scalar::zero() { 1 } else { 0 };
        let close_child = 2 * curr + 1 + side;
        let far_child = 2 * curr + 2 - side;

        let next = if prev == close_child {
            if far_child < n && delta.abs() < best_dist {
                far_child
            } else {
                parent
            }
        } else if prev == far_child {
            parent
        } else if child < n {
            close_child
        } else {
            parent
        };

        if next == -1 {
            return best_idx;
        }

        prev = curr;
        curr = next;
    }
}

/// Populates `candidates` with up to `K` nearest neighbors of `query` within its
/// initial radius, using the left-balanced array `points`. Returns the final
/// `max_radius_sq` — the squared distance of the K-th neighbor if K were found, or
/// else the initial squared search radius.
pub fn k_nearest<P: Point<D>, const D: usize, CL: CandidateList<P::Scalar>>(
    candidates: &mut CL,
    query: &P,
    points: &[P],
) -> P::Scalar {
    let n = points.len();
    if n == 0 {
        return candidates.max_radius_sq();
    }
    let n = n as isize;

    let mut max_radius_sq = candidates.max_radius_sq();

    let mut prev: isize = -1;
    let mut curr: isize = 0;

    loop {
        let parent = (curr + 1) / 2 - 1;

        if curr >= n {
            prev = curr;
            curr = parent;
            continue;
        }

        let idx = curr as usize;
        let child = 2 * curr + 1;
        let from_child = prev >= child;

        if !from_child {
            let dist_sq = sqr_distance::<P, D>(query, &points[idx]);
            if dist_sq <= max_radius_sq {
                candidates.push(dist_sq, idx);
                max_radius_sq = candidates.max_radius_sq();
            }
        }

        let d = level(idx) as usize % D;
        let delta = query.coord(d) - points[idx].coord(d);
        let side: isize = if delta > P::Scalar::zero() { 1 } else { 0 };
        let close_child = 2 * curr + 1 + side;
        let far_child = 2 * curr + 2 - side;

        let next = if prev == close_child {
            if far_child < n && delta * delta <= max_radius_sq {
                far_child
            } else {
                parent
            }
        } else if prev == far_child {
            parent
        } else if child < n {
            close_child
        } else {
            parent
        };

        if next == -1 {
            return max_radius_sq;
        }

        prev = curr;
        curr = next;
    }
}
