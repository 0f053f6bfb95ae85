//! Point trait, axis trait and distance functions.
//!
//! Grounded on `kiddo::float::kdtree::Axis` (a blanket trait over `num_traits::Float`)
//! and `kiddo::traits::DistanceMetric`, collapsed to a single point trait since this
//! crate commits to squared-Euclidean distance rather than being metric-generic.

use num_traits::Float;
use std::fmt::Debug;

/// Trait bound satisfied by any scalar type usable as a point coordinate.
///
/// `f32` and `f64` both implement this with no extra work required.
pub trait Axis: Float + Default + Debug + Copy + Sync + Send {}
impl<T: Float + Default + Debug + Copy + Sync + Send> Axis for T {}

/// A `D`-dimensional point.
///
/// Values beyond the first `D` coordinates may carry arbitrary payload; that payload
/// is copied verbatim by the builder and never inspected by any query.
pub trait Point<const D: usize>: Copy {
    /// The scalar type used for coordinates.
    type Scalar: Axis;

    /// Returns the `d`-th coordinate of this point, `0 <= d < D`.
    fn coord(&self, d: usize) -> Self::Scalar;
}

impl<A: Axis, const D: usize> Point<D> for [A; D] {
    type Scalar = A;

    #[inline]
    fn coord(&self, d: usize) -> A {
        self[d]
    }
}

/// Squared Euclidean distance between `a` and `b`, summed over `D` coordinates.
///
/// Computed left-to-right with no re-association, matching spec `§4.2`.
#[inline]
pub fn sqr_distance<P: Point<D>, const D: usize>(a: &P, b: &P) -> P::Scalar {
    let mut acc = P::Scalar::zero();
    for d in 0..D {
        let delta = a.coord(d) - b.coord(d);
        acc = acc + delta * delta;
    }
    acc
}

/// Euclidean distance between `a` and `b`.
///
/// Only call this at a boundary where the caller needs the true distance; internal
/// traversal code must compare squared distances and never call `sqrt`.
#[inline]
pub fn distance<P: Point<D>, const D: usize>(a: &P, b: &P) -> P::Scalar {
    sqr_distance::<P, D>(a, b).sqrt()
}
