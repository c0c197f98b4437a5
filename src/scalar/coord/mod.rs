//! The four coordinate kinds and the traits shared between them.

use std::fmt::Debug;

use geo_traits::CoordTrait;

use crate::datatypes::Dimension;

mod xy;
mod xym;
mod xyz;
mod xyzm;

pub use xy::XY;
pub use xym::XYM;
pub use xyz::XYZ;
pub use xyzm::XYZM;

/// A coordinate kind that can be stored in a [`CoordSequence`][crate::scalar::CoordSequence].
///
/// Every implementor is an immutable value with a fixed [`Dimension`]. Ordinates are always
/// ordered x, y, then elevation (`z`) when present, then time (`m`) when present, which is also
/// the order used by [`CoordTrait::nth_or_panic`].
pub trait Coordinate:
    CoordTrait<T = f64> + Copy + PartialEq + Debug + Send + Sync + 'static
{
    /// The dimension every coordinate of this kind has.
    const DIMENSION: Dimension;

    /// Construct from ordinates packed in x, y, z, m order.
    ///
    /// Only the first `Self::DIMENSION.size()` entries are read. An `XYM` coordinate takes its
    /// measure from the third entry.
    fn from_ordinates(ordinates: [f64; 4]) -> Self;

    /// The Euclidean distance from this coordinate to the closed segment `a`–`b`.
    ///
    /// Only the spatial ordinates (x, y and elevation when present) take part. The time measure
    /// never does.
    fn distance_to_segment(&self, a: &Self, b: &Self) -> f64;
}

/// A coordinate kind carrying an elevation.
pub trait Elevated: Coordinate {
    /// The elevation.
    fn z(&self) -> f64;

    /// A copy of this coordinate with its elevation replaced.
    fn with_z(self, z: f64) -> Self;
}

/// A coordinate kind carrying a time measure.
pub trait Measured: Coordinate {
    /// The time measure.
    fn m(&self) -> f64;

    /// Linear interpolation of the spatial ordinates between `from` and `to`, stamped with `m`.
    ///
    /// `proportion` is 0 at `from` and 1 at `to`.
    fn interpolate(from: &Self, to: &Self, proportion: f64, m: f64) -> Self;
}

#[inline]
pub(crate) fn lerp(from: f64, to: f64, proportion: f64) -> f64 {
    from + proportion * (to - from)
}

/// Distance from `p` to the closed segment `a`–`b` in N-dimensional Euclidean space.
///
/// A degenerate segment (`a == b`) is treated as the point `a`. The endpoints themselves are
/// always at distance exactly zero.
pub(crate) fn segment_distance<const N: usize>(p: [f64; N], a: [f64; N], b: [f64; N]) -> f64 {
    let mut ab_len2 = 0.;
    let mut ap_dot_ab = 0.;
    for i in 0..N {
        let ab = b[i] - a[i];
        ab_len2 += ab * ab;
        ap_dot_ab += (p[i] - a[i]) * ab;
    }

    if ab_len2 == 0. {
        return euclidean(p, a);
    }

    let t = ap_dot_ab / ab_len2;
    if t <= 0. {
        euclidean(p, a)
    } else if t >= 1. {
        euclidean(p, b)
    } else {
        let mut projected = a;
        for i in 0..N {
            projected[i] = lerp(a[i], b[i], t);
        }
        euclidean(p, projected)
    }
}

fn euclidean<const N: usize>(p: [f64; N], q: [f64; N]) -> f64 {
    p.iter()
        .zip(q.iter())
        .map(|(p, q)| (p - q) * (p - q))
        .sum::<f64>()
        .sqrt()
}
