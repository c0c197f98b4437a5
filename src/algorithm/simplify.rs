use log::{debug, trace};

use crate::scalar::{CoordSequence, Elevated, LineString};

/// Equatorial radius of the Earth, in the unit elevations are expressed in.
pub const EARTH_RADIUS_KM: f64 = 6_378_137.;

/// Equatorial perimeter of the Earth, in the unit elevations are expressed in.
pub const EARTH_EQUATORIAL_PERIMETER_KM: f64 = 2. * std::f64::consts::PI * EARTH_RADIUS_KM;

/// Length of one degree of longitude at the equator. Elevations are divided by this so that they
/// can be compared with horizontal positions given in degrees.
pub const EARTH_EQUATORIAL_PERIMETER_DEG: f64 = EARTH_EQUATORIAL_PERIMETER_KM / 360.;

/// Simplifies an elevated path.
///
/// This is the [Ramer–Douglas–Peucker
/// algorithm](https://en.wikipedia.org/wiki/Ramer–Douglas–Peucker_algorithm), measuring
/// distances in (x, y, elevation) space after dividing elevation by
/// [`EARTH_EQUATORIAL_PERIMETER_DEG`]. The time measure, if any, is carried along but never
/// affects which vertices are kept.
///
/// The first and last vertices are always kept. A vertex is kept only when it lies further than
/// `delta` from the segment joining the vertices kept around it; on equal distances the earliest
/// vertex wins. Paths with fewer than three vertices are returned unchanged, and a negative
/// `delta` behaves like zero.
pub trait Simplify {
    type Output;

    /// Returns the simplified representation of a path.
    ///
    /// # Examples
    ///
    /// ```
    /// use geotrajectory::algorithm::Simplify;
    /// use geotrajectory::scalar::{LineString, XYZM};
    ///
    /// let line_string = LineString::from_coords(vec![
    ///     XYZM::new(0.0, 0.0, 0.0, 0.0),
    ///     XYZM::new(5.0, 4.0, 0.0, 1.0),
    ///     XYZM::new(11.0, 5.5, 0.0, 2.0),
    ///     XYZM::new(17.3, 3.2, 0.0, 3.0),
    ///     XYZM::new(27.8, 0.1, 0.0, 4.0),
    /// ]);
    ///
    /// let simplified = line_string.simplify(1.0);
    ///
    /// let expected = LineString::from_coords(vec![
    ///     XYZM::new(0.0, 0.0, 0.0, 0.0),
    ///     XYZM::new(5.0, 4.0, 0.0, 1.0),
    ///     XYZM::new(11.0, 5.5, 0.0, 2.0),
    ///     XYZM::new(27.8, 0.1, 0.0, 4.0),
    /// ]);
    ///
    /// assert_eq!(expected, simplified);
    /// ```
    fn simplify(&self, delta: f64) -> Self::Output;
}

impl<C: Elevated> Simplify for CoordSequence<C> {
    type Output = Self;

    fn simplify(&self, delta: f64) -> Self {
        simplify_sequence(self, delta)
    }
}

impl<C: Elevated> Simplify for LineString<C> {
    type Output = Self;

    fn simplify(&self, delta: f64) -> Self {
        LineString::from_sequence(simplify_sequence(self.coords(), delta))
    }
}

/// A half-open range `[begin, end)` of the input still to be examined, and the position in the
/// output where its pivot belongs.
#[derive(Debug)]
struct PendingRange {
    begin: usize,
    end: usize,
    insert_pos: usize,
}

fn rescale<C: Elevated>(coord: C) -> C {
    let z = coord.z() / EARTH_EQUATORIAL_PERIMETER_DEG;
    coord.with_z(z)
}

fn simplify_sequence<C: Elevated>(coords: &CoordSequence<C>, delta: f64) -> CoordSequence<C> {
    let original = coords.coords();
    let num_coords = original.len();
    if num_coords < 3 {
        return coords.clone();
    }

    let rescaled: Vec<C> = original.iter().copied().map(rescale).collect();

    let mut output = CoordSequence::with_capacity(num_coords, coords.is_closed());
    output.push(original[0]);
    output.push(original[num_coords - 1]);

    let mut stack = vec![PendingRange {
        begin: 0,
        end: num_coords,
        insert_pos: 1,
    }];

    while let Some(range) = stack.pop() {
        let a = &rescaled[range.begin];
        let b = &rescaled[range.end - 1];

        // The endpoints are at distance zero and can never be the pivot.
        let mut max_dist = 0.;
        let mut pivot = None;
        for (i, coord) in rescaled
            .iter()
            .enumerate()
            .take(range.end - 1)
            .skip(range.begin + 1)
        {
            let dist = coord.distance_to_segment(a, b);
            if dist > delta && dist > max_dist {
                max_dist = dist;
                pivot = Some(i);
            }
        }

        if let Some(pivot) = pivot {
            trace!(
                "Keeping coordinate {pivot} of [{}, {}) at distance {max_dist}",
                range.begin,
                range.end
            );
            output.insert(range.insert_pos, original[pivot]);

            // The right range is pushed last so that it is fully resolved before the left one,
            // whose insertions would otherwise shift its insert position.
            stack.push(PendingRange {
                begin: range.begin,
                end: pivot + 1,
                insert_pos: range.insert_pos,
            });
            stack.push(PendingRange {
                begin: pivot,
                end: range.end,
                insert_pos: range.insert_pos + 1,
            });
        }
    }

    debug!(
        "Simplified {num_coords} coordinates to {} with delta {delta}",
        output.len()
    );
    output
}
