use log::trace;

use crate::scalar::{CoordSequence, LineString, Measured};

/// Locates the position of a timed path at a given time.
///
/// Coordinates are expected in non-decreasing time order. The time is searched for by bisection,
/// and the position between the two samples bracketing it is linearly interpolated.
///
/// Returns `None` for an empty path and for a time outside the range covered by the first and
/// last samples (a `NaN` time included). Asking for the time of any sample returns that sample
/// unchanged.
pub trait LocateAtTime {
    type Output;

    /// Returns the position at `time`.
    ///
    /// # Examples
    ///
    /// ```
    /// use geotrajectory::algorithm::LocateAtTime;
    /// use geotrajectory::scalar::{LineString, XYM};
    ///
    /// let path = LineString::<XYM>::from_wkt("LINESTRINGM (0 0 0, 10 0 10)")
    ///     .unwrap()
    ///     .unwrap();
    ///
    /// assert_eq!(path.locate_at_time(5.), Some(XYM::new(5., 0., 5.)));
    /// assert_eq!(path.locate_at_time(11.), None);
    /// ```
    fn locate_at_time(&self, time: f64) -> Option<Self::Output>;
}

impl<C: Measured> LocateAtTime for CoordSequence<C> {
    type Output = C;

    fn locate_at_time(&self, time: f64) -> Option<C> {
        locate(self.coords(), time)
    }
}

impl<C: Measured> LocateAtTime for LineString<C> {
    type Output = C;

    fn locate_at_time(&self, time: f64) -> Option<C> {
        locate(self.coords().coords(), time)
    }
}

fn locate<C: Measured>(coords: &[C], time: f64) -> Option<C> {
    let (first, last) = (coords.first()?, coords.last()?);
    if !(first.m() <= time && time <= last.m()) {
        trace!("Time {time} is outside [{}, {}]", first.m(), last.m());
        return None;
    }
    Some(bisect(coords, time))
}

/// Bisect a non-empty slice whose first and last times enclose `time`.
fn bisect<C: Measured>(coords: &[C], time: f64) -> C {
    let mut begin = 0;
    let mut end = coords.len() - 1;
    loop {
        let delta = end - begin;
        let mid = begin + delta / 2;
        let coord = coords[mid];
        if coord.m() == time || delta == 0 {
            return coord;
        }
        if delta == 1 {
            let to = coords[end];
            if to.m() == time {
                return to;
            }
            return interpolate_at(&coord, &to, time);
        }

        // With at least two steps between them, mid is strictly inside the bracket.
        if time < coord.m() {
            end = mid;
        } else {
            begin = mid;
        }
        trace!("Narrowed bracket to [{begin}, {end}]");
    }
}

/// The position between `from` and `to` at `time`, stamped with `time`.
///
/// When both samples share a time the position of `from` is used.
pub(crate) fn interpolate_at<C: Measured>(from: &C, to: &C, time: f64) -> C {
    let span = to.m() - from.m();
    let proportion = if span == 0. {
        0.
    } else {
        (time - from.m()) / span
    };
    C::interpolate(from, to, proportion, time)
}

#[cfg(test)]
mod test {
    use approx::assert_relative_eq;

    use super::*;
    use crate::scalar::{XYM, XYZM};
    use crate::test::linestring::{ls_xym, trajectory};

    #[test]
    fn midpoint() {
        let ls = LineString::from_coords(vec![
            XYZM::new(0., 0., 0., 0.),
            XYZM::new(10., 10., 100., 10.),
        ]);
        assert_eq!(ls.locate_at_time(5.), Some(XYZM::new(5., 5., 50., 5.)));
    }

    #[test]
    fn parsed_measured_path() {
        let ls = LineString::<XYM>::from_wkt("LINESTRINGM (0 0 0, 10 0 10)")
            .unwrap()
            .unwrap();
        assert_eq!(ls.locate_at_time(5.), Some(XYM::new(5., 0., 5.)));
    }

    #[test]
    fn samples_are_returned_unchanged() {
        let ls = trajectory();
        for coord in ls.coords() {
            assert_eq!(ls.locate_at_time(coord.m), Some(*coord));
        }

        let ls = ls_xym();
        for coord in ls.coords() {
            assert_eq!(ls.locate_at_time(coord.m), Some(*coord));
        }
    }

    #[test]
    fn between_samples() {
        let ls = ls_xym();
        // Halfway between (1, 2) at 10 and (3, 4) at 25
        let located = ls.locate_at_time(17.5).unwrap();
        assert_relative_eq!(located.x, 2.);
        assert_relative_eq!(located.y, 3.);
        assert_eq!(located.m, 17.5);
    }

    #[test]
    fn interpolated_times_stay_in_bracket() {
        let ls = trajectory();
        let coords = ls.coords().coords();
        for pair in coords.windows(2) {
            let time = (pair[0].m + pair[1].m) / 2.;
            let located = ls.locate_at_time(time).unwrap();
            assert_eq!(located.m, time);
            let (lo, hi) = if pair[0].z < pair[1].z {
                (pair[0].z, pair[1].z)
            } else {
                (pair[1].z, pair[0].z)
            };
            assert!(lo <= located.z && located.z <= hi);
        }
    }

    #[test]
    fn outside_range() {
        let ls = ls_xym();
        assert_eq!(ls.locate_at_time(-0.1), None);
        assert_eq!(ls.locate_at_time(25.1), None);
        assert_eq!(ls.locate_at_time(f64::NAN), None);
    }

    #[test]
    fn empty_path() {
        let ls: LineString<XYM> = LineString::new();
        assert_eq!(ls.locate_at_time(0.), None);
    }

    #[test]
    fn single_sample() {
        let ls = LineString::from_coords(vec![XYM::new(1., 2., 3.)]);
        assert_eq!(ls.locate_at_time(3.), Some(XYM::new(1., 2., 3.)));
        assert_eq!(ls.locate_at_time(3.5), None);
    }

    #[test]
    fn repeated_times() {
        let ls = LineString::from_coords(vec![
            XYM::new(0., 0., 0.),
            XYM::new(1., 0., 5.),
            XYM::new(2., 0., 5.),
            XYM::new(3., 0., 10.),
        ]);
        let located = ls.locate_at_time(5.).unwrap();
        assert_eq!(located.m, 5.);
        assert!(located == ls.coords()[1] || located == ls.coords()[2]);
    }

    #[test]
    fn equal_times_use_first_position() {
        let from = XYZM::new(1., 2., 3., 7.);
        let to = XYZM::new(4., 5., 6., 7.);
        assert_eq!(interpolate_at(&from, &to, 7.), from);
    }

    #[test]
    fn sequence_and_line_string_agree() {
        let ls = trajectory();
        for time in [0., 100., 1234.5, 3000.] {
            assert_eq!(ls.locate_at_time(time), ls.coords().locate_at_time(time));
        }
    }
}
