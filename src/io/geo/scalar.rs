use geo::CoordNum;
use geo_traits::{CoordTrait, LineStringTrait};

use crate::scalar::{Coordinate, LineString, XY};

/// Convert any coordinate to a [`geo::Coord`].
///
/// Only the first two dimensions will be kept.
pub fn coord_to_geo<T: CoordNum>(coord: &impl CoordTrait<T = T>) -> geo::Coord<T> {
    geo::Coord {
        x: coord.x(),
        y: coord.y(),
    }
}

/// Convert any LineString to a [`geo::LineString`].
///
/// Only the first two dimensions will be kept.
pub fn line_string_to_geo<T: CoordNum>(
    line_string: &impl LineStringTrait<T = T>,
) -> geo::LineString<T> {
    geo::LineString::new(
        line_string
            .coords()
            .map(|coord| coord_to_geo(&coord))
            .collect(),
    )
}

impl<C: Coordinate> From<&LineString<C>> for geo::LineString {
    fn from(value: &LineString<C>) -> Self {
        line_string_to_geo(value)
    }
}

impl From<&geo::LineString> for LineString<XY> {
    fn from(value: &geo::LineString) -> Self {
        value.coords().map(|coord| XY::from(*coord)).collect()
    }
}

#[cfg(test)]
mod test {
    use geo::line_string;

    use super::*;
    use crate::test::linestring::ls_xyzm;

    #[test]
    fn drops_elevation_and_measure() {
        let ls = ls_xyzm();
        let geo_ls: geo::LineString = (&ls).into();
        assert_eq!(geo_ls.0.len(), ls.coords().len());
        for (geo_coord, coord) in geo_ls.coords().zip(ls.coords()) {
            assert_eq!(geo_coord.x, coord.x);
            assert_eq!(geo_coord.y, coord.y);
        }
    }

    #[test]
    fn from_geo() {
        let geo_ls = line_string![
            (x: 0., y: 1.),
            (x: 1., y: 2.)
        ];
        let ls: LineString<XY> = (&geo_ls).into();
        assert_eq!(ls.coords().coords(), &[XY::new(0., 1.), XY::new(1., 2.)]);

        let back: geo::LineString = (&ls).into();
        assert_eq!(back, geo_ls);
    }
}
