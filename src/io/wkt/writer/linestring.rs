use std::fmt::Write;

use geo_traits::{CoordTrait, GeometryTrait, LineStringTrait};

use crate::datatypes::Dimension;
use crate::error::{GeoTrajectoryError, Result};
use crate::io::wkt::{EMPTY_KEYWORD, LINESTRING_TAG};

/// Write a LineString as WKT, e.g. `LINESTRINGZ (0 0 10, 1 1 20)`.
///
/// Ordinates are written in x, y, z, m order with the shortest representation that reads back
/// to the same value. Non-finite ordinates have no WKT representation and are rejected before
/// anything is written.
pub fn write_line_string_as_wkt<W: Write>(
    out: &mut W,
    geom: &impl LineStringTrait<T = f64>,
) -> Result<()> {
    let dim: Dimension = geom.dim().try_into()?;

    for (coord_idx, coord) in geom.coords().enumerate() {
        if let Some(n) = (0..dim.size()).find(|n| !coord.nth_or_panic(*n).is_finite()) {
            return Err(GeoTrajectoryError::BadGeometry(format!(
                "ordinate {n} of coordinate {coord_idx} is {}",
                coord.nth_or_panic(n)
            )));
        }
    }

    write_checked(out, geom, dim).map_err(|err| GeoTrajectoryError::Wkt(err.to_string()))
}

fn write_checked<W: Write>(
    out: &mut W,
    geom: &impl LineStringTrait<T = f64>,
    dim: Dimension,
) -> std::fmt::Result {
    write!(out, "{LINESTRING_TAG}{} ", dim.wkt_suffix())?;

    if geom.num_coords() == 0 {
        return out.write_str(EMPTY_KEYWORD);
    }

    out.write_char('(')?;
    for (coord_idx, coord) in geom.coords().enumerate() {
        if coord_idx > 0 {
            out.write_str(", ")?;
        }
        for n in 0..dim.size() {
            if n > 0 {
                out.write_char(' ')?;
            }
            write!(out, "{}", coord.nth_or_panic(n))?;
        }
    }
    out.write_char(')')
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::io::wkt::{read_any_line_string_wkt, read_line_string_wkt};
    use crate::scalar::{LineString, XY, XYM, XYZ, XYZM};
    use crate::test::linestring::{ls_xy, ls_xym, ls_xyz, ls_xyzm};

    #[test]
    fn writes_suffix_and_ordinates() {
        let ls = LineString::from_coords(vec![XY::new(0., 1.5), XY::new(-2., 3.)]);
        assert_eq!(ls.to_wkt().unwrap(), "LINESTRING (0 1.5, -2 3)");

        let ls = LineString::from_coords(vec![XYZ::new(0., 1., 2.)]);
        assert_eq!(ls.to_wkt().unwrap(), "LINESTRINGZ (0 1 2)");

        let ls = LineString::from_coords(vec![XYM::new(0., 0., 0.), XYM::new(10., 0., 10.)]);
        assert_eq!(ls.to_wkt().unwrap(), "LINESTRINGM (0 0 0, 10 0 10)");

        let ls = LineString::from_coords(vec![XYZM::new(1., 2., 3., 4.)]);
        assert_eq!(ls.to_wkt().unwrap(), "LINESTRINGZM (1 2 3 4)");
    }

    #[test]
    fn writes_empty() {
        let ls: LineString<XYZ> = LineString::new();
        assert_eq!(ls.to_wkt().unwrap(), "LINESTRINGZ EMPTY");
        assert_eq!(read_line_string_wkt(&ls.to_wkt().unwrap()).unwrap(), Some(ls));
    }

    #[test]
    fn non_finite_is_bad_geometry() {
        let ls = LineString::from_coords(vec![XYM::new(0., 0., 0.), XYM::new(1., f64::NAN, 1.)]);
        let err = ls.to_wkt().unwrap_err();
        assert!(matches!(err, GeoTrajectoryError::BadGeometry(_)));

        let ls = LineString::from_coords(vec![XY::new(f64::INFINITY, 0.)]);
        assert!(matches!(
            ls.to_wkt(),
            Err(GeoTrajectoryError::BadGeometry(_))
        ));
    }

    #[test]
    fn round_trip_all_dimensions() {
        assert_eq!(
            read_line_string_wkt(&ls_xy().to_wkt().unwrap()).unwrap(),
            Some(ls_xy())
        );
        assert_eq!(
            read_line_string_wkt(&ls_xyz().to_wkt().unwrap()).unwrap(),
            Some(ls_xyz())
        );
        assert_eq!(
            read_line_string_wkt(&ls_xym().to_wkt().unwrap()).unwrap(),
            Some(ls_xym())
        );
        assert_eq!(
            read_line_string_wkt(&ls_xyzm().to_wkt().unwrap()).unwrap(),
            Some(ls_xyzm())
        );
    }

    #[test]
    fn round_trip_awkward_values() {
        let ls = LineString::from_coords(vec![
            XYZM::new(0.1 + 0.2, -1e-300, 1e300, f64::MIN_POSITIVE),
            XYZM::new(-0., f64::MAX, f64::MIN, 1. / 3.),
        ]);
        let text = ls.to_wkt().unwrap();
        assert_eq!(read_line_string_wkt(&text).unwrap(), Some(ls));
    }

    #[test]
    fn type_guard_across_kinds() {
        let texts = [
            ls_xy().to_wkt().unwrap(),
            ls_xyz().to_wkt().unwrap(),
            ls_xym().to_wkt().unwrap(),
            ls_xyzm().to_wkt().unwrap(),
        ];
        let dims = [
            Dimension::XY,
            Dimension::XYZ,
            Dimension::XYM,
            Dimension::XYZM,
        ];
        for (text, dim) in texts.iter().zip(dims) {
            assert_eq!(
                read_line_string_wkt::<XY>(text).unwrap().is_some(),
                dim == Dimension::XY
            );
            assert_eq!(
                read_line_string_wkt::<XYZ>(text).unwrap().is_some(),
                dim == Dimension::XYZ
            );
            assert_eq!(
                read_line_string_wkt::<XYM>(text).unwrap().is_some(),
                dim == Dimension::XYM
            );
            assert_eq!(
                read_line_string_wkt::<XYZM>(text).unwrap().is_some(),
                dim == Dimension::XYZM
            );
            assert_eq!(
                read_any_line_string_wkt(text).unwrap().unwrap().dimension(),
                dim
            );
        }
    }
}
