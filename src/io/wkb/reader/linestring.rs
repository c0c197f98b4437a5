use log::{debug, trace};

use crate::error::{GeoTrajectoryError, Result};
use crate::io::wkb::common::WKBType;
use crate::io::wkb::reader::WkbCursor;
use crate::scalar::{AnyLineString, CoordSequence, Coordinate, LineString};

/// Read the byte-order marker and the type code.
///
/// Returns `None` when the type code is not one of the LineString codes.
fn read_header(buf: &[u8]) -> Result<Option<(WkbCursor<'_>, WKBType)>> {
    let mut cursor = WkbCursor::new(buf)?;
    let code = cursor.read_u32()?;
    trace!("WKB type code {code} ({:?})", cursor.byte_order());
    match WKBType::from_code(code) {
        Some(wkb_type) => Ok(Some((cursor, wkb_type))),
        None => {
            debug!("WKB type code {code} is not a LineString");
            Ok(None)
        }
    }
}

/// Decode the coordinate count and the flat coordinate array.
///
/// The cursor must be positioned right after the type code.
pub(crate) fn read_coord_sequence<C: Coordinate>(
    cursor: &mut WkbCursor,
    closed: bool,
) -> Result<CoordSequence<C>> {
    let num_points = cursor.read_u32()? as usize;
    let dim_size = C::DIMENSION.size();

    // Checked up front so that a corrupt count cannot trigger a huge allocation.
    let fits = num_points
        .checked_mul(dim_size * 8)
        .is_some_and(|needed| needed <= cursor.remaining());
    if !fits {
        return Err(GeoTrajectoryError::Wkb(format!(
            "Buffer too short for {num_points} {} coordinates",
            C::DIMENSION
        )));
    }

    let mut coords = CoordSequence::with_capacity(num_points, closed);
    let mut ordinates = [0.; 4];
    for _ in 0..num_points {
        for ordinate in ordinates.iter_mut().take(dim_size) {
            *ordinate = cursor.read_f64()?;
        }
        coords.push(C::from_ordinates(ordinates));
    }
    Ok(coords)
}

/// Decode a WKB LineString of coordinate kind `C`.
///
/// Returns `Ok(None)` when the buffer holds another geometry type or another coordinate kind.
pub fn read_line_string<C: Coordinate>(buf: &[u8]) -> Result<Option<LineString<C>>> {
    let Some((mut cursor, wkb_type)) = read_header(buf)? else {
        return Ok(None);
    };
    if wkb_type.dimension() != C::DIMENSION {
        debug!(
            "WKB LineString has dimension {}, expected {}",
            wkb_type.dimension(),
            C::DIMENSION
        );
        return Ok(None);
    }
    Ok(Some(LineString::from_sequence(read_coord_sequence(
        &mut cursor,
        false,
    )?)))
}

/// Decode a WKB LineString of whichever coordinate kind its type code names.
///
/// Returns `Ok(None)` for a type code that is not a LineString code.
pub fn read_any_line_string(buf: &[u8]) -> Result<Option<AnyLineString>> {
    let Some((mut cursor, wkb_type)) = read_header(buf)? else {
        return Ok(None);
    };
    let line_string = match wkb_type {
        WKBType::LineString => {
            AnyLineString::XY(LineString::from_sequence(read_coord_sequence(
                &mut cursor,
                false,
            )?))
        }
        WKBType::LineStringZ => {
            AnyLineString::XYZ(LineString::from_sequence(read_coord_sequence(
                &mut cursor,
                false,
            )?))
        }
        WKBType::LineStringM => {
            AnyLineString::XYM(LineString::from_sequence(read_coord_sequence(
                &mut cursor,
                false,
            )?))
        }
        WKBType::LineStringZM => {
            AnyLineString::XYZM(LineString::from_sequence(read_coord_sequence(
                &mut cursor,
                false,
            )?))
        }
    };
    Ok(Some(line_string))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::scalar::{XY, XYM, XYZ, XYZM};

    /// Big endian LineStringZ with two coordinates, built by hand.
    fn big_endian_xyz() -> Vec<u8> {
        let mut buf = vec![0];
        buf.extend_from_slice(&1002u32.to_be_bytes());
        buf.extend_from_slice(&2u32.to_be_bytes());
        for v in [1., 2., 3., 4., 5., 6.] {
            buf.extend_from_slice(&f64::to_be_bytes(v));
        }
        buf
    }

    #[test]
    fn reads_big_endian() {
        let ls = read_line_string::<XYZ>(&big_endian_xyz()).unwrap().unwrap();
        assert_eq!(
            ls.coords().coords(),
            &[XYZ::new(1., 2., 3.), XYZ::new(4., 5., 6.)]
        );
        assert!(!ls.coords().is_closed());
    }

    #[test]
    fn any_dispatches_on_type_code() {
        let any = read_any_line_string(&big_endian_xyz()).unwrap().unwrap();
        assert!(matches!(any, AnyLineString::XYZ(_)));
        assert_eq!(any.num_coords(), 2);
    }

    #[test]
    fn kind_mismatch_is_none() {
        let buf = big_endian_xyz();
        assert!(read_line_string::<XY>(&buf).unwrap().is_none());
        assert!(read_line_string::<XYM>(&buf).unwrap().is_none());
        assert!(read_line_string::<XYZM>(&buf).unwrap().is_none());
    }

    #[test]
    fn unsupported_type_code_is_none() {
        // A little endian WKB Point
        let mut buf = vec![1];
        buf.extend_from_slice(&1u32.to_le_bytes());
        buf.extend_from_slice(&0f64.to_le_bytes());
        buf.extend_from_slice(&0f64.to_le_bytes());
        assert!(read_any_line_string(&buf).unwrap().is_none());
        assert!(read_line_string::<XY>(&buf).unwrap().is_none());
    }

    #[test]
    fn truncated_coordinates_are_an_error() {
        let mut buf = big_endian_xyz();
        buf.truncate(buf.len() - 4);
        assert!(matches!(
            read_line_string::<XYZ>(&buf),
            Err(GeoTrajectoryError::Wkb(_))
        ));
    }

    #[test]
    fn corrupt_count_is_an_error() {
        let mut buf = vec![1];
        buf.extend_from_slice(&2u32.to_le_bytes());
        buf.extend_from_slice(&u32::MAX.to_le_bytes());
        assert!(read_any_line_string(&buf).is_err());
    }

    #[test]
    fn ewkb_type_code() {
        let mut buf = vec![1];
        buf.extend_from_slice(&0x4000_0002u32.to_le_bytes());
        buf.extend_from_slice(&1u32.to_le_bytes());
        for v in [10., 20., 30.] {
            buf.extend_from_slice(&f64::to_le_bytes(v));
        }
        let ls = read_line_string::<XYM>(&buf).unwrap().unwrap();
        assert_eq!(ls.coords().coords(), &[XYM::new(10., 20., 30.)]);
    }
}
