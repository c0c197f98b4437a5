use std::str::FromStr;

use log::debug;
use wkt::types::Coord;
use wkt::Wkt;

use crate::datatypes::Dimension;
use crate::error::{GeoTrajectoryError, Result};
use crate::io::wkt::{EMPTY_KEYWORD, LINESTRING_TAG};
use crate::scalar::{AnyLineString, CoordSequence, Coordinate, LineString};

/// A parsed LineString whose coordinate kind is known but not yet checked.
struct ParsedLineString {
    dim: Dimension,
    coords: Vec<Coord<f64>>,
}

/// Parse `text` and keep it only if it is a LineString.
///
/// `LINEARRING`, which the parser folds into LineStrings, is not one here.
fn parse(text: &str) -> Result<Option<ParsedLineString>> {
    let geometry: Wkt<f64> =
        Wkt::from_str(text).map_err(|err| GeoTrajectoryError::Wkt(err.to_string()))?;
    let Wkt::LineString(line_string) = geometry else {
        debug!("WKT geometry is not a LineString");
        return Ok(None);
    };
    let has_tag = text
        .trim_start()
        .get(..LINESTRING_TAG.len())
        .is_some_and(|tag| tag.eq_ignore_ascii_case(LINESTRING_TAG));
    if !has_tag {
        debug!("WKT geometry is a LinearRing, not a LineString");
        return Ok(None);
    }

    let coords = line_string.0;
    let dim = match coords.first() {
        Some(first) => {
            check_trailing_input(text)?;
            match (first.z.is_some(), first.m.is_some()) {
                (false, false) => Dimension::XY,
                (true, false) => Dimension::XYZ,
                (false, true) => Dimension::XYM,
                (true, true) => Dimension::XYZM,
            }
        }
        None => empty_dimension(text)?,
    };
    check_finite(&coords)?;
    Ok(Some(ParsedLineString { dim, coords }))
}

/// Nothing but whitespace may follow the closing parenthesis.
fn check_trailing_input(text: &str) -> Result<()> {
    match text.split_once(')') {
        Some((_, rest)) if rest.trim().is_empty() => Ok(()),
        _ => Err(GeoTrajectoryError::Wkt(
            "unexpected trailing input".to_string(),
        )),
    }
}

/// The coordinate kind named by an `EMPTY` LineString, in either `LINESTRINGZ EMPTY` or
/// `LINESTRING Z EMPTY` form.
fn empty_dimension(text: &str) -> Result<Dimension> {
    let words: Vec<&str> = text.split_whitespace().collect();
    let suffix = match words.as_slice() {
        [tag, keyword] if keyword.eq_ignore_ascii_case(EMPTY_KEYWORD) => {
            tag.get(LINESTRING_TAG.len()..)
        }
        [_, suffix, keyword] if keyword.eq_ignore_ascii_case(EMPTY_KEYWORD) => Some(*suffix),
        _ => None,
    };
    suffix
        .and_then(Dimension::from_wkt_suffix)
        .ok_or_else(|| GeoTrajectoryError::Wkt(format!("malformed empty LineString: {text}")))
}

fn check_finite(coords: &[Coord<f64>]) -> Result<()> {
    for (i, coord) in coords.iter().enumerate() {
        let ordinates = [Some(coord.x), Some(coord.y), coord.z, coord.m];
        if let Some(value) = ordinates.into_iter().flatten().find(|v| !v.is_finite()) {
            return Err(GeoTrajectoryError::Wkt(format!(
                "coordinate {i} has non-finite ordinate {value}"
            )));
        }
    }
    Ok(())
}

/// Pack a parsed coordinate in x, y, z, m order, skipping the ordinates it lacks.
fn to_coordinate<C: Coordinate>(coord: &Coord<f64>) -> C {
    let mut ordinates = [coord.x, coord.y, 0., 0.];
    let extra = coord.z.into_iter().chain(coord.m);
    for (slot, value) in ordinates[2..].iter_mut().zip(extra) {
        *slot = value;
    }
    C::from_ordinates(ordinates)
}

fn to_line_string<C: Coordinate>(coords: &[Coord<f64>]) -> LineString<C> {
    let coords = coords.iter().map(to_coordinate).collect();
    LineString::from_sequence(CoordSequence::from_coords(coords, false))
}

/// Parse a WKT LineString of coordinate kind `C`.
///
/// Returns `Ok(None)` when the text is another geometry type or another coordinate kind, and
/// an error when the coordinate list is malformed or missing.
pub fn read_line_string_wkt<C: Coordinate>(text: &str) -> Result<Option<LineString<C>>> {
    let Some(parsed) = parse(text)? else {
        return Ok(None);
    };
    if parsed.dim != C::DIMENSION {
        debug!(
            "WKT LineString has dimension {}, expected {}",
            parsed.dim,
            C::DIMENSION
        );
        return Ok(None);
    }
    Ok(Some(to_line_string(&parsed.coords)))
}

/// Parse a WKT LineString of whichever coordinate kind its suffix names.
pub fn read_any_line_string_wkt(text: &str) -> Result<Option<AnyLineString>> {
    let Some(ParsedLineString { dim, coords }) = parse(text)? else {
        return Ok(None);
    };
    let line_string = match dim {
        Dimension::XY => AnyLineString::XY(to_line_string(&coords)),
        Dimension::XYZ => AnyLineString::XYZ(to_line_string(&coords)),
        Dimension::XYM => AnyLineString::XYM(to_line_string(&coords)),
        Dimension::XYZM => AnyLineString::XYZM(to_line_string(&coords)),
    };
    Ok(Some(line_string))
}
