use geo_traits::{GeometryTrait, LineStringTrait};
use serde::{Deserialize, Serialize};

use crate::datatypes::Dimension;
use crate::error::Result;
use crate::io::wkb::{read_line_string, write_line_string_as_wkb, WkbWriteOptions};
use crate::io::wkt::{read_line_string_wkt, write_line_string_as_wkt};
use crate::scalar::coord::Coordinate;
use crate::scalar::CoordSequence;

/// An open path over a single coordinate kind.
///
/// This implements [LineStringTrait], which you can use to extract data.
///
/// Equality is the equality of the owned [`CoordSequence`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineString<C: Coordinate> {
    coords: CoordSequence<C>,
}

impl<C: Coordinate> LineString<C> {
    /// Create an empty, open LineString.
    pub fn new() -> Self {
        Self {
            coords: CoordSequence::new(false),
        }
    }

    /// Create an open LineString over the given coordinates.
    pub fn from_coords(coords: Vec<C>) -> Self {
        Self {
            coords: CoordSequence::from_coords(coords, false),
        }
    }

    pub fn from_sequence(coords: CoordSequence<C>) -> Self {
        Self { coords }
    }

    /// Append a coordinate, returning `self` for chaining.
    pub fn add_coord(&mut self, coord: C) -> &mut Self {
        self.coords.push(coord);
        self
    }

    pub fn coords(&self) -> &CoordSequence<C> {
        &self.coords
    }

    pub fn into_inner(self) -> CoordSequence<C> {
        self.coords
    }

    /// The coordinate kind of this LineString.
    pub fn dimension(&self) -> Dimension {
        C::DIMENSION
    }

    /// Encode as text, e.g. `LINESTRINGZ (0 0 10, 1 1 20)`.
    ///
    /// Fails with [`BadGeometry`][crate::error::GeoTrajectoryError::BadGeometry] when a
    /// coordinate is not finite.
    pub fn to_wkt(&self) -> Result<String> {
        let mut out = String::new();
        write_line_string_as_wkt(&mut out, self)?;
        Ok(out)
    }

    /// Decode text of this LineString's coordinate kind.
    ///
    /// Returns `Ok(None)` when the text describes another geometry type or another coordinate
    /// kind, and an error when it is malformed.
    pub fn from_wkt(text: &str) -> Result<Option<Self>> {
        read_line_string_wkt(text)
    }

    /// Encode as binary.
    pub fn to_wkb(&self, options: &WkbWriteOptions) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        write_line_string_as_wkb(&mut out, self, options)?;
        Ok(out)
    }

    /// Decode binary of this LineString's coordinate kind.
    ///
    /// Returns `Ok(None)` for an unsupported type code or another coordinate kind.
    pub fn from_wkb(buf: &[u8]) -> Result<Option<Self>> {
        read_line_string(buf)
    }
}

impl<C: Coordinate> Default for LineString<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Coordinate> From<CoordSequence<C>> for LineString<C> {
    fn from(value: CoordSequence<C>) -> Self {
        Self::from_sequence(value)
    }
}

impl<C: Coordinate> FromIterator<C> for LineString<C> {
    fn from_iter<T: IntoIterator<Item = C>>(iter: T) -> Self {
        Self::from_coords(iter.into_iter().collect())
    }
}

impl<C: Coordinate> LineStringTrait for LineString<C> {
    type CoordType<'b>
        = C
    where
        Self: 'b;

    fn num_coords(&self) -> usize {
        self.coords.len()
    }

    unsafe fn coord_unchecked(&self, i: usize) -> Self::CoordType<'_> {
        *self.coords.coords().get_unchecked(i)
    }
}

impl<C: Coordinate> GeometryTrait for LineString<C> {
    type T = f64;
    type PointType<'b>
        = geo_traits::UnimplementedPoint<f64>
    where
        Self: 'b;
    type LineStringType<'b>
        = LineString<C>
    where
        Self: 'b;
    type PolygonType<'b>
        = geo_traits::UnimplementedPolygon<f64>
    where
        Self: 'b;
    type MultiPointType<'b>
        = geo_traits::UnimplementedMultiPoint<f64>
    where
        Self: 'b;
    type MultiLineStringType<'b>
        = geo_traits::UnimplementedMultiLineString<f64>
    where
        Self: 'b;
    type MultiPolygonType<'b>
        = geo_traits::UnimplementedMultiPolygon<f64>
    where
        Self: 'b;
    type GeometryCollectionType<'b>
        = geo_traits::UnimplementedGeometryCollection<f64>
    where
        Self: 'b;
    type RectType<'b>
        = geo_traits::UnimplementedRect<f64>
    where
        Self: 'b;
    type LineType<'b>
        = geo_traits::UnimplementedLine<f64>
    where
        Self: 'b;
    type TriangleType<'b>
        = geo_traits::UnimplementedTriangle<f64>
    where
        Self: 'b;

    fn dim(&self) -> geo_traits::Dimensions {
        C::DIMENSION.into()
    }

    fn as_type(
        &self,
    ) -> geo_traits::GeometryType<
        '_,
        Self::PointType<'_>,
        Self::LineStringType<'_>,
        Self::PolygonType<'_>,
        Self::MultiPointType<'_>,
        Self::MultiLineStringType<'_>,
        Self::MultiPolygonType<'_>,
        Self::GeometryCollectionType<'_>,
        Self::RectType<'_>,
        Self::TriangleType<'_>,
        Self::LineType<'_>,
    > {
        geo_traits::GeometryType::LineString(self)
    }
}
