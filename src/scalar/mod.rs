//! Contains the coordinate kinds, coordinate sequences and the LineString geometry built on them.

pub use coord::{Coordinate, Elevated, Measured, XY, XYM, XYZ, XYZM};
pub use geometry::AnyLineString;
pub use linestring::LineString;
pub use sequence::CoordSequence;

pub mod coord;
mod geometry;
mod linestring;
mod sequence;
