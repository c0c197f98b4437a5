use geo_traits::CoordTrait;
use serde::{Deserialize, Serialize};

use crate::datatypes::Dimension;
use crate::scalar::coord::{segment_distance, Coordinate};

/// A planar coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct XY {
    pub x: f64,
    pub y: f64,
}

impl XY {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl CoordTrait for XY {
    type T = f64;

    fn dim(&self) -> geo_traits::Dimensions {
        geo_traits::Dimensions::Xy
    }

    fn nth_or_panic(&self, n: usize) -> Self::T {
        match n {
            0 => self.x,
            1 => self.y,
            _ => panic!("XY coordinate has no ordinate {n}"),
        }
    }

    fn x(&self) -> Self::T {
        self.x
    }

    fn y(&self) -> Self::T {
        self.y
    }
}

impl Coordinate for XY {
    const DIMENSION: Dimension = Dimension::XY;

    fn from_ordinates(ordinates: [f64; 4]) -> Self {
        Self::new(ordinates[0], ordinates[1])
    }

    fn distance_to_segment(&self, a: &Self, b: &Self) -> f64 {
        segment_distance([self.x, self.y], [a.x, a.y], [b.x, b.y])
    }
}

impl From<geo::Coord> for XY {
    fn from(value: geo::Coord) -> Self {
        Self::new(value.x, value.y)
    }
}

impl From<XY> for geo::Coord {
    fn from(value: XY) -> Self {
        geo::Coord {
            x: value.x,
            y: value.y,
        }
    }
}
