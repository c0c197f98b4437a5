use geo_traits::CoordTrait;
use serde::{Deserialize, Serialize};

use crate::datatypes::Dimension;
use crate::scalar::coord::{lerp, segment_distance, Coordinate, Measured};

/// A planar coordinate stamped with a time measure.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct XYM {
    pub x: f64,
    pub y: f64,
    pub m: f64,
}

impl XYM {
    pub fn new(x: f64, y: f64, m: f64) -> Self {
        Self { x, y, m }
    }
}

impl CoordTrait for XYM {
    type T = f64;

    fn dim(&self) -> geo_traits::Dimensions {
        geo_traits::Dimensions::Xym
    }

    fn nth_or_panic(&self, n: usize) -> Self::T {
        match n {
            0 => self.x,
            1 => self.y,
            2 => self.m,
            _ => panic!("XYM coordinate has no ordinate {n}"),
        }
    }

    fn x(&self) -> Self::T {
        self.x
    }

    fn y(&self) -> Self::T {
        self.y
    }
}

impl Coordinate for XYM {
    const DIMENSION: Dimension = Dimension::XYM;

    fn from_ordinates(ordinates: [f64; 4]) -> Self {
        Self::new(ordinates[0], ordinates[1], ordinates[2])
    }

    fn distance_to_segment(&self, a: &Self, b: &Self) -> f64 {
        segment_distance([self.x, self.y], [a.x, a.y], [b.x, b.y])
    }
}

impl Measured for XYM {
    fn m(&self) -> f64 {
        self.m
    }

    fn interpolate(from: &Self, to: &Self, proportion: f64, m: f64) -> Self {
        Self::new(
            lerp(from.x, to.x, proportion),
            lerp(from.y, to.y, proportion),
            m,
        )
    }
}
