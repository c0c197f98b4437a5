use geo_traits::CoordTrait;
use serde::{Deserialize, Serialize};

use crate::datatypes::Dimension;
use crate::scalar::coord::{segment_distance, Coordinate, Elevated};

/// A coordinate with an elevation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct XYZ {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl XYZ {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl CoordTrait for XYZ {
    type T = f64;

    fn dim(&self) -> geo_traits::Dimensions {
        geo_traits::Dimensions::Xyz
    }

    fn nth_or_panic(&self, n: usize) -> Self::T {
        match n {
            0 => self.x,
            1 => self.y,
            2 => self.z,
            _ => panic!("XYZ coordinate has no ordinate {n}"),
        }
    }

    fn x(&self) -> Self::T {
        self.x
    }

    fn y(&self) -> Self::T {
        self.y
    }
}

impl Coordinate for XYZ {
    const DIMENSION: Dimension = Dimension::XYZ;

    fn from_ordinates(ordinates: [f64; 4]) -> Self {
        Self::new(ordinates[0], ordinates[1], ordinates[2])
    }

    fn distance_to_segment(&self, a: &Self, b: &Self) -> f64 {
        segment_distance(
            [self.x, self.y, self.z],
            [a.x, a.y, a.z],
            [b.x, b.y, b.z],
        )
    }
}

impl Elevated for XYZ {
    fn z(&self) -> f64 {
        self.z
    }

    fn with_z(self, z: f64) -> Self {
        Self { z, ..self }
    }
}
