use geo_traits::CoordTrait;
use serde::{Deserialize, Serialize};

use crate::datatypes::Dimension;
use crate::scalar::coord::{lerp, segment_distance, Coordinate, Elevated, Measured};

/// A trajectory sample: position, elevation and time.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct XYZM {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub m: f64,
}

impl XYZM {
    pub fn new(x: f64, y: f64, z: f64, m: f64) -> Self {
        Self { x, y, z, m }
    }
}

impl CoordTrait for XYZM {
    type T = f64;

    fn dim(&self) -> geo_traits::Dimensions {
        geo_traits::Dimensions::Xyzm
    }

    fn nth_or_panic(&self, n: usize) -> Self::T {
        match n {
            0 => self.x,
            1 => self.y,
            2 => self.z,
            3 => self.m,
            _ => panic!("XYZM coordinate has no ordinate {n}"),
        }
    }

    fn x(&self) -> Self::T {
        self.x
    }

    fn y(&self) -> Self::T {
        self.y
    }
}

impl Coordinate for XYZM {
    const DIMENSION: Dimension = Dimension::XYZM;

    fn from_ordinates(ordinates: [f64; 4]) -> Self {
        Self::new(ordinates[0], ordinates[1], ordinates[2], ordinates[3])
    }

    fn distance_to_segment(&self, a: &Self, b: &Self) -> f64 {
        segment_distance(
            [self.x, self.y, self.z],
            [a.x, a.y, a.z],
            [b.x, b.y, b.z],
        )
    }
}

impl Elevated for XYZM {
    fn z(&self) -> f64 {
        self.z
    }

    fn with_z(self, z: f64) -> Self {
        Self { z, ..self }
    }
}

impl Measured for XYZM {
    fn m(&self) -> f64 {
        self.m
    }

    fn interpolate(from: &Self, to: &Self, proportion: f64, m: f64) -> Self {
        Self::new(
            lerp(from.x, to.x, proportion),
            lerp(from.y, to.y, proportion),
            lerp(from.z, to.z, proportion),
            m,
        )
    }
}
