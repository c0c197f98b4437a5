//! Algorithms over elevated and timed paths.

mod locate;
mod simplify;

pub use locate::LocateAtTime;
pub use simplify::{
    Simplify, EARTH_EQUATORIAL_PERIMETER_DEG, EARTH_EQUATORIAL_PERIMETER_KM, EARTH_RADIUS_KM,
};
