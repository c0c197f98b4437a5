mod scalar;

pub use scalar::LineString;
