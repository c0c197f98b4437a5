mod scalar;

pub use scalar::AnyLineString;
