//! Text and binary encodings of LineStrings, and interoperability with the `geo` crate.

pub mod geo;
pub mod wkb;
pub mod wkt;
