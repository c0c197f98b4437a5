//! Encoding of WKB LineStrings.

mod linestring;
mod options;

pub use linestring::{line_string_wkb_size, write_line_string_as_wkb};
pub use options::WkbWriteOptions;
