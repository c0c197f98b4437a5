//! Decoding of WKB LineStrings.

mod cursor;
mod linestring;

pub(crate) use cursor::WkbCursor;
pub use linestring::{read_any_line_string, read_line_string};
