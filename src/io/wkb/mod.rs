//! Reading and writing ISO-flavored WKB-encoded LineStrings.
//!
//! A buffer starts with a byte-order marker, followed by the type code, the coordinate count
//! and the flat coordinate array, all in the marker's byte order.

mod common;
pub(crate) mod reader;
pub(crate) mod writer;

pub use common::{Endianness, WKBType};
pub use reader::{read_any_line_string, read_line_string};
pub use writer::{line_string_wkb_size, write_line_string_as_wkb, WkbWriteOptions};
