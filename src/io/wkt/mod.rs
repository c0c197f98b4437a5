//! Reading and writing LineStrings in the well-known text notation.
//!
//! The dimensional suffix is written glued to the tag, `LINESTRINGZM (1 2 3 4, 5 6 7 8)`. On
//! input, the space-separated form `LINESTRING ZM (...)` is accepted as well.

pub(crate) mod reader;
pub(crate) mod writer;

pub use reader::{read_any_line_string_wkt, read_line_string_wkt};
pub use writer::write_line_string_as_wkt;

const LINESTRING_TAG: &str = "LINESTRING";
const EMPTY_KEYWORD: &str = "EMPTY";
