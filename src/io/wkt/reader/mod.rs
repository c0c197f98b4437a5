mod linestring;

pub use linestring::{read_any_line_string_wkt, read_line_string_wkt};
