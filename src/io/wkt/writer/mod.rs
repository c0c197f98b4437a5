mod linestring;

pub use linestring::write_line_string_as_wkt;
