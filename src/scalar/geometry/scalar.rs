use crate::datatypes::Dimension;
use crate::error::Result;
use crate::io::wkb::{read_any_line_string, WkbWriteOptions};
use crate::io::wkt::read_any_line_string_wkt;
use crate::scalar::{LineString, XY, XYM, XYZ, XYZM};

/// A LineString of any of the four coordinate kinds.
///
/// This is what decoding produces when the caller does not know the coordinate kind ahead of
/// time.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyLineString {
    XY(LineString<XY>),
    XYZ(LineString<XYZ>),
    XYM(LineString<XYM>),
    XYZM(LineString<XYZM>),
}

impl AnyLineString {
    pub fn dimension(&self) -> Dimension {
        match self {
            AnyLineString::XY(_) => Dimension::XY,
            AnyLineString::XYZ(_) => Dimension::XYZ,
            AnyLineString::XYM(_) => Dimension::XYM,
            AnyLineString::XYZM(_) => Dimension::XYZM,
        }
    }

    pub fn num_coords(&self) -> usize {
        match self {
            AnyLineString::XY(ls) => ls.coords().len(),
            AnyLineString::XYZ(ls) => ls.coords().len(),
            AnyLineString::XYM(ls) => ls.coords().len(),
            AnyLineString::XYZM(ls) => ls.coords().len(),
        }
    }

    pub fn to_wkt(&self) -> Result<String> {
        match self {
            AnyLineString::XY(ls) => ls.to_wkt(),
            AnyLineString::XYZ(ls) => ls.to_wkt(),
            AnyLineString::XYM(ls) => ls.to_wkt(),
            AnyLineString::XYZM(ls) => ls.to_wkt(),
        }
    }

    /// Decode text of any coordinate kind.
    ///
    /// Returns `Ok(None)` when the text is not a LineString.
    pub fn from_wkt(text: &str) -> Result<Option<Self>> {
        read_any_line_string_wkt(text)
    }

    pub fn to_wkb(&self, options: &WkbWriteOptions) -> Result<Vec<u8>> {
        match self {
            AnyLineString::XY(ls) => ls.to_wkb(options),
            AnyLineString::XYZ(ls) => ls.to_wkb(options),
            AnyLineString::XYM(ls) => ls.to_wkb(options),
            AnyLineString::XYZM(ls) => ls.to_wkb(options),
        }
    }

    /// Decode binary of any coordinate kind.
    ///
    /// Returns `Ok(None)` when the type code is not one of the four LineString codes.
    pub fn from_wkb(buf: &[u8]) -> Result<Option<Self>> {
        read_any_line_string(buf)
    }

    pub fn as_xy(&self) -> Option<&LineString<XY>> {
        match self {
            AnyLineString::XY(ls) => Some(ls),
            _ => None,
        }
    }

    pub fn as_xyz(&self) -> Option<&LineString<XYZ>> {
        match self {
            AnyLineString::XYZ(ls) => Some(ls),
            _ => None,
        }
    }

    pub fn as_xym(&self) -> Option<&LineString<XYM>> {
        match self {
            AnyLineString::XYM(ls) => Some(ls),
            _ => None,
        }
    }

    pub fn as_xyzm(&self) -> Option<&LineString<XYZM>> {
        match self {
            AnyLineString::XYZM(ls) => Some(ls),
            _ => None,
        }
    }
}

impl From<LineString<XY>> for AnyLineString {
    fn from(value: LineString<XY>) -> Self {
        AnyLineString::XY(value)
    }
}

impl From<LineString<XYZ>> for AnyLineString {
    fn from(value: LineString<XYZ>) -> Self {
        AnyLineString::XYZ(value)
    }
}

impl From<LineString<XYM>> for AnyLineString {
    fn from(value: LineString<XYM>) -> Self {
        AnyLineString::XYM(value)
    }
}

impl From<LineString<XYZM>> for AnyLineString {
    fn from(value: LineString<XYZM>) -> Self {
        AnyLineString::XYZM(value)
    }
}
