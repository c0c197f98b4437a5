use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};

use crate::datatypes::Dimension;
use crate::error::GeoTrajectoryError;

const EWKB_Z_FLAG: u32 = 0x8000_0000;
const EWKB_M_FLAG: u32 = 0x4000_0000;
const EWKB_SRID_FLAG: u32 = 0x2000_0000;
const EWKB_FLAGS: u32 = EWKB_Z_FLAG | EWKB_M_FLAG | EWKB_SRID_FLAG;

/// The ISO WKB type codes of the LineString geometries this crate reads and writes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
#[repr(u32)]
pub enum WKBType {
    /// A WKB LineString
    LineString = 2,
    /// A WKB LineStringZ
    LineStringZ = 1002,
    /// A WKB LineStringM
    LineStringM = 2002,
    /// A WKB LineStringZM
    LineStringZM = 3002,
}

impl WKBType {
    /// Map a type code read from a buffer.
    ///
    /// Both ISO codes and EWKB-flagged codes are understood. Returns `None` for anything that is
    /// not a LineString, and for EWKB codes carrying an SRID.
    pub fn from_code(code: u32) -> Option<Self> {
        if code & EWKB_FLAGS == 0 {
            return Self::try_from(code).ok();
        }
        if code & EWKB_SRID_FLAG != 0 || code & !EWKB_FLAGS != WKBType::LineString as u32 {
            return None;
        }
        let dim = match (code & EWKB_Z_FLAG != 0, code & EWKB_M_FLAG != 0) {
            (true, false) => Dimension::XYZ,
            (false, true) => Dimension::XYM,
            (true, true) => Dimension::XYZM,
            (false, false) => return None,
        };
        Some(Self::from_dimension(dim))
    }

    pub fn from_dimension(dim: Dimension) -> Self {
        match dim {
            Dimension::XY => WKBType::LineString,
            Dimension::XYZ => WKBType::LineStringZ,
            Dimension::XYM => WKBType::LineStringM,
            Dimension::XYZM => WKBType::LineStringZM,
        }
    }

    pub fn dimension(&self) -> Dimension {
        match self {
            WKBType::LineString => Dimension::XY,
            WKBType::LineStringZ => Dimension::XYZ,
            WKBType::LineStringM => Dimension::XYM,
            WKBType::LineStringZM => Dimension::XYZM,
        }
    }
}

/// Endianness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Endianness {
    BigEndian,
    #[default]
    LittleEndian,
}

impl TryFrom<u8> for Endianness {
    type Error = GeoTrajectoryError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Endianness::BigEndian),
            1 => Ok(Endianness::LittleEndian),
            _ => Err(GeoTrajectoryError::Wkb(format!(
                "Unexpected byte order marker {value}"
            ))),
        }
    }
}

impl From<Endianness> for u8 {
    fn from(value: Endianness) -> Self {
        use Endianness::*;
        match value {
            BigEndian => 0,
            LittleEndian => 1,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn iso_codes() {
        assert_eq!(WKBType::from_code(2), Some(WKBType::LineString));
        assert_eq!(WKBType::from_code(1002), Some(WKBType::LineStringZ));
        assert_eq!(WKBType::from_code(2002), Some(WKBType::LineStringM));
        assert_eq!(WKBType::from_code(3002), Some(WKBType::LineStringZM));
    }

    #[test]
    fn ewkb_codes() {
        assert_eq!(
            WKBType::from_code(0x8000_0002),
            Some(WKBType::LineStringZ)
        );
        assert_eq!(
            WKBType::from_code(0x4000_0002),
            Some(WKBType::LineStringM)
        );
        assert_eq!(
            WKBType::from_code(0xC000_0002),
            Some(WKBType::LineStringZM)
        );
    }

    #[test]
    fn unsupported_codes() {
        // Point, Polygon, PointZ
        assert_eq!(WKBType::from_code(1), None);
        assert_eq!(WKBType::from_code(3), None);
        assert_eq!(WKBType::from_code(1001), None);
        // EWKB PointZ and EWKB LineString with SRID
        assert_eq!(WKBType::from_code(0x8000_0001), None);
        assert_eq!(WKBType::from_code(0x2000_0002), None);
    }

    #[test]
    fn dimension_round_trip() {
        for dim in [
            Dimension::XY,
            Dimension::XYZ,
            Dimension::XYM,
            Dimension::XYZM,
        ] {
            assert_eq!(WKBType::from_dimension(dim).dimension(), dim);
        }
    }

    #[test]
    fn byte_order_marker() {
        assert_eq!(Endianness::try_from(0).unwrap(), Endianness::BigEndian);
        assert_eq!(Endianness::try_from(1).unwrap(), Endianness::LittleEndian);
        assert!(Endianness::try_from(2).is_err());
        assert_eq!(u8::from(Endianness::LittleEndian), 1);
    }
}
