//! The coordinate kinds a LineString can carry.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::error::GeoTrajectoryError;

/// The dimension of a coordinate, and therefore of any sequence or LineString built from it.
///
/// In the text notation this is the suffix glued onto the geometry tag, e.g. `LINESTRINGZM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    /// Two-dimensional.
    XY,

    /// Three-dimensional, with elevation.
    XYZ,

    /// XYM (2D with a time measure).
    XYM,

    /// XYZM (3D with a time measure).
    XYZM,
}

impl Dimension {
    /// Returns the number of dimensions.
    pub fn size(&self) -> usize {
        match self {
            Dimension::XY => 2,
            Dimension::XYZ => 3,
            Dimension::XYM => 3,
            Dimension::XYZM => 4,
        }
    }

    /// Whether coordinates of this dimension carry an elevation.
    pub fn has_z(&self) -> bool {
        matches!(self, Dimension::XYZ | Dimension::XYZM)
    }

    /// Whether coordinates of this dimension carry a time measure.
    pub fn has_m(&self) -> bool {
        matches!(self, Dimension::XYM | Dimension::XYZM)
    }

    /// The suffix written after a geometry tag in the text notation.
    pub fn wkt_suffix(&self) -> &'static str {
        match self {
            Dimension::XY => "",
            Dimension::XYZ => "Z",
            Dimension::XYM => "M",
            Dimension::XYZM => "ZM",
        }
    }

    /// Parse a text notation suffix. Matching is ASCII case-insensitive.
    pub fn from_wkt_suffix(suffix: &str) -> Option<Self> {
        if suffix.is_empty() {
            Some(Dimension::XY)
        } else if suffix.eq_ignore_ascii_case("Z") {
            Some(Dimension::XYZ)
        } else if suffix.eq_ignore_ascii_case("M") {
            Some(Dimension::XYM)
        } else if suffix.eq_ignore_ascii_case("ZM") {
            Some(Dimension::XYZM)
        } else {
            None
        }
    }
}

impl From<Dimension> for geo_traits::Dimensions {
    fn from(value: Dimension) -> Self {
        match value {
            Dimension::XY => geo_traits::Dimensions::Xy,
            Dimension::XYZ => geo_traits::Dimensions::Xyz,
            Dimension::XYM => geo_traits::Dimensions::Xym,
            Dimension::XYZM => geo_traits::Dimensions::Xyzm,
        }
    }
}

impl TryFrom<geo_traits::Dimensions> for Dimension {
    type Error = GeoTrajectoryError;

    fn try_from(value: geo_traits::Dimensions) -> std::result::Result<Self, Self::Error> {
        match value {
            geo_traits::Dimensions::Xy | geo_traits::Dimensions::Unknown(2) => Ok(Dimension::XY),
            geo_traits::Dimensions::Xyz | geo_traits::Dimensions::Unknown(3) => Ok(Dimension::XYZ),
            geo_traits::Dimensions::Xym => Ok(Dimension::XYM),
            geo_traits::Dimensions::Xyzm | geo_traits::Dimensions::Unknown(4) => {
                Ok(Dimension::XYZM)
            }
            _ => Err(GeoTrajectoryError::IncorrectGeometryType(format!(
                "Unsupported dimension {value:?}"
            ))),
        }
    }
}

impl Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dimension::XY => write!(f, "XY"),
            Dimension::XYZ => write!(f, "XYZ"),
            Dimension::XYM => write!(f, "XYM"),
            Dimension::XYZM => write!(f, "XYZM"),
        }
    }
}
