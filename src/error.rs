//! Defines [`GeoTrajectoryError`], representing all errors returned by this crate.

use std::fmt::Debug;

use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum GeoTrajectoryError {
    /// A geometry that cannot be represented in the requested encoding.
    #[error("Bad geometry: {0}")]
    BadGeometry(String),

    /// Incorrect geometry type for operation
    #[error("Incorrect geometry type for operation: {0}")]
    IncorrectGeometryType(String),

    /// [std::io::Error]
    #[error(transparent)]
    IOError(#[from] std::io::Error),

    /// WKB Error
    #[error("WKB error: {0}")]
    Wkb(String),

    /// WKT Error
    #[error("WKT error: {0}")]
    Wkt(String),
}

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, GeoTrajectoryError>;
