use serde::{Deserialize, Serialize};

use crate::io::wkb::common::Endianness;

/// Options for writing WKB.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WkbWriteOptions {
    /// The byte order of every value after the byte-order marker.
    ///
    /// Defaults to little endian.
    #[serde(default)]
    pub endianness: Endianness,
}

impl WkbWriteOptions {
    pub fn with_endianness(self, endianness: Endianness) -> Self {
        Self { endianness }
    }
}
