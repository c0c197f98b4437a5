use std::io::Cursor;

use byteorder::{BigEndian, LittleEndian, ReadBytesExt};

use crate::error::{GeoTrajectoryError, Result};
use crate::io::wkb::common::Endianness;

/// A reader over a WKB buffer that honours the buffer's own byte-order marker.
///
/// The marker is the first byte of the buffer and is consumed on construction.
#[derive(Debug)]
pub(crate) struct WkbCursor<'a> {
    reader: Cursor<&'a [u8]>,
    byte_order: Endianness,
}

impl<'a> WkbCursor<'a> {
    pub fn new(buf: &'a [u8]) -> Result<Self> {
        let mut reader = Cursor::new(buf);
        let marker = reader
            .read_u8()
            .map_err(|_| GeoTrajectoryError::Wkb("Empty buffer".to_string()))?;
        Ok(Self {
            reader,
            byte_order: marker.try_into()?,
        })
    }

    pub fn byte_order(&self) -> Endianness {
        self.byte_order
    }

    /// The number of bytes not yet read.
    pub fn remaining(&self) -> usize {
        let len = self.reader.get_ref().len() as u64;
        len.saturating_sub(self.reader.position()) as usize
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        let position = self.reader.position();
        match self.byte_order {
            Endianness::BigEndian => self.reader.read_u32::<BigEndian>(),
            Endianness::LittleEndian => self.reader.read_u32::<LittleEndian>(),
        }
        .map_err(|err| truncated(position, err))
    }

    pub fn read_f64(&mut self) -> Result<f64> {
        let position = self.reader.position();
        match self.byte_order {
            Endianness::BigEndian => self.reader.read_f64::<BigEndian>(),
            Endianness::LittleEndian => self.reader.read_f64::<LittleEndian>(),
        }
        .map_err(|err| truncated(position, err))
    }
}

fn truncated(position: u64, err: std::io::Error) -> GeoTrajectoryError {
    GeoTrajectoryError::Wkb(format!("Truncated buffer at byte {position}: {err}"))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn reads_in_marker_byte_order() {
        let mut buf = vec![0];
        buf.extend_from_slice(&7u32.to_be_bytes());
        buf.extend_from_slice(&1.5f64.to_be_bytes());
        let mut cursor = WkbCursor::new(&buf).unwrap();
        assert_eq!(cursor.byte_order(), Endianness::BigEndian);
        assert_eq!(cursor.read_u32().unwrap(), 7);
        assert_eq!(cursor.read_f64().unwrap(), 1.5);
        assert_eq!(cursor.remaining(), 0);

        let mut buf = vec![1];
        buf.extend_from_slice(&7u32.to_le_bytes());
        let mut cursor = WkbCursor::new(&buf).unwrap();
        assert_eq!(cursor.byte_order(), Endianness::LittleEndian);
        assert_eq!(cursor.read_u32().unwrap(), 7);
    }

    #[test]
    fn truncated_read_is_an_error() {
        let buf = [1, 0, 0];
        let mut cursor = WkbCursor::new(&buf).unwrap();
        assert_eq!(cursor.remaining(), 2);
        assert!(matches!(
            cursor.read_u32(),
            Err(GeoTrajectoryError::Wkb(_))
        ));
    }

    #[test]
    fn bad_marker() {
        assert!(WkbCursor::new(&[]).is_err());
        assert!(WkbCursor::new(&[5, 0, 0, 0, 2]).is_err());
    }
}
