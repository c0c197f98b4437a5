use std::io::Write;

use byteorder::{BigEndian, ByteOrder, LittleEndian, WriteBytesExt};
use geo_traits::{CoordTrait, GeometryTrait, LineStringTrait};

use crate::datatypes::Dimension;
use crate::error::{GeoTrajectoryError, Result};
use crate::io::wkb::common::{Endianness, WKBType};
use crate::io::wkb::writer::WkbWriteOptions;

/// The byte length of a WKBLineString
pub fn line_string_wkb_size(geom: &impl LineStringTrait) -> usize {
    let header = 1 + 4 + 4;
    let each_coord = geom.dim().size() * 8;
    let all_coords = geom.num_coords() * each_coord;
    header + all_coords
}

/// Write a LineString geometry to a Writer encoded as ISO WKB
pub fn write_line_string_as_wkb<W: Write>(
    mut writer: W,
    geom: &impl LineStringTrait<T = f64>,
    options: &WkbWriteOptions,
) -> Result<()> {
    let dim: Dimension = geom.dim().try_into()?;

    // Byte order
    writer.write_u8(options.endianness.into())?;

    match options.endianness {
        Endianness::BigEndian => write_line_string_body::<BigEndian, W>(writer, geom, dim),
        Endianness::LittleEndian => write_line_string_body::<LittleEndian, W>(writer, geom, dim),
    }
}

fn write_line_string_body<B: ByteOrder, W: Write>(
    mut writer: W,
    geom: &impl LineStringTrait<T = f64>,
    dim: Dimension,
) -> Result<()> {
    writer.write_u32::<B>(WKBType::from_dimension(dim).into())?;

    // numPoints
    let num_coords: u32 = geom.num_coords().try_into().map_err(|_| {
        GeoTrajectoryError::Wkb(format!(
            "{} coordinates do not fit in a WKB count",
            geom.num_coords()
        ))
    })?;
    writer.write_u32::<B>(num_coords)?;

    for coord in geom.coords() {
        for n in 0..dim.size() {
            writer.write_f64::<B>(coord.nth_or_panic(n))?;
        }
    }

    Ok(())
}
