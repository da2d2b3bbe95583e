//! Hex-encoded EWKB, the representation of geometry values in SQL rows.
//!
//! Geometries are written as little-endian [EWKB] (WKB extended with an optional SRID) and the
//! bytes are then hex-encoded, which is the textual form PostGIS accepts and prints for the
//! `geometry` type. Scanning accepts both that text and raw EWKB bytes.
//!
//! [EWKB]: https://postgis.net/docs/using_postgis_dbmanagement.html#EWKB_EWKT

use std::io::{Cursor, Read};

use byteorder::{BigEndian, ByteOrder, LittleEndian, ReadBytesExt};
use geozero::geo_types::GeoWriter;
use geozero::wkb::process_ewkb_geom;
use geozero::{CoordDimensions, ToWkb};

use crate::error::{GeoSqlError, Result};
use crate::shape::{GeometryKind, GeometryShape};
use crate::sql::{Bind, Scan, SqlValue};
use crate::geometry::Geometry;

const EWKB_Z_FLAG: u32 = 0x8000_0000;
const EWKB_M_FLAG: u32 = 0x4000_0000;
const EWKB_SRID_FLAG: u32 = 0x2000_0000;
const EWKB_FLAGS: u32 = EWKB_Z_FLAG | EWKB_M_FLAG | EWKB_SRID_FLAG;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endianness {
    BigEndian,
    LittleEndian,
}

/// The fixed-size prefix of an EWKB record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EwkbHeader {
    pub byte_order: Endianness,
    /// `None` for type codes outside the seven simple-feature shapes.
    pub kind: Option<GeometryKind>,
    pub has_z: bool,
    pub has_m: bool,
    pub srid: Option<i32>,
}

impl EwkbHeader {
    /// Parse the byte order, geometry type and optional SRID at the start of `buf`.
    ///
    /// Both PostGIS flag bits and ISO `+1000`/`+2000`/`+3000` type codes are understood.
    pub fn parse(buf: &[u8]) -> Result<Self> {
        let mut reader = Cursor::new(buf);
        match reader.read_u8()? {
            0 => Self::parse_body::<BigEndian>(&mut reader, Endianness::BigEndian),
            1 => Self::parse_body::<LittleEndian>(&mut reader, Endianness::LittleEndian),
            other => Err(GeoSqlError::Ewkb(format!("invalid byte order marker {other}"))),
        }
    }

    fn parse_body<B: ByteOrder>(reader: &mut impl Read, byte_order: Endianness) -> Result<Self> {
        let type_id = reader.read_u32::<B>()?;
        let srid = if type_id & EWKB_SRID_FLAG != 0 {
            Some(reader.read_i32::<B>()?)
        } else {
            None
        };

        let iso_code = type_id & !EWKB_FLAGS;
        let iso_dim = iso_code / 1000;
        Ok(Self {
            byte_order,
            kind: GeometryKind::try_from(iso_code % 1000).ok(),
            has_z: type_id & EWKB_Z_FLAG != 0 || matches!(iso_dim, 1 | 3),
            has_m: type_id & EWKB_M_FLAG != 0 || matches!(iso_dim, 2 | 3),
            srid,
        })
    }
}

/// Serialize a geometry to little-endian 2D EWKB.
pub fn encode_ewkb(geom: &geo::Geometry, srid: Option<i32>) -> Result<Vec<u8>> {
    Ok(geom.to_ewkb(CoordDimensions::xy(), srid)?)
}

/// Parse an EWKB record into a geometry and its SRID, if it carries one.
///
/// `geo` geometries are 2D, so records with Z or M coordinates are rejected rather than
/// truncated. The record must span the whole buffer.
pub fn decode_ewkb(buf: &[u8]) -> Result<(geo::Geometry, Option<i32>)> {
    let header = EwkbHeader::parse(buf)?;
    if header.has_z || header.has_m {
        return Err(GeoSqlError::Ewkb(
            "Z/M dimensions are not supported".to_string(),
        ));
    }

    let mut reader = Cursor::new(buf);
    let mut writer = GeoWriter::new();
    process_ewkb_geom(&mut reader, &mut writer)?;

    let trailing = buf.len().saturating_sub(reader.position() as usize);
    if trailing > 0 {
        return Err(GeoSqlError::Ewkb(format!(
            "{trailing} trailing bytes after geometry"
        )));
    }
    let geom = writer
        .take_geometry()
        .ok_or_else(|| GeoSqlError::Ewkb("record holds no geometry".to_string()))?;
    Ok((geom, header.srid))
}

impl<T: GeometryShape> Geometry<T> {
    /// Raw little-endian EWKB, or `None` for an absent geometry.
    pub fn to_ewkb(&self) -> Result<Option<Vec<u8>>> {
        self.to_encodable()?
            .map(|geom| encode_ewkb(&geom, self.srid()))
            .transpose()
    }

    /// Hex-encoded EWKB, or `None` for an absent geometry.
    pub fn to_hex_ewkb(&self) -> Result<Option<String>> {
        Ok(self.to_ewkb()?.map(hex::encode))
    }

    /// Decode hex-encoded EWKB. The empty string decodes to an absent geometry.
    pub fn from_hex_ewkb(text: &str) -> Result<Self> {
        let mut geometry = Self::null();
        geometry.scan(SqlValue::Text(text.to_string()))?;
        Ok(geometry)
    }

    /// Bind as raw EWKB bytes instead of hex text.
    ///
    /// For drivers that take binary parameters directly; [`Scan`] accepts either form.
    pub fn bind_bytes(&self) -> Result<SqlValue> {
        Ok(self.to_ewkb()?.map_or(SqlValue::Null, SqlValue::Bytes))
    }
}

impl<T: GeometryShape> Bind for Geometry<T> {
    fn bind(&self) -> Result<SqlValue> {
        Ok(self.to_hex_ewkb()?.map_or(SqlValue::Null, SqlValue::Text))
    }
}

impl<T: GeometryShape> Scan for Geometry<T> {
    fn scan(&mut self, value: SqlValue) -> Result<()> {
        let ewkb = match value {
            SqlValue::Null => Vec::new(),
            SqlValue::Text(text) => hex::decode(text)?,
            SqlValue::Bytes(bytes) => bytes,
            other => return Err(GeoSqlError::UnexpectedValueType(other.type_name())),
        };
        if ewkb.is_empty() {
            self.set(None, None);
            return Ok(());
        }

        let (geom, srid) = decode_ewkb(&ewkb)?;
        self.set_checked(geom, srid)
    }
}
