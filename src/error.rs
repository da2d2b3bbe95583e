//! Defines [`GeoSqlError`], representing all errors returned by this crate.

use thiserror::Error;

use crate::shape::GeometryKind;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum GeoSqlError {
    /// The storage driver handed back a representation that is neither text nor bytes.
    #[error("unexpected value type: {0}")]
    UnexpectedValueType(&'static str),

    /// The decoded geometry's shape does not match the declared shape parameter.
    #[error("unexpected geometry type: expected {expected}, found {found}")]
    UnexpectedGeometryType {
        /// The shape declared by the `Geometry` type parameter.
        expected: &'static str,
        /// The shape actually found in the payload.
        found: &'static str,
    },

    /// A `geo` variant with no simple-feature encoding (`Line`, `Rect`, `Triangle`).
    #[error("unsupported geometry type: {0}")]
    UnsupportedGeometryType(&'static str),

    /// Malformed or unsupported EWKB record
    #[error("EWKB error: {0}")]
    Ewkb(String),

    /// Invalid configuration value
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// [hex::FromHexError]
    #[error(transparent)]
    Hex(#[from] hex::FromHexError),

    /// [geozero::error::GeozeroError], raised by the EWKB and WKT codecs
    #[error(transparent)]
    Geozero(#[from] geozero::error::GeozeroError),

    /// [geojson::Error]
    #[error(transparent)]
    GeoJson(#[from] geojson::Error),

    /// [serde_json::Error]
    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),

    /// [std::io::Error]
    #[error(transparent)]
    IOError(#[from] std::io::Error),
}

impl GeoSqlError {
    pub(crate) fn mismatched(expected: Option<GeometryKind>, found: &geo::Geometry) -> Self {
        Self::UnexpectedGeometryType {
            expected: expected.map_or("Geometry", GeometryKind::name),
            found: crate::shape::geometry_name(found),
        }
    }
}

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, GeoSqlError>;
