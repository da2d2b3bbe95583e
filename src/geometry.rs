//! The [`Geometry`] value type and its shape-specific aliases.

use crate::error::{GeoSqlError, Result};
use crate::shape::{find_unsupported, GeometryKind, GeometryShape};

/// A nullable geometry of shape `T`, together with its spatial reference identifier.
///
/// `T` fixes the shape at compile time: a `Geometry<geo::Point>` can only ever hold a point.
/// An absent geometry stands for SQL `NULL` and is a regular state, not an error.
///
/// `geo` types carry no SRID of their own, so it is stored here next to the geometry. Equality
/// compares both.
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry<T: GeometryShape> {
    geom: Option<T>,
    srid: Option<i32>,
}

pub type Point = Geometry<geo::Point>;
pub type LineString = Geometry<geo::LineString>;
pub type Polygon = Geometry<geo::Polygon>;
pub type MultiPoint = Geometry<geo::MultiPoint>;
pub type MultiLineString = Geometry<geo::MultiLineString>;
pub type MultiPolygon = Geometry<geo::MultiPolygon>;
pub type GeometryCollection = Geometry<geo::GeometryCollection>;
/// A geometry column that accepts any shape.
pub type AnyGeometry = Geometry<geo::Geometry>;

impl<T: GeometryShape> Geometry<T> {
    /// Wrap a geometry without an SRID.
    pub fn new(geom: T) -> Self {
        Self {
            geom: Some(geom),
            srid: None,
        }
    }

    /// An absent geometry (SQL `NULL`).
    pub fn null() -> Self {
        Self {
            geom: None,
            srid: None,
        }
    }

    /// Set the spatial reference identifier.
    pub fn with_srid(self, srid: i32) -> Self {
        Self {
            srid: Some(srid),
            ..self
        }
    }

    pub fn geom(&self) -> Option<&T> {
        self.geom.as_ref()
    }

    pub fn srid(&self) -> Option<i32> {
        self.srid
    }

    pub fn is_null(&self) -> bool {
        self.geom.is_none()
    }

    /// The declared shape, or `None` for [`AnyGeometry`].
    pub fn kind(&self) -> Option<GeometryKind> {
        T::KIND
    }

    /// Replace the whole value. Nothing of the previous geometry or SRID is kept.
    pub fn set(&mut self, geom: Option<T>, srid: Option<i32>) {
        *self = Self { geom, srid };
    }

    /// Extract into components
    pub fn into_inner(self) -> (Option<T>, Option<i32>) {
        (self.geom, self.srid)
    }

    /// The wrapped geometry as the polymorphic enum, ready for an encoder.
    ///
    /// Fails for `Line`, `Rect` and `Triangle` (possibly nested in a collection): the encoders
    /// would write them as a LineString or Polygon, which then decodes as a different variant.
    pub(crate) fn to_encodable(&self) -> Result<Option<geo::Geometry>> {
        let Some(geom) = self.geom() else {
            return Ok(None);
        };
        let geom = geom.to_geometry();
        match find_unsupported(&geom) {
            Some(name) => Err(GeoSqlError::UnsupportedGeometryType(name)),
            None => Ok(Some(geom)),
        }
    }

    /// Validate a decoded polymorphic geometry against `T` and store it.
    pub(crate) fn set_checked(&mut self, geom: geo::Geometry, srid: Option<i32>) -> Result<()> {
        let geom =
            T::from_geometry(geom).map_err(|found| GeoSqlError::mismatched(T::KIND, &found))?;
        self.set(Some(geom), srid);
        Ok(())
    }
}

impl<T: GeometryShape> Default for Geometry<T> {
    fn default() -> Self {
        Self::null()
    }
}

impl<T: GeometryShape> From<T> for Geometry<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: GeometryShape> From<Option<T>> for Geometry<T> {
    fn from(value: Option<T>) -> Self {
        Self {
            geom: value,
            srid: None,
        }
    }
}
