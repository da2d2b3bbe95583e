//! Read from and write to [GeoJSON](https://geojson.org/) geometry objects.
//!
//! [`Geometry`] implements serde's `Serialize` and `Deserialize` by way of the `geojson` crate, so
//! it can be embedded in any serde-derived struct. An absent geometry is written as `null`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{GeoSqlError, Result};
use crate::shape::GeometryShape;
use crate::geometry::Geometry;

impl<T: GeometryShape> Geometry<T> {
    /// Convert to a GeoJSON geometry object, or `None` for an absent geometry.
    ///
    /// `Line`, `Rect` and `Triangle` have no GeoJSON type of their own and are rejected.
    pub fn to_geojson(&self) -> Result<Option<geojson::Geometry>> {
        Ok(self
            .to_encodable()?
            .map(|geom| geojson::Geometry::new(geojson::Value::from(&geom))))
    }

    /// Build from a GeoJSON geometry object.
    ///
    /// The object's `type` must match the declared shape. GeoJSON carries no SRID, so the result
    /// has none.
    pub fn from_geojson(geometry: geojson::Geometry) -> Result<Self> {
        let geom = geo::Geometry::try_from(geometry.value)?;
        let mut value = Self::null();
        value.set_checked(geom, None)?;
        Ok(value)
    }

    /// Serialize to a GeoJSON string.
    pub fn to_geojson_string(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.to_geojson()?)?)
    }

    /// Parse a GeoJSON string. `null` yields an absent geometry.
    pub fn from_geojson_str(json: &str) -> Result<Self> {
        let geometry: Option<geojson::Geometry> = serde_json::from_str(json)?;
        geometry.map_or_else(|| Ok(Self::null()), Self::from_geojson)
    }
}

impl<T: GeometryShape> Serialize for Geometry<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_geojson()
            .map_err(serde::ser::Error::custom)?
            .serialize(serializer)
    }
}

impl<'de, T: GeometryShape> Deserialize<'de> for Geometry<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        match Option::<geojson::Geometry>::deserialize(deserializer)? {
            Some(geometry) => Self::from_geojson(geometry).map_err(serde::de::Error::custom),
            None => Ok(Self::null()),
        }
    }
}
