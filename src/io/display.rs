use std::fmt;

use geozero::ToWkt;

use crate::shape::GeometryShape;
use crate::geometry::Geometry;

/// Text written for an absent geometry.
pub const NULL_TEXT: &str = "NULL";

impl<T: GeometryShape> Geometry<T> {
    /// Render as WKT, propagating encoder errors. `None` for an absent geometry.
    pub fn to_wkt(&self) -> crate::Result<Option<String>> {
        let Some(geom) = self.to_encodable()? else {
            return Ok(None);
        };
        Ok(Some(geom.to_wkt()?))
    }
}

/// Best-effort WKT for logs and debugging. Never fails: an unrenderable geometry is written as
/// `cannot marshal geometry: <type>`.
impl<T: GeometryShape> fmt::Display for Geometry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_wkt() {
            Ok(Some(wkt)) => f.write_str(&wkt),
            Ok(None) => f.write_str(NULL_TEXT),
            Err(err) => {
                tracing::debug!(error = %err, "geometry could not be rendered as WKT");
                write!(f, "cannot marshal geometry: {}", std::any::type_name::<T>())
            }
        }
    }
}
