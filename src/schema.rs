//! Column type declarations for geometry columns.

use crate::config::SpatialConfig;
use crate::shape::{GeometryKind, GeometryShape};

/// Column type used when the shape parameter does not name a single shape.
pub const GENERIC_GEOMETRY_TYPE: &str = "geometry";

/// Resolves the native column type of a [`Geometry`](crate::Geometry) from its shape parameter.
///
/// The SRID is captured from a [`SpatialConfig`] at construction.
///
/// ```
/// use geo_sql::{SchemaTypeResolver, SpatialConfig};
///
/// let resolver = SchemaTypeResolver::new(&SpatialConfig::default());
/// assert_eq!(resolver.column_type::<geo::Polygon>(), "Geometry(Polygon, 4326)");
/// assert_eq!(resolver.column_type::<geo::Geometry>(), "geometry");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaTypeResolver {
    srid: i32,
}

impl SchemaTypeResolver {
    pub fn new(config: &SpatialConfig) -> Self {
        Self { srid: config.srid }
    }

    /// The SRID written into every typed column declaration.
    pub fn srid(&self) -> i32 {
        self.srid
    }

    /// Column type for the shape parameter `T`; no instance is needed.
    pub fn column_type<T: GeometryShape>(&self) -> String {
        self.kind_column_type(T::KIND)
    }

    /// Column type for a runtime shape. `None` resolves to [`GENERIC_GEOMETRY_TYPE`].
    pub fn kind_column_type(&self, kind: Option<GeometryKind>) -> String {
        match kind {
            Some(kind) => format!("Geometry({}, {})", kind.name(), self.srid),
            None => GENERIC_GEOMETRY_TYPE.to_string(),
        }
    }
}

impl Default for SchemaTypeResolver {
    fn default() -> Self {
        Self::new(&SpatialConfig::default())
    }
}
