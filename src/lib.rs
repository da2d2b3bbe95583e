//! Typed geometry values for SQL persistence and GeoJSON interchange.
//!
//! [`Geometry<T>`] wraps a single [`geo`] geometry whose shape is fixed by `T` (see
//! [`GeometryShape`]). It is stored in a spatial database as hex-encoded little-endian EWKB
//! through the driver-neutral [`Bind`]/[`Scan`] contract, exchanged with applications as GeoJSON
//! through serde, and rendered as WKT by its `Display` implementation. [`SchemaTypeResolver`]
//! derives the matching `Geometry(<Shape>, <SRID>)` column type from `T` alone.
//!
//! ```
//! use geo_sql::{Bind, Point, Scan, SchemaTypeResolver, SpatialConfig};
//!
//! let point = Point::new(geo::point!(x: 42., y: 42.)).with_srid(4326);
//!
//! let mut scanned = Point::null();
//! scanned.scan(point.bind()?)?;
//! assert_eq!(scanned, point);
//!
//! let resolver = SchemaTypeResolver::new(&SpatialConfig::default());
//! assert_eq!(resolver.column_type::<geo::Point>(), "Geometry(Point, 4326)");
//! # Ok::<(), geo_sql::GeoSqlError>(())
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub use config::SpatialConfig;
pub use error::{GeoSqlError, Result};
pub use geometry::{
    AnyGeometry, Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint,
    MultiPolygon, Point, Polygon,
};
pub use schema::SchemaTypeResolver;
pub use shape::{GeometryKind, GeometryShape};
pub use sql::{Bind, Scan, SqlValue};

pub mod config;
pub mod error;
mod geometry;
pub mod io;
pub mod schema;
pub mod shape;
pub mod sql;
#[cfg(test)]
pub(crate) mod test;
