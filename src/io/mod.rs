//! Encodings of [`Geometry`](crate::Geometry) values: EWKB for SQL rows, GeoJSON for
//! application payloads, WKT for display, and the `sqlx` PostGIS glue.

mod display;
pub mod ewkb;
mod geojson;
#[cfg(feature = "postgis")]
pub mod postgis;

pub use display::NULL_TEXT;
