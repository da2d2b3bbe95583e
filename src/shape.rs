//! The closed set of geometry shapes a [`Geometry`](crate::Geometry) value can be declared over.

use std::fmt;

use num_enum::{IntoPrimitive, TryFromPrimitive};

/// One of the seven OGC simple-feature shapes.
///
/// Discriminants match the 2D WKB geometry type codes, so a shape can be recovered from an
/// (E)WKB header with [`GeometryKind::try_from`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u32)]
pub enum GeometryKind {
    Point = 1,
    LineString = 2,
    Polygon = 3,
    MultiPoint = 4,
    MultiLineString = 5,
    MultiPolygon = 6,
    GeometryCollection = 7,
}

impl GeometryKind {
    /// All shapes, in WKB type code order.
    pub const ALL: [GeometryKind; 7] = [
        GeometryKind::Point,
        GeometryKind::LineString,
        GeometryKind::Polygon,
        GeometryKind::MultiPoint,
        GeometryKind::MultiLineString,
        GeometryKind::MultiPolygon,
        GeometryKind::GeometryCollection,
    ];

    /// The shape name as spelled by PostGIS type modifiers and GeoJSON `type` members.
    pub fn name(self) -> &'static str {
        match self {
            GeometryKind::Point => "Point",
            GeometryKind::LineString => "LineString",
            GeometryKind::Polygon => "Polygon",
            GeometryKind::MultiPoint => "MultiPoint",
            GeometryKind::MultiLineString => "MultiLineString",
            GeometryKind::MultiPolygon => "MultiPolygon",
            GeometryKind::GeometryCollection => "GeometryCollection",
        }
    }

    /// The shape of a [`geo::Geometry`].
    ///
    /// `Line`, `Rect` and `Triangle` have no simple-feature counterpart and return `None`.
    pub fn of(geom: &geo::Geometry) -> Option<Self> {
        match geom {
            geo::Geometry::Point(_) => Some(GeometryKind::Point),
            geo::Geometry::LineString(_) => Some(GeometryKind::LineString),
            geo::Geometry::Polygon(_) => Some(GeometryKind::Polygon),
            geo::Geometry::MultiPoint(_) => Some(GeometryKind::MultiPoint),
            geo::Geometry::MultiLineString(_) => Some(GeometryKind::MultiLineString),
            geo::Geometry::MultiPolygon(_) => Some(GeometryKind::MultiPolygon),
            geo::Geometry::GeometryCollection(_) => Some(GeometryKind::GeometryCollection),
            geo::Geometry::Line(_) | geo::Geometry::Rect(_) | geo::Geometry::Triangle(_) => None,
        }
    }
}

impl fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub(crate) fn geometry_name(geom: &geo::Geometry) -> &'static str {
    match geom {
        geo::Geometry::Line(_) => "Line",
        geo::Geometry::Rect(_) => "Rect",
        geo::Geometry::Triangle(_) => "Triangle",
        other => GeometryKind::of(other).map_or("Geometry", GeometryKind::name),
    }
}

/// The first geometry, searching collections recursively, that has no simple-feature encoding.
pub(crate) fn find_unsupported(geom: &geo::Geometry) -> Option<&'static str> {
    match geom {
        geo::Geometry::GeometryCollection(collection) => {
            collection.0.iter().find_map(find_unsupported)
        }
        other if GeometryKind::of(other).is_none() => Some(geometry_name(other)),
        _ => None,
    }
}

/// A concrete geometry type usable as the shape parameter of [`Geometry`](crate::Geometry).
///
/// This is implemented for the seven `geo` simple-feature types, which fix [`Self::KIND`], and
/// for [`geo::Geometry`] itself, which accepts any shape and has no fixed kind.
pub trait GeometryShape: Clone + fmt::Debug + PartialEq + Send + Sync + 'static {
    /// The declared shape, or `None` when any shape is accepted.
    const KIND: Option<GeometryKind>;

    /// Upcast into the polymorphic geometry enum.
    fn into_geometry(self) -> geo::Geometry;

    /// Downcast from the polymorphic geometry enum, handing the input back on a shape mismatch.
    fn from_geometry(geom: geo::Geometry) -> std::result::Result<Self, geo::Geometry>;

    /// Like [`Self::into_geometry`], without consuming `self`.
    fn to_geometry(&self) -> geo::Geometry {
        self.clone().into_geometry()
    }
}

macro_rules! impl_geometry_shape {
    ($geo_type:ty, $variant:ident) => {
        impl GeometryShape for $geo_type {
            const KIND: Option<GeometryKind> = Some(GeometryKind::$variant);

            fn into_geometry(self) -> geo::Geometry {
                geo::Geometry::$variant(self)
            }

            fn from_geometry(geom: geo::Geometry) -> std::result::Result<Self, geo::Geometry> {
                match geom {
                    geo::Geometry::$variant(g) => Ok(g),
                    other => Err(other),
                }
            }
        }
    };
}

impl_geometry_shape!(geo::Point, Point);
impl_geometry_shape!(geo::LineString, LineString);
impl_geometry_shape!(geo::Polygon, Polygon);
impl_geometry_shape!(geo::MultiPoint, MultiPoint);
impl_geometry_shape!(geo::MultiLineString, MultiLineString);
impl_geometry_shape!(geo::MultiPolygon, MultiPolygon);
impl_geometry_shape!(geo::GeometryCollection, GeometryCollection);

impl GeometryShape for geo::Geometry {
    const KIND: Option<GeometryKind> = None;

    fn into_geometry(self) -> geo::Geometry {
        self
    }

    fn from_geometry(geom: geo::Geometry) -> std::result::Result<Self, geo::Geometry> {
        Ok(geom)
    }
}
