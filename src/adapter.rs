//! Translation between the internal geometry representation and the geometry
//! objects of a host mapping library.
//!
//! The host library is reached only through the two capabilities below, so
//! this crate never depends on its types.
use super::core::{GeomResult, GeometryError};
use super::{Coordinate, Geometry, GeometryKind, Ring};

/// Constructs host geometry objects
pub trait GeometryFactory {
    type Object;

    fn point(&self, coord: Coordinate) -> Self::Object;
    fn line_string(&self, coords: &[Coordinate]) -> Self::Object;
    fn polygon(&self, rings: &[Ring]) -> Self::Object;
    fn multi_point(&self, coords: &[Coordinate]) -> Self::Object;
    fn multi_line_string(&self, lines: &[Vec<Coordinate>]) -> Self::Object;
    fn multi_polygon(&self, polys: &[Vec<Ring>]) -> Self::Object;
    fn collection(&self, members: Vec<Self::Object>) -> Self::Object;
}

/// Reads host geometry objects
pub trait GeometryInspector {
    type Object;

    /// Type of the object, or None if it has no WKT counterpart
    fn kind_of(&self, obj: &Self::Object) -> Option<GeometryKind>;

    /// Coordinate paths of the object.
    ///
    /// A point has one path holding one coordinate, linestrings and multipoints
    /// one path, and polygons one path per ring.
    fn coordinates_of(&self, obj: &Self::Object) -> Vec<Vec<Coordinate>>;

    /// Parts of a multilinestring or multipolygon, or members of a collection
    fn children_of<'o>(&self, obj: &'o Self::Object) -> Vec<&'o Self::Object>;
}

/// Build the host object for a geometry
pub fn to_object<F: GeometryFactory>(factory: &F, geom: &Geometry) -> F::Object {
    match geom {
        Geometry::Point(coord) => factory.point(*coord),
        Geometry::LineString(coords) => factory.line_string(coords),
        Geometry::Polygon(rings) => factory.polygon(rings),
        Geometry::MultiPoint(coords) => factory.multi_point(coords),
        Geometry::MultiLineString(lines) => factory.multi_line_string(lines),
        Geometry::MultiPolygon(polys) => factory.multi_polygon(polys),
        Geometry::GeometryCollection(members) => factory.collection(
            members
                .iter()
                .map(|member| to_object(factory, member))
                .collect(),
        ),
    }
}

// A single coordinate path, as held by linestrings and multipoints
fn single_path(kind: GeometryKind, mut paths: Vec<Vec<Coordinate>>) -> GeomResult<Vec<Coordinate>> {
    match paths.len() {
        0 => Ok(Vec::new()),
        1 => Ok(paths.remove(0)),
        n => Err(GeometryError::MalformedGeometry(format!(
            "{kind} object has {n} coordinate paths, expected one"
        ))),
    }
}

// Read the children of an object, requiring each to be of the given type
fn children_as<I, T>(
    inspector: &I,
    obj: &I::Object,
    expected: GeometryKind,
    read: impl Fn(Vec<Vec<Coordinate>>) -> GeomResult<T>,
) -> GeomResult<Vec<T>>
where
    I: GeometryInspector,
{
    inspector
        .children_of(obj)
        .into_iter()
        .map(|child| match inspector.kind_of(child) {
            Some(kind) if kind == expected => read(inspector.coordinates_of(child)),
            Some(kind) => Err(GeometryError::MalformedGeometry(format!(
                "expected a {expected} part, found {kind}"
            ))),
            None => Err(GeometryError::UnrecognizedType(format!(
                "part of a multi {expected} has no geometry type"
            ))),
        })
        .collect()
}

/// Read a host object into the internal representation
pub fn from_object<I: GeometryInspector>(inspector: &I, obj: &I::Object) -> GeomResult<Geometry> {
    let Some(kind) = inspector.kind_of(obj) else {
        return Err(GeometryError::UnrecognizedType(String::from(
            "object has no geometry type",
        )));
    };

    let geom = match kind {
        GeometryKind::Point => match inspector.coordinates_of(obj).as_slice() {
            [path] if path.len() == 1 => Geometry::Point(path[0]),
            _ => {
                return Err(GeometryError::MalformedGeometry(String::from(
                    "a point object must hold exactly one coordinate",
                )));
            }
        },
        GeometryKind::LineString => {
            Geometry::LineString(single_path(kind, inspector.coordinates_of(obj))?)
        }
        GeometryKind::MultiPoint => {
            Geometry::MultiPoint(single_path(kind, inspector.coordinates_of(obj))?)
        }
        GeometryKind::Polygon => Geometry::Polygon(inspector.coordinates_of(obj)),
        GeometryKind::MultiLineString => {
            Geometry::MultiLineString(children_as(inspector, obj, GeometryKind::LineString, |paths| {
                single_path(GeometryKind::LineString, paths)
            })?)
        }
        GeometryKind::MultiPolygon => {
            Geometry::MultiPolygon(children_as(inspector, obj, GeometryKind::Polygon, Ok)?)
        }
        GeometryKind::GeometryCollection => Geometry::GeometryCollection(
            inspector
                .children_of(obj)
                .into_iter()
                .map(|member| from_object(inspector, member))
                .collect::<GeomResult<Vec<_>>>()?,
        ),
    };
    Ok(geom)
}
