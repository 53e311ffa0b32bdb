use super::coords::Coordinate;
use super::core::{GeomResult, GeometricObject, GeometryError, display_for_geom};
use super::serialization::{Extract, Ingest};
use std::str::FromStr;

/// One boundary of a polygon, or the vertices of a linestring
pub type Ring = Vec<Coordinate>;

/// The closed set of geometry types known to WKT
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GeometryKind {
    Point,
    LineString,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection,
}

impl GeometryKind {
    pub const ALL: [GeometryKind; 7] = [
        GeometryKind::Point,
        GeometryKind::LineString,
        GeometryKind::Polygon,
        GeometryKind::MultiPoint,
        GeometryKind::MultiLineString,
        GeometryKind::MultiPolygon,
        GeometryKind::GeometryCollection,
    ];

    /// Upper-case WKT keyword for the type
    pub fn keyword(&self) -> &'static str {
        match self {
            GeometryKind::Point => "POINT",
            GeometryKind::LineString => "LINESTRING",
            GeometryKind::Polygon => "POLYGON",
            GeometryKind::MultiPoint => "MULTIPOINT",
            GeometryKind::MultiLineString => "MULTILINESTRING",
            GeometryKind::MultiPolygon => "MULTIPOLYGON",
            GeometryKind::GeometryCollection => "GEOMETRYCOLLECTION",
        }
    }

    /// Look up a type by its keyword, ignoring case
    ///
    /// Examples
    /// ```rust
    /// use wktlib::GeometryKind;
    /// assert_eq!(GeometryKind::from_keyword("multiPoint"), Some(GeometryKind::MultiPoint));
    /// assert_eq!(GeometryKind::from_keyword("square"), None);
    /// ```
    pub fn from_keyword(word: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.keyword().eq_ignore_ascii_case(word))
    }

    /// True for the types holding several independent parts
    pub fn is_multi(&self) -> bool {
        matches!(
            self,
            GeometryKind::MultiPoint
                | GeometryKind::MultiLineString
                | GeometryKind::MultiPolygon
                | GeometryKind::GeometryCollection
        )
    }
}

impl std::fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

/// Internal geometry representation shared by the reader and the writer.
///
/// Each variant carries exactly the payload shape of its WKT type. Rings are
/// kept as given: closure and minimum vertex counts are not checked.
///
/// Examples
/// ```rust
/// use wktlib::{Coordinate, Geometry};
/// let line = Geometry::LineString(vec![Coordinate::new(1.0, 2.0), Coordinate::new(3.0, 4.0)]);
/// assert_eq!(line.to_string(), "LINESTRING(1 2,3 4)");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Geometry {
    Point(Coordinate),
    LineString(Vec<Coordinate>),
    Polygon(Vec<Ring>),
    MultiPoint(Vec<Coordinate>),
    MultiLineString(Vec<Vec<Coordinate>>),
    MultiPolygon(Vec<Vec<Ring>>),
    GeometryCollection(Vec<Geometry>),
}

// Families of types that merge into a common multi type
#[derive(PartialEq)]
enum Family {
    Points,
    Lines,
    Polygons,
    Mixed,
}

impl Geometry {
    /// The type tag of the geometry
    pub fn kind(&self) -> GeometryKind {
        match self {
            Geometry::Point(_) => GeometryKind::Point,
            Geometry::LineString(_) => GeometryKind::LineString,
            Geometry::Polygon(_) => GeometryKind::Polygon,
            Geometry::MultiPoint(_) => GeometryKind::MultiPoint,
            Geometry::MultiLineString(_) => GeometryKind::MultiLineString,
            Geometry::MultiPolygon(_) => GeometryKind::MultiPolygon,
            Geometry::GeometryCollection(_) => GeometryKind::GeometryCollection,
        }
    }

    /// Number of top-level components (coordinates, rings, parts or members)
    pub fn num_components(&self) -> usize {
        match self {
            Geometry::Point(_) => 1,
            Geometry::LineString(coords) | Geometry::MultiPoint(coords) => coords.len(),
            Geometry::Polygon(rings) | Geometry::MultiLineString(rings) => rings.len(),
            Geometry::MultiPolygon(polys) => polys.len(),
            Geometry::GeometryCollection(members) => members.len(),
        }
    }

    /// Total number of coordinates, counted through every nesting level
    pub fn num_coordinates(&self) -> usize {
        match self {
            Geometry::Point(_) => 1,
            Geometry::LineString(coords) | Geometry::MultiPoint(coords) => coords.len(),
            Geometry::Polygon(rings) | Geometry::MultiLineString(rings) => {
                rings.iter().map(Vec::len).sum()
            }
            Geometry::MultiPolygon(polys) => polys.iter().flatten().map(Vec::len).sum(),
            Geometry::GeometryCollection(members) => {
                members.iter().map(Geometry::num_coordinates).sum()
            }
        }
    }

    /// True if the geometry has no components and is written as `EMPTY`
    pub fn is_empty(&self) -> bool {
        match self {
            Geometry::Point(_) => false,
            _ => self.num_components() == 0,
        }
    }

    /// Convert a single geometry into its multi counterpart.
    ///
    /// Multi types and collections are returned unchanged.
    pub fn into_multi(self) -> Self {
        match self {
            Geometry::Point(c) => Geometry::MultiPoint(vec![c]),
            Geometry::LineString(line) => Geometry::MultiLineString(vec![line]),
            Geometry::Polygon(poly) => Geometry::MultiPolygon(vec![poly]),
            multi => multi,
        }
    }

    fn family(&self) -> Family {
        match self {
            Geometry::Point(_) | Geometry::MultiPoint(_) => Family::Points,
            Geometry::LineString(_) | Geometry::MultiLineString(_) => Family::Lines,
            Geometry::Polygon(_) | Geometry::MultiPolygon(_) => Family::Polygons,
            Geometry::GeometryCollection(_) => Family::Mixed,
        }
    }

    /// Merge two geometries into one.
    ///
    /// Points and multipoints merge into a MultiPoint, lines into a MultiLineString
    /// and polygons into a MultiPolygon, keeping the parts of `self` first. Any
    /// other pairing produces a GeometryCollection; if `self` is already a
    /// collection, `other` is appended to it as a new member.
    ///
    /// Examples
    /// ```rust
    /// use wktlib::Geometry;
    /// let a: Geometry = "POINT(1 2)".parse().unwrap();
    /// let b: Geometry = "MULTIPOINT(3 4,5 6)".parse().unwrap();
    /// assert_eq!(a.merge(b).to_string(), "MULTIPOINT(1 2,3 4,5 6)");
    /// ```
    pub fn merge(self, other: Geometry) -> Geometry {
        if self.family() != other.family() || self.family() == Family::Mixed {
            return match self {
                Geometry::GeometryCollection(mut members) => {
                    members.push(other);
                    Geometry::GeometryCollection(members)
                }
                single => Geometry::GeometryCollection(vec![single, other]),
            };
        }

        match (self.into_multi(), other.into_multi()) {
            (Geometry::MultiPoint(mut a), Geometry::MultiPoint(mut b)) => {
                a.append(&mut b);
                Geometry::MultiPoint(a)
            }
            (Geometry::MultiLineString(mut a), Geometry::MultiLineString(mut b)) => {
                a.append(&mut b);
                Geometry::MultiLineString(a)
            }
            (Geometry::MultiPolygon(mut a), Geometry::MultiPolygon(mut b)) => {
                a.append(&mut b);
                Geometry::MultiPolygon(a)
            }
            (a, b) => Geometry::GeometryCollection(vec![a, b]),
        }
    }
}

impl GeometricObject for Geometry {
    /// WKT representation with the default separator and no vertex wrapping
    fn wkt(&self) -> String {
        Extract::default().geometry(self)
    }
}

display_for_geom!(Geometry);

impl FromStr for Geometry {
    type Err = GeometryError;

    /// Parse a single WKT geometry with the default separator
    fn from_str(s: &str) -> GeomResult<Self> {
        Ingest::default().geometry(s)
    }
}
