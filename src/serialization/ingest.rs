use super::tokens::{
    is_empty_marker, match_type, parse_coordinate_pair, split_top_level, strip_outer_parens,
};
use crate::core::{GeomResult, GeometryError};
use crate::{Coordinate, Geometry, GeometryKind, Ring};
use log;

/// Deepest nesting of geometry collections that [`Ingest`] will read.
///
/// Each level is one recursive call, so deeper input is rejected with
/// [`GeometryError::MalformedGeometry`] instead of exhausting the stack.
pub const MAX_NESTING: usize = 128;

/// Reads WKT fragments into the internal geometry representation.
///
/// Each per-type function takes the text following the type keyword, i.e. the
/// parenthesized component list or the `EMPTY` marker, and returns that type's
/// payload. [`Ingest::geometry`] reads a complete geometry, keyword included.
///
/// Examples
/// ```rust
/// use wktlib::{Coordinate, Ingest};
/// let ingest = Ingest::default();
/// let line = ingest.linestring("(30 10, 10 30, 40 40)").unwrap();
/// assert_eq!(line.len(), 3);
/// assert_eq!(line[1], Coordinate::new(10.0, 30.0));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Ingest {
    separator: char,
}

impl Default for Ingest {
    fn default() -> Self {
        Self { separator: ',' }
    }
}

impl Ingest {
    /// Instantiate a reader splitting components on the given separator
    pub fn new(separator: char) -> Self {
        Self { separator }
    }

    /// Read a complete geometry, starting with its type keyword
    pub fn geometry(&self, text: &str) -> GeomResult<Geometry> {
        self.nested_geometry(text, 0)
    }

    // `depth` counts the collections enclosing `text`
    fn nested_geometry(&self, text: &str, depth: usize) -> GeomResult<Geometry> {
        let (kind, rest) = match_type(text)?;
        log::trace!("Reading geometry of type {kind}");
        let geom = match kind {
            GeometryKind::Point => Geometry::Point(self.point_body(strip_outer_parens(rest)?)?),
            GeometryKind::LineString => Geometry::LineString(self.linestring(rest)?),
            GeometryKind::Polygon => Geometry::Polygon(self.polygon(rest)?),
            GeometryKind::MultiPoint => Geometry::MultiPoint(self.multipoint(rest)?),
            GeometryKind::MultiLineString => {
                Geometry::MultiLineString(self.multilinestring(rest)?)
            }
            GeometryKind::MultiPolygon => Geometry::MultiPolygon(self.multipolygon(rest)?),
            GeometryKind::GeometryCollection => {
                Geometry::GeometryCollection(self.collection_members(rest, depth + 1)?)
            }
        };
        Ok(geom)
    }

    /// Read a point from `(x y)`, or from bare `x y` text
    pub fn point(&self, fragment: &str) -> GeomResult<Coordinate> {
        let trimmed = fragment.trim();
        if trimmed.starts_with('(') || is_empty_marker(trimmed) {
            self.point_body(strip_outer_parens(trimmed)?)
        } else {
            self.point_body(trimmed)
        }
    }

    // A point has exactly one coordinate, so it cannot be empty
    fn point_body(&self, body: &str) -> GeomResult<Coordinate> {
        if body.trim().is_empty() {
            return Err(GeometryError::MalformedGeometry(String::from(
                "a point requires exactly one coordinate",
            )));
        }
        parse_coordinate_pair(body)
    }

    /// Read a linestring from a parenthesized list of coordinate pairs
    pub fn linestring(&self, fragment: &str) -> GeomResult<Vec<Coordinate>> {
        split_top_level(strip_outer_parens(fragment)?, self.separator)?
            .into_iter()
            .map(parse_coordinate_pair)
            .collect()
    }

    /// Read a multipoint. Members may be bare (`x y`) or wrapped (`(x y)`).
    pub fn multipoint(&self, fragment: &str) -> GeomResult<Vec<Coordinate>> {
        split_top_level(strip_outer_parens(fragment)?, self.separator)?
            .into_iter()
            .map(|member| self.point(member))
            .collect()
    }

    /// Read a polygon as a list of rings, the first being the outer boundary
    pub fn polygon(&self, fragment: &str) -> GeomResult<Vec<Ring>> {
        split_top_level(strip_outer_parens(fragment)?, self.separator)?
            .into_iter()
            .map(|ring| self.linestring(ring))
            .collect()
    }

    /// Read a multilinestring as a list of coordinate lists
    pub fn multilinestring(&self, fragment: &str) -> GeomResult<Vec<Vec<Coordinate>>> {
        split_top_level(strip_outer_parens(fragment)?, self.separator)?
            .into_iter()
            .map(|line| self.linestring(line))
            .collect()
    }

    /// Read a multipolygon as a list of polygon ring sets
    pub fn multipolygon(&self, fragment: &str) -> GeomResult<Vec<Vec<Ring>>> {
        split_top_level(strip_outer_parens(fragment)?, self.separator)?
            .into_iter()
            .map(|poly| self.polygon(poly))
            .collect()
    }

    /// Read the members of a geometry collection.
    ///
    /// Each member carries its own type keyword and may itself be a collection,
    /// up to [`MAX_NESTING`] levels in total.
    pub fn geometrycollection(&self, fragment: &str) -> GeomResult<Vec<Geometry>> {
        self.collection_members(fragment, 1)
    }

    fn collection_members(&self, fragment: &str, depth: usize) -> GeomResult<Vec<Geometry>> {
        if depth > MAX_NESTING {
            return Err(GeometryError::MalformedGeometry(format!(
                "collection nesting exceeds {MAX_NESTING}"
            )));
        }
        split_top_level(strip_outer_parens(fragment)?, self.separator)?
            .into_iter()
            .enumerate()
            .map(|(idx, member)| {
                self.nested_geometry(member, depth).map_err(|err| {
                    log::debug!("Failed to read collection member {idx}: {err}");
                    GeometryError::MalformedGeometry(format!(
                        "collection member {idx}: {err}"
                    ))
                })
            })
            .collect()
    }
}
