use crate::{Coordinate, Geometry, Ring};

/// Writes the internal geometry representation as WKT.
///
/// The per-type functions return the component list of a payload without its
/// type keyword and without the outermost parentheses, mirroring the fragments
/// accepted by [`crate::Ingest`]. [`Extract::geometry`] writes a complete
/// geometry, keyword included.
///
/// Examples
/// ```rust
/// use wktlib::{Coordinate, Extract};
/// let coords = vec![Coordinate::new(30.0, 10.0), Coordinate::new(10.0, 30.0)];
/// assert_eq!(Extract::default().multipoint(&coords), "30 10,10 30");
/// assert_eq!(Extract::new(',', true).multipoint(&coords), "(30 10),(10 30)");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Extract {
    separator: char,
    wrap_vertices: bool,
}

impl Default for Extract {
    fn default() -> Self {
        Self {
            separator: ',',
            wrap_vertices: false,
        }
    }
}

// Wrap a component list in parentheses, or mark it as empty
fn wrapped(body: String) -> String {
    if body.is_empty() {
        String::from("EMPTY")
    } else {
        format!("({body})")
    }
}

impl Extract {
    /// Instantiate a writer joining components with the given separator.
    ///
    /// When `wrap_vertices` is set, multipoint members are written as `(x y)`.
    pub fn new(separator: char, wrap_vertices: bool) -> Self {
        Self {
            separator,
            wrap_vertices,
        }
    }

    fn join(&self, parts: impl Iterator<Item = String>) -> String {
        let mut buf = [0; 4];
        let sep: &str = self.separator.encode_utf8(&mut buf);
        parts.collect::<Vec<_>>().join(sep)
    }

    /// Write a complete geometry, prefixed with its type keyword
    pub fn geometry(&self, geom: &Geometry) -> String {
        let keyword = geom.kind().keyword();
        if geom.is_empty() {
            return format!("{keyword} EMPTY");
        }
        let body = match geom {
            Geometry::Point(coord) => self.point(coord),
            Geometry::LineString(coords) => self.linestring(coords),
            Geometry::Polygon(rings) => self.polygon(rings),
            Geometry::MultiPoint(coords) => self.multipoint(coords),
            Geometry::MultiLineString(lines) => self.multilinestring(lines),
            Geometry::MultiPolygon(polys) => self.multipolygon(polys),
            Geometry::GeometryCollection(members) => self.geometrycollection(members),
        };
        format!("{keyword}({body})")
    }

    /// Write a coordinate pair as `x y`.
    ///
    /// Values use the shortest decimal form that reads back to the same `f64`.
    pub fn point(&self, coord: &Coordinate) -> String {
        format!("{} {}", coord.x, coord.y)
    }

    /// Write a list of coordinate pairs joined by the separator
    pub fn linestring(&self, coords: &[Coordinate]) -> String {
        self.join(coords.iter().map(|c| self.point(c)))
    }

    /// Write multipoint members, wrapped as `(x y)` when `wrap_vertices` is set
    pub fn multipoint(&self, coords: &[Coordinate]) -> String {
        if self.wrap_vertices {
            self.join(coords.iter().map(|c| format!("({})", self.point(c))))
        } else {
            self.linestring(coords)
        }
    }

    /// Write each ring of a polygon as a parenthesized list
    pub fn polygon(&self, rings: &[Ring]) -> String {
        self.join(rings.iter().map(|ring| wrapped(self.linestring(ring))))
    }

    /// Write each line as a parenthesized list
    pub fn multilinestring(&self, lines: &[Vec<Coordinate>]) -> String {
        self.join(lines.iter().map(|line| wrapped(self.linestring(line))))
    }

    /// Write each polygon as its parenthesized ring list
    pub fn multipolygon(&self, polys: &[Vec<Ring>]) -> String {
        self.join(polys.iter().map(|poly| wrapped(self.polygon(poly))))
    }

    /// Write the members of a collection, each with its own type keyword
    pub fn geometrycollection(&self, members: &[Geometry]) -> String {
        self.join(members.iter().map(|member| self.geometry(member)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Ingest;
    use rand::{Rng, rng};

    fn coords(pairs: &[(f64, f64)]) -> Vec<Coordinate> {
        pairs.iter().map(|&p| Coordinate::from(p)).collect()
    }

    fn random_coords(random: &mut impl Rng, total: usize) -> Vec<Coordinate> {
        (0..total)
            .map(|_| {
                Coordinate::new(
                    (random.random::<f64>() - 0.5) * 360.0,
                    (random.random::<f64>() - 0.5) * 180.0,
                )
            })
            .collect()
    }

    // Build a random geometry, nesting collections at most `depth` levels deep
    fn random_geometry(random: &mut impl Rng, depth: usize) -> Geometry {
        let kinds = if depth == 0 { 6 } else { 7 };
        let size = random.random_range(0..6);
        match random.random_range(0..kinds) {
            0 => Geometry::Point(random_coords(random, 1)[0]),
            1 => Geometry::LineString(random_coords(random, size)),
            2 => Geometry::Polygon((0..size).map(|_| random_coords(random, 4)).collect()),
            3 => Geometry::MultiPoint(random_coords(random, size)),
            4 => Geometry::MultiLineString((0..size).map(|_| random_coords(random, 3)).collect()),
            5 => Geometry::MultiPolygon(
                (0..size)
                    .map(|_| (0..2).map(|_| random_coords(random, 4)).collect())
                    .collect(),
            ),
            _ => Geometry::GeometryCollection(
                (0..size).map(|_| random_geometry(random, depth - 1)).collect(),
            ),
        }
    }

    #[test]
    fn test_write_point() {
        let extract = Extract::default();
        assert_eq!(extract.point(&Coordinate::new(30.0, 10.0)), "30 10");
        assert_eq!(extract.point(&Coordinate::new(-0.25, 1e-7)), "-0.25 0.0000001");
        assert_eq!(
            extract.geometry(&Geometry::Point(Coordinate::new(1.5, 2.0))),
            "POINT(1.5 2)"
        );
    }

    #[test]
    fn test_write_polygon() {
        let rings = vec![
            coords(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 0.0)]),
            coords(&[(0.2, 0.2), (0.3, 0.2), (0.3, 0.3), (0.2, 0.2)]),
        ];
        let extract = Extract::default();
        assert_eq!(
            extract.polygon(&rings),
            "(0 0,1 0,1 1,0 0),(0.2 0.2,0.3 0.2,0.3 0.3,0.2 0.2)"
        );
        assert_eq!(
            extract.geometry(&Geometry::Polygon(rings)),
            "POLYGON((0 0,1 0,1 1,0 0),(0.2 0.2,0.3 0.2,0.3 0.3,0.2 0.2))"
        );
    }

    #[test]
    fn test_write_multipoint_wrapping() {
        let mp = Geometry::MultiPoint(coords(&[(30.0, 10.0), (10.0, 30.0), (40.0, 40.0)]));
        assert_eq!(
            Extract::default().geometry(&mp),
            "MULTIPOINT(30 10,10 30,40 40)"
        );
        assert_eq!(
            Extract::new(',', true).geometry(&mp),
            "MULTIPOINT((30 10),(10 30),(40 40))"
        );
    }

    #[test]
    fn test_write_nested() {
        let mpoly = Geometry::MultiPolygon(vec![
            vec![coords(&[(0.0, 0.0), (1.0, 0.0), (0.0, 0.0)])],
            vec![],
        ]);
        assert_eq!(
            Extract::default().geometry(&mpoly),
            "MULTIPOLYGON(((0 0,1 0,0 0)),EMPTY)"
        );

        let gc = Geometry::GeometryCollection(vec![
            Geometry::Point(Coordinate::new(1.0, 2.0)),
            Geometry::LineString(coords(&[(1.0, 2.0), (3.0, 4.0)])),
            Geometry::GeometryCollection(vec![Geometry::Point(Coordinate::new(5.0, 6.0))]),
            Geometry::MultiPoint(vec![]),
        ]);
        assert_eq!(
            Extract::default().geometry(&gc),
            "GEOMETRYCOLLECTION(POINT(1 2),LINESTRING(1 2,3 4),\
             GEOMETRYCOLLECTION(POINT(5 6)),MULTIPOINT EMPTY)"
        );
    }

    #[test]
    fn test_write_empty() {
        let extract = Extract::default();
        assert_eq!(extract.geometry(&Geometry::LineString(vec![])), "LINESTRING EMPTY");
        assert_eq!(extract.geometry(&Geometry::Polygon(vec![])), "POLYGON EMPTY");
        assert_eq!(extract.geometry(&Geometry::Polygon(vec![vec![]])), "POLYGON(EMPTY)");
        assert_eq!(
            extract.geometry(&Geometry::GeometryCollection(vec![])),
            "GEOMETRYCOLLECTION EMPTY"
        );
        assert_eq!(extract.linestring(&[]), "");
    }

    #[test]
    fn test_write_custom_separator() {
        let line = Geometry::MultiLineString(vec![
            coords(&[(0.0, 0.0), (1.0, 1.0)]),
            coords(&[(2.0, 2.0), (3.0, 3.0)]),
        ]);
        assert_eq!(
            Extract::new('|', false).geometry(&line),
            "MULTILINESTRING((0 0|1 1)|(2 2|3 3))"
        );
    }

    #[test]
    fn test_round_trip_random() {
        let mut random = rng();
        for i in 0..300 {
            let wrap = i % 2 == 0;
            let geom = random_geometry(&mut random, 3);
            let text = Extract::new(',', wrap).geometry(&geom);
            match Ingest::default().geometry(&text) {
                Ok(parsed) => assert_eq!(parsed, geom, "Round trip changed '{text}'"),
                Err(err) => panic!("Could not read back '{text}': {err}"),
            }
        }
    }

    #[test]
    fn test_round_trip_text() {
        for text in [
            "POINT(30 10)",
            "LINESTRING(30 10,10 30,40 40)",
            "POLYGON((35 10,45 45,15 40,10 20,35 10),(20 30,35 35,30 20,20 30))",
            "MULTIPOINT(10 40,40 30,20 20,30 10)",
            "MULTILINESTRING((10 10,20 20,10 40),(40 40,30 30,40 20,30 10))",
            "MULTIPOLYGON(((30 20,45 40,10 40,30 20)),((15 5,40 10,10 20,5 10,15 5)))",
            "GEOMETRYCOLLECTION(POINT(4 6),LINESTRING(4 6,7 10))",
            "MULTIPOINT EMPTY",
            "POLYGON EMPTY",
        ] {
            let geom = Ingest::default().geometry(text).unwrap();
            assert_eq!(Extract::default().geometry(&geom), text);
        }
    }
}
