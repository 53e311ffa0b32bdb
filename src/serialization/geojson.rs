use crate::{Coordinate, Geometry, GeometryKind};
use serde_json::{Value, json};

fn type_name(kind: GeometryKind) -> &'static str {
    match kind {
        GeometryKind::Point => "Point",
        GeometryKind::LineString => "LineString",
        GeometryKind::Polygon => "Polygon",
        GeometryKind::MultiPoint => "MultiPoint",
        GeometryKind::MultiLineString => "MultiLineString",
        GeometryKind::MultiPolygon => "MultiPolygon",
        GeometryKind::GeometryCollection => "GeometryCollection",
    }
}

fn position(coord: &Coordinate) -> Value {
    json!([coord.x, coord.y])
}

fn positions(coords: &[Coordinate]) -> Value {
    Value::Array(coords.iter().map(position).collect())
}

fn position_lists(lists: &[Vec<Coordinate>]) -> Value {
    Value::Array(lists.iter().map(|list| positions(list)).collect())
}

impl Geometry {
    /// GeoJSON geometry object for this geometry.
    ///
    /// Examples
    /// ```rust
    /// use wktlib::Geometry;
    /// let line: Geometry = "LINESTRING(0 0, 1 1)".parse().unwrap();
    /// assert_eq!(
    ///     line.to_geojson().to_string(),
    ///     r#"{"coordinates":[[0.0,0.0],[1.0,1.0]],"type":"LineString"}"#
    /// );
    /// ```
    pub fn to_geojson(&self) -> Value {
        let name = type_name(self.kind());
        let coordinates = match self {
            Geometry::GeometryCollection(members) => {
                let geometries: Vec<Value> = members.iter().map(Geometry::to_geojson).collect();
                return json!({ "type": name, "geometries": geometries });
            }
            Geometry::Point(coord) => position(coord),
            Geometry::LineString(coords) | Geometry::MultiPoint(coords) => positions(coords),
            Geometry::Polygon(rings) | Geometry::MultiLineString(rings) => position_lists(rings),
            Geometry::MultiPolygon(polys) => {
                Value::Array(polys.iter().map(|poly| position_lists(poly)).collect())
            }
        };
        json!({ "type": name, "coordinates": coordinates })
    }
}
