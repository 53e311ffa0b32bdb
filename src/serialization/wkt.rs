use crate::adapter::{self, GeometryFactory, GeometryInspector};
use crate::config::WktConfig;
use crate::core::{GeomResult, GeometryError};
use crate::{Coordinate, Geometry, GeometryKind, same_coords};
use log;
use std::str::FromStr;

/// Read every geometry of a document, one result per geometry.
///
/// Geometries are separated by the configured delimiter and read independently,
/// so a malformed geometry does not prevent reading the others. Blank entries
/// (e.g. after a trailing delimiter) are skipped.
///
/// Examples
/// ```rust
/// use wktlib::WktConfig;
/// use wktlib::serialization::read_each;
///
/// let results = read_each("POINT(1 2); POINT(1); LINESTRING(0 0,1 1)", &WktConfig::default());
/// assert_eq!(results.len(), 3);
/// assert!(results[0].is_ok());
/// assert!(results[1].is_err());
/// assert!(results[2].is_ok());
/// ```
pub fn read_each(document: &str, config: &WktConfig) -> Vec<GeomResult<Geometry>> {
    let ingest = config.ingest();
    document
        .split(config.delimiter)
        .filter(|item| !item.trim().is_empty())
        .enumerate()
        .map(|(index, item)| {
            ingest.geometry(item).inspect_err(|err| {
                log::debug!("Failed to read geometry {index} of document: {err}");
            })
        })
        .collect()
}

/// Read every geometry of a document.
///
/// Fails on the first malformed geometry, reporting its position in the document.
///
/// Examples
/// ```rust
/// use wktlib::{GeometryError, WktConfig};
/// use wktlib::serialization::read;
///
/// let geoms = read("POINT(1 2);MULTIPOINT EMPTY;", &WktConfig::default()).unwrap();
/// assert_eq!(geoms.len(), 2);
///
/// match read("POINT(1 2);SQUARE(0 0,1 1)", &WktConfig::default()) {
///     Err(GeometryError::InDocument { index, .. }) => assert_eq!(index, 1),
///     _ => panic!("Expected an error on the second geometry"),
/// }
/// ```
pub fn read(document: &str, config: &WktConfig) -> GeomResult<Vec<Geometry>> {
    read_each(document, config)
        .into_iter()
        .enumerate()
        .map(|(index, res)| {
            res.map_err(|err| GeometryError::InDocument {
                index,
                source: Box::new(err),
            })
        })
        .collect()
}

/// Write geometries as a document, joined by the configured delimiter
pub fn write(geoms: &[Geometry], config: &WktConfig) -> String {
    let extract = config.extract();
    let mut buf = [0; 4];
    let delimiter: &str = config.delimiter.encode_utf8(&mut buf);
    geoms
        .iter()
        .map(|geom| extract.geometry(geom))
        .collect::<Vec<_>>()
        .join(delimiter)
}

/// Reads WKT text and holds the resulting geometries.
///
/// Examples
/// ```rust
/// use wktlib::{Geometry, Wkt, WktConfig};
///
/// let mut wkt = Wkt::with_config(WktConfig::default().with_wrap_vertices(true)).unwrap();
/// wkt.read("multipoint(30 10, 10 30)").unwrap();
/// assert!(wkt.is_collection());
/// assert_eq!(wkt.write(), "MULTIPOINT((30 10),(10 30))");
/// ```
#[derive(Clone, Debug, Default)]
pub struct Wkt {
    /// Geometries read from the last document, in document order
    pub components: Vec<Geometry>,
    config: WktConfig,
}

impl Wkt {
    pub fn new() -> Self {
        Self::default()
    }

    /// Instantiate with custom formatting options
    pub fn with_config(config: WktConfig) -> GeomResult<Self> {
        config.validate()?;
        Ok(Self {
            components: Vec::new(),
            config,
        })
    }

    pub fn config(&self) -> &WktConfig {
        &self.config
    }

    /// Read a document, replacing the held geometries.
    ///
    /// On failure the held geometries are left unchanged.
    pub fn read(&mut self, document: &str) -> GeomResult<&[Geometry]> {
        self.components = read(document, &self.config)?;
        Ok(&self.components)
    }

    /// Write the held geometries
    pub fn write(&self) -> String {
        self.write_components(&self.components)
    }

    /// Write the given geometries with this object's formatting options
    pub fn write_components(&self, components: &[Geometry]) -> String {
        write(components, &self.config)
    }

    /// Returns true when the held geometry is made of several parts.
    ///
    /// This is the case for multi types, collections, and documents holding more
    /// than one geometry.
    pub fn is_collection(&self) -> bool {
        match self.components.as_slice() {
            [single] => single.kind().is_multi(),
            [] => false,
            _ => true,
        }
    }

    /// Merge the geometries of another object into this one.
    ///
    /// All held geometries, followed by those of `other`, are folded into a single
    /// geometry with [`Geometry::merge`].
    pub fn merge(&mut self, other: &Wkt) {
        let merged = self
            .components
            .drain(..)
            .chain(other.components.iter().cloned())
            .reduce(Geometry::merge);
        self.components = merged.into_iter().collect();
    }

    /// Compare two coordinates for exact equality
    pub fn same_coords(&self, a: &Coordinate, b: &Coordinate) -> bool {
        same_coords(a, b)
    }

    /// Replace the held geometries with one read from a host library object
    pub fn from_object<I: GeometryInspector>(
        &mut self,
        inspector: &I,
        obj: &I::Object,
    ) -> GeomResult<&mut Self> {
        let geom = adapter::from_object(inspector, obj)?;
        log::trace!("Read {} from host object", geom.kind());
        self.components = vec![geom];
        Ok(self)
    }

    /// Build host library objects for the held geometries
    pub fn to_object<F: GeometryFactory>(&self, factory: &F) -> Vec<F::Object> {
        self.components
            .iter()
            .map(|geom| adapter::to_object(factory, geom))
            .collect()
    }

    /// Types of the held geometries
    pub fn kinds(&self) -> Vec<GeometryKind> {
        self.components.iter().map(Geometry::kind).collect()
    }
}

impl FromStr for Wkt {
    type Err = GeometryError;

    fn from_str(s: &str) -> GeomResult<Self> {
        let mut wkt = Wkt::new();
        wkt.read(s)?;
        Ok(wkt)
    }
}
