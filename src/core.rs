use thiserror::Error;

const ATOL: f64 = 1e-12;
const RTOL: f64 = 1e-9;

/// Errors raised while reading or writing geometries
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("Unrecognized geometry type: {0}")]
    UnrecognizedType(String),
    #[error("Unbalanced delimiters: {0}")]
    UnbalancedDelimiters(String),
    #[error("Malformed geometry: {0}")]
    MalformedGeometry(String),
    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),
    #[error("Invalid parameter: {0}")]
    ParameterError(String),
    #[error("Geometry {index} of document: {source}")]
    InDocument {
        index: usize,
        #[source]
        source: Box<GeometryError>,
    },
}

pub type GeomResult<T> = Result<T, GeometryError>;

/// Trait with common functionality for all geometric objects
pub trait GeometricObject {
    /// WKT representation using the default configuration
    fn wkt(&self) -> String;
}

/// Macro to implement the Display trait for Geometric Object types
macro_rules! display_for_geom {
    ($type:ty) => {
        impl std::fmt::Display for $type {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                write!(f, "{}", self.wkt())
            }
        }
    };
}

pub(crate) use display_for_geom;

// Whether two numbers are within the given relative and absolute tolerances.
// Negative tolerances never match.
pub(crate) fn is_close(a: f64, b: f64, rtol: f64, atol: f64) -> bool {
    let scale = a.abs().max(b.abs());
    (a - b).abs() < (atol + rtol * scale)
}

/// Determine if two values are approximately equal to one another.
///
/// Uses a relative tolerance of `1e-9` and an absolute tolerance of `1e-12`.
///
/// Example:
/// ```rust
/// let x1 = 0.123;
/// let x2 = 0.123 + 1e-14;
///
/// assert!(wktlib::approx(x1, x2));
/// ```
pub fn approx(a: f64, b: f64) -> bool {
    is_close(a, b, RTOL, ATOL)
}
