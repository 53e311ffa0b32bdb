use super::core::{GeomResult, GeometryError};
use super::serialization::{Extract, Ingest};

/// Formatting options for reading and writing WKT documents
///
/// Examples
/// ```rust
/// use wktlib::WktConfig;
/// let config = WktConfig::default().with_wrap_vertices(true);
/// assert_eq!(config.delimiter, ';');
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WktConfig {
    /// Separates complete geometries in a document
    pub delimiter: char,
    /// Separates components (coordinates, rings, parts, members) inside a geometry
    pub separator: char,
    /// Write multipoint members as `(x y)` rather than `x y`
    pub wrap_vertices: bool,
}

impl Default for WktConfig {
    fn default() -> Self {
        Self {
            delimiter: ';',
            separator: ',',
            wrap_vertices: false,
        }
    }
}

// Characters that already carry meaning in WKT text
fn is_reserved(c: char) -> bool {
    matches!(c, '(' | ')' | '+' | '-' | '.') || c.is_whitespace() || c.is_ascii_alphanumeric()
}

impl WktConfig {
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    pub fn with_wrap_vertices(mut self, wrap_vertices: bool) -> Self {
        self.wrap_vertices = wrap_vertices;
        self
    }

    /// Check that the delimiter and separator can be told apart from WKT content
    pub fn validate(&self) -> GeomResult<()> {
        if is_reserved(self.delimiter) {
            return Err(GeometryError::ParameterError(format!(
                "'{}' cannot be used as a document delimiter",
                self.delimiter
            )));
        }
        if is_reserved(self.separator) {
            return Err(GeometryError::ParameterError(format!(
                "'{}' cannot be used as a component separator",
                self.separator
            )));
        }
        if self.delimiter == self.separator {
            return Err(GeometryError::ParameterError(format!(
                "The delimiter and separator must differ, both are '{}'",
                self.separator
            )));
        }
        Ok(())
    }

    /// Reader using the configured separator
    pub fn ingest(&self) -> Ingest {
        Ingest::new(self.separator)
    }

    /// Writer using the configured separator and vertex wrapping
    pub fn extract(&self) -> Extract {
        Extract::new(self.separator, self.wrap_vertices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_valid() {
        let config = WktConfig::default();
        assert_eq!(config.separator, ',');
        assert!(!config.wrap_vertices);
        config.validate().unwrap();
    }

    #[test]
    fn test_custom_valid() {
        let config = WktConfig::default().with_delimiter('\u{1e}').with_separator('|');
        config.validate().unwrap();
    }

    #[test]
    fn test_invalid() {
        for config in [
            WktConfig::default().with_separator(' '),
            WktConfig::default().with_separator('('),
            WktConfig::default().with_separator('-'),
            WktConfig::default().with_separator('e'),
            WktConfig::default().with_delimiter('7'),
            WktConfig::default().with_delimiter('\n'),
            WktConfig::default().with_delimiter(','),
        ] {
            match config.validate() {
                Err(GeometryError::ParameterError(_)) => (),
                other => panic!("Expected parameter error for {config:?}, got {other:?}"),
            }
        }
    }
}
