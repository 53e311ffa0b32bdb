use crate::Coordinate;
use crate::GeometryKind;
use crate::core::{GeomResult, GeometryError};
use regex::Regex;
use std::sync::OnceLock;

const GEOM_TYPE: &str = r"^\s*([A-Za-z]+)";
const NUMBER: &str = r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?$";
const EMPTY_MARKER: &str = r"(?i)^EMPTY$";

static GEOM_TYPE_RE: OnceLock<Regex> = OnceLock::new();
static NUMBER_RE: OnceLock<Regex> = OnceLock::new();
static EMPTY_MARKER_RE: OnceLock<Regex> = OnceLock::new();

// Get geometry type regex once to avoid recompilation (thread-safe)
fn geom_type_re() -> &'static Regex {
    GEOM_TYPE_RE.get_or_init(|| Regex::new(GEOM_TYPE).unwrap())
}

fn number_re() -> &'static Regex {
    NUMBER_RE.get_or_init(|| Regex::new(NUMBER).unwrap())
}

fn empty_marker_re() -> &'static Regex {
    EMPTY_MARKER_RE.get_or_init(|| Regex::new(EMPTY_MARKER).unwrap())
}

// Shorten long input for error messages
fn excerpt(text: &str) -> String {
    const MAX_CHARS: usize = 40;
    let trimmed = text.trim();
    if trimmed.chars().count() <= MAX_CHARS {
        trimmed.to_string()
    } else {
        let head: String = trimmed.chars().take(MAX_CHARS).collect();
        format!("{head}...")
    }
}

/// True if the text is the `EMPTY` marker (any case, surrounding whitespace ignored)
pub fn is_empty_marker(text: &str) -> bool {
    empty_marker_re().is_match(text.trim())
}

/// Identify the geometry type keyword at the start of a WKT string.
///
/// Returns the type and the remainder of the text after the keyword.
pub fn match_type(text: &str) -> GeomResult<(GeometryKind, &str)> {
    let Some(cap) = geom_type_re().captures(text) else {
        return Err(GeometryError::UnrecognizedType(format!(
            "no geometry keyword at '{}'",
            excerpt(text)
        )));
    };
    let (whole, [word]) = cap.extract();
    match GeometryKind::from_keyword(word) {
        Some(kind) => Ok((kind, &text[whole.len()..])),
        None => Err(GeometryError::UnrecognizedType(word.to_string())),
    }
}

/// Split text on a separator, ignoring separators nested inside parentheses.
///
/// Parts are returned trimmed. Text that is empty or only whitespace has no parts.
///
/// Examples
/// ```rust
/// use wktlib::serialization::tokens::split_top_level;
/// let rings = split_top_level("(0 0,1 0),(2 2,3 3)", ',').unwrap();
/// assert_eq!(rings, vec!["(0 0,1 0)", "(2 2,3 3)"]);
/// ```
pub fn split_top_level(text: &str, separator: char) -> GeomResult<Vec<&str>> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut parts = Vec::new();
    let mut depth: usize = 0;
    let mut start = 0;
    for (idx, ch) in text.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => {
                if depth == 0 {
                    return Err(GeometryError::UnbalancedDelimiters(format!(
                        "unexpected ')' in '{}'",
                        excerpt(text)
                    )));
                }
                depth -= 1;
            }
            c if c == separator && depth == 0 => {
                parts.push(text[start..idx].trim());
                start = idx + c.len_utf8();
            }
            _ => (),
        }
    }
    if depth != 0 {
        return Err(GeometryError::UnbalancedDelimiters(format!(
            "{depth} unclosed '(' in '{}'",
            excerpt(text)
        )));
    }
    parts.push(text[start..].trim());
    Ok(parts)
}

/// Remove the single pair of parentheses wrapping a component list.
///
/// The `EMPTY` marker is accepted in place of a wrapped list and yields an
/// empty string.
pub fn strip_outer_parens(text: &str) -> GeomResult<&str> {
    let trimmed = text.trim();
    if is_empty_marker(trimmed) {
        return Ok("");
    }

    let mut depth: usize = 0;
    let mut first_close = None;
    for (idx, ch) in trimmed.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => {
                if depth == 0 {
                    return Err(GeometryError::UnbalancedDelimiters(format!(
                        "unexpected ')' in '{}'",
                        excerpt(trimmed)
                    )));
                }
                depth -= 1;
                if depth == 0 && first_close.is_none() {
                    first_close = Some(idx);
                }
            }
            _ => (),
        }
    }
    if depth != 0 {
        return Err(GeometryError::UnbalancedDelimiters(format!(
            "{depth} unclosed '(' in '{}'",
            excerpt(trimmed)
        )));
    }

    match first_close {
        Some(end) if trimmed.starts_with('(') && end == trimmed.len() - 1 => Ok(&trimmed[1..end]),
        _ => Err(GeometryError::MalformedGeometry(format!(
            "expected one parenthesized list, got '{}'",
            excerpt(trimmed)
        ))),
    }
}

// Parse a single numeric literal
fn parse_number(token: &str) -> GeomResult<f64> {
    if !number_re().is_match(token) {
        return Err(GeometryError::InvalidCoordinate(format!(
            "'{token}' is not a number"
        )));
    }
    let value = token
        .parse::<f64>()
        .map_err(|e| GeometryError::InvalidCoordinate(format!("'{token}': {e}")))?;
    if !value.is_finite() {
        return Err(GeometryError::InvalidCoordinate(format!(
            "'{token}' is out of range"
        )));
    }
    Ok(value)
}

/// Parse a coordinate pair of the form `x y`
pub fn parse_coordinate_pair(text: &str) -> GeomResult<Coordinate> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    match tokens.as_slice() {
        [x, y] => Ok(Coordinate::new(parse_number(x)?, parse_number(y)?)),
        _ => Err(GeometryError::InvalidCoordinate(format!(
            "expected 2 values, found {} in '{}'",
            tokens.len(),
            excerpt(text)
        ))),
    }
}
