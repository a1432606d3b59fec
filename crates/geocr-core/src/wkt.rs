//! # WKT Polygon Encoder
//!
//! Encodes a boundary ring as Well-Known Text: `POLYGON((lon lat, ...))`.
//!
//! ## Invariants
//!
//! - The emitted ring is always closed: its first and last vertices are
//!   textually identical. An open ring gets its first vertex appended; an
//!   already-closed ring is emitted as-is.
//! - A single vertex produces a degenerate two-vertex ring.
//! - A missing ordinate encodes as `0`; encoding never fails.
//! - Ordinates keep their JSON number formatting (`-122` vs `-122.0`).

use serde_json::Number;

/// One boundary vertex. Either ordinate may be missing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Coordinate {
    pub longitude: Option<Number>,
    pub latitude: Option<Number>,
}

impl Coordinate {
    /// Vertex with both ordinates present.
    pub fn new(longitude: impl Into<Number>, latitude: impl Into<Number>) -> Self {
        Self {
            longitude: Some(longitude.into()),
            latitude: Some(latitude.into()),
        }
    }

    fn token(&self) -> String {
        format!(
            "{} {}",
            ordinate(self.longitude.as_ref()),
            ordinate(self.latitude.as_ref())
        )
    }
}

fn ordinate(value: Option<&Number>) -> String {
    value.map_or_else(|| "0".to_owned(), Number::to_string)
}

/// Encode a vertex sequence as a WKT polygon.
///
/// Returns an empty string for an empty sequence.
pub fn to_wkt(points: &[Coordinate]) -> String {
    let mut tokens: Vec<String> = points.iter().map(Coordinate::token).collect();
    let Some(first) = tokens.first().cloned() else {
        return String::new();
    };
    if tokens.len() == 1 || tokens.last() != Some(&first) {
        tokens.push(first);
    }
    format!("POLYGON(({}))", tokens.join(", "))
}
