//! CamelCase to snake_case conversion
//!
//! An ordered sequence of textual rewrites; each rule re-scans the
//! string the previous rule produced, so the order is load-bearing.

use crate::error::Result;
use regex::Regex;

/// Literal fixups applied after lowercasing. They bind the digit of a
/// numbered vector type to the word instead of the following segment:
/// `Vector2Add` comes out of the boundary rules as `vector_2add` and
/// ends up as `vector2_add`.
const NUMBERED_FIXUPS: [(&str, &str); 2] = [("vector_2", "vector2_"), ("vector_3", "vector3_")];

/// Converts CamelCase identifiers to lowercase snake_case.
pub struct Transcoder {
    acronym_boundary: Regex,
    camel_boundary: Regex,
    digit_boundary: Regex,
}

impl Transcoder {
    pub fn new() -> Result<Self> {
        Ok(Self {
            // A run of uppercase letters before an Upper+lower pair,
            // like 'POT' in 'POTImage'
            acronym_boundary: Regex::new(r"([A-Z]+)([A-Z][a-z])")?,
            // The plain camelCase boundary: Clear|Background
            camel_boundary: Regex::new(r"([a-z])([A-Z])")?,
            // A digit that still has a word after it: BeginMode3D yes,
            // Vector3 no
            digit_boundary: Regex::new(r"([a-z])([0-9][A-Z])")?,
        })
    }

    /// Pure and deterministic. Not idempotent: already-snake input
    /// containing a numbered-vector segment is still rewritten by the
    /// fixup table.
    pub fn to_snake_case(&self, name: &str) -> String {
        let name = self.acronym_boundary.replace_all(name, "${1}_${2}");
        let name = self.camel_boundary.replace_all(&name, "${1}_${2}");
        let name = self.digit_boundary.replace_all(&name, "${1}_${2}");

        let mut name = name.to_lowercase();
        for (from, to) in NUMBERED_FIXUPS {
            name = name.replace(from, to);
        }
        name
    }
}
