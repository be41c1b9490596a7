//! Structural identifier extraction
//!
//! Locates type and function declarations with regular expressions over
//! the raw header text. This is deliberately not a C parser: the
//! patterns catch the common declaration shapes and silently skip
//! anything else. The whole layer sits behind [`Extractor::extract`] so
//! it could be swapped for a real tokenizer without touching the
//! transcoding or emission stages.

use crate::config::AliasConfig;
use crate::error::Result;
use regex::Regex;

/// Whether an identifier names a type or a function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierKind {
    Type,
    Function,
}

/// A single identifier occurrence found in the source header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    pub raw_name: String,
    pub kind: IdentifierKind,
    /// Return type token, captured for function declarations only.
    pub return_type: Option<String>,
}

impl Identifier {
    fn type_name(name: &str) -> Self {
        Self {
            raw_name: name.to_string(),
            kind: IdentifierKind::Type,
            return_type: None,
        }
    }

    fn function(name: &str, return_type: &str) -> Self {
        Self {
            raw_name: name.to_string(),
            kind: IdentifierKind::Function,
            return_type: Some(return_type.to_string()),
        }
    }
}

/// Regex-driven extractor for one header's naming rules.
pub struct Extractor {
    typedef_patterns: Vec<Regex>,
    function_pattern: Regex,
    config: AliasConfig,
}

impl Extractor {
    /// Compiles the structural patterns. The function pattern embeds the
    /// config's export markers (`RLAPI`, `RMAPI`, `extern`, ...).
    pub fn new(config: &AliasConfig) -> Result<Self> {
        // Types, either:
        //   typedef some ____;
        //   typedef struct ____ {
        let typedef_patterns = vec![
            Regex::new(r"typedef\s+.+\s+(\w+)\s*;")?,
            Regex::new(r"typedef\s+struct\s+(\w+)\s*\{")?,
        ];

        // Marker, return-type token, capitalized name, then everything
        // up to the first `);`. `[\s\S]` lets the parameter list span
        // newlines.
        let function_pattern = Regex::new(&format!(
            r"(?:{})\s+(\w+)\s+([A-Z][a-zA-Z0-9]+)\(([\s\S]+?)\);",
            config.export_markers.join("|")
        ))?;

        Ok(Self {
            typedef_patterns,
            function_pattern,
            config: config.clone(),
        })
    }

    /// Yields every identifier the patterns can find, in pattern order
    /// and then document order within each pattern. Duplicate matches
    /// are kept: a one-line `typedef struct X { ... } X;` hits both
    /// typedef patterns and yields two identifiers.
    ///
    /// Excluded names are dropped here, before transcoding, for type
    /// identifiers only.
    pub fn extract(&self, source: &str) -> Vec<Identifier> {
        let mut identifiers = Vec::new();

        for pattern in &self.typedef_patterns {
            for captures in pattern.captures_iter(source) {
                let name = &captures[1];
                if self.config.is_excluded(name) {
                    continue;
                }
                identifiers.push(Identifier::type_name(name));
            }
        }

        for captures in self.function_pattern.captures_iter(source) {
            identifiers.push(Identifier::function(&captures[2], &captures[1]));
        }

        identifiers
    }
}
