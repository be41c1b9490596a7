//! Conversion settings for a target header
//!
//! All knobs live in explicit records handed to the extractor, transcoder
//! and emitter; there is no process-wide mutable configuration.

/// Naming rules applied while converting one header.
#[derive(Debug, Clone)]
pub struct AliasConfig {
    /// Appended to every converted type name (`Vector2` -> `vector2_t`).
    pub type_suffix: String,
    /// Prepended to every converted function name (`InitWindow` -> `rl_init_window`).
    pub function_prefix: String,
    /// Names that bypass transcoding and emission entirely. Checked for
    /// type identifiers only; function identifiers are never excluded.
    pub exclude: Vec<String>,
    /// API-export markers that introduce a function declaration.
    pub export_markers: Vec<String>,
}

impl Default for AliasConfig {
    fn default() -> Self {
        Self {
            type_suffix: "_t".to_string(),
            function_prefix: "rl_".to_string(),
            exclude: vec!["bool".to_string()],
            export_markers: vec!["RLAPI".to_string(), "extern".to_string()],
        }
    }
}

impl AliasConfig {
    pub fn is_excluded(&self, name: &str) -> bool {
        self.exclude.iter().any(|excluded| excluded == name)
    }
}

/// One input header together with its output file, include guard and
/// naming rules.
#[derive(Debug, Clone)]
pub struct TargetSpec {
    pub header: String,
    pub output: String,
    pub guard: String,
    pub config: AliasConfig,
}

impl TargetSpec {
    pub fn new(
        header: impl Into<String>,
        output: impl Into<String>,
        guard: impl Into<String>,
        config: AliasConfig,
    ) -> Self {
        Self {
            header: header.into(),
            output: output.into(),
            guard: guard.into(),
            config,
        }
    }

    /// The two headers a default run converts: raylib's primary header
    /// and the raymath companion, each with its own function prefix and
    /// export markers.
    pub fn builtin() -> Vec<TargetSpec> {
        vec![
            TargetSpec::new(
                "raylib.h",
                "raylib_s.h",
                "RAYLIB_S_H",
                AliasConfig::default(),
            ),
            TargetSpec::new(
                "raymath.h",
                "raymath_s.h",
                "RAYMATH_S_H",
                AliasConfig {
                    function_prefix: "rm_".to_string(),
                    export_markers: vec!["RMAPI".to_string(), "extern".to_string()],
                    ..AliasConfig::default()
                },
            ),
        ]
    }
}
