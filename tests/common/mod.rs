#![allow(dead_code)]

use raysnake::config::TargetSpec;
use raysnake::convert::convert_header;
use raysnake::error::ConvertError;

pub mod snapshot_utils;

/// The built-in raylib target (rl_ prefix, RLAPI marker).
pub fn raylib_target() -> TargetSpec {
    TargetSpec::builtin()
        .into_iter()
        .find(|target| target.header == "raylib.h")
        .expect("raylib target is built in")
}

/// The built-in raymath target (rm_ prefix, RMAPI marker).
pub fn raymath_target() -> TargetSpec {
    TargetSpec::builtin()
        .into_iter()
        .find(|target| target.header == "raymath.h")
        .expect("raymath target is built in")
}

/// Shared utility to run the full extraction -> transcoding -> emission
/// pipeline over a header source.
pub fn convert(source: &str, target: &TargetSpec) -> Result<String, ConvertError> {
    convert_header(source, target)
}
