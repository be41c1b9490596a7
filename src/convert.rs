//! The full extraction -> transcoding -> emission pipeline

use crate::config::TargetSpec;
use crate::emit::{AliasMapping, HeaderEmitter};
use crate::error::Result;
use crate::extract::{Extractor, IdentifierKind};
use crate::transcode::Transcoder;

/// Converts one header's text into its alias-header text.
///
/// Every extracted identifier produces exactly one mapping; block order
/// matches discovery order.
pub fn convert_header(source: &str, target: &TargetSpec) -> Result<String> {
    let extractor = Extractor::new(&target.config)?;
    let transcoder = Transcoder::new()?;

    let mut types = Vec::new();
    let mut functions = Vec::new();

    for identifier in extractor.extract(source) {
        let snake = transcoder.to_snake_case(&identifier.raw_name);
        match identifier.kind {
            IdentifierKind::Type => {
                let converted = format!("{}{}", snake, target.config.type_suffix);
                types.push(AliasMapping::new(identifier.raw_name, converted));
            }
            IdentifierKind::Function => {
                let converted = format!("{}{}", target.config.function_prefix, snake);
                functions.push(AliasMapping::new(identifier.raw_name, converted));
            }
        }
    }

    let mut emitter = HeaderEmitter::new();
    Ok(emitter.render(target, &types, &functions))
}
