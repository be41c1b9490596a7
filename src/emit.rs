//! Output header rendering
//!
//! Builds the generated header text: include guard, `#include` of the
//! original header, one macro block for types and one for functions,
//! closing guard comment.

use crate::config::TargetSpec;

/// One `#define` line: a converted name aliasing the original.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasMapping {
    pub original_name: String,
    pub converted_name: String,
}

impl AliasMapping {
    pub fn new(original_name: impl Into<String>, converted_name: impl Into<String>) -> Self {
        Self {
            original_name: original_name.into(),
            converted_name: converted_name.into(),
        }
    }
}

/// Renders the alias header for one target.
pub struct HeaderEmitter {
    output: String,
}

impl HeaderEmitter {
    pub fn new() -> Self {
        Self {
            output: String::new(),
        }
    }

    /// Mapping order is preserved verbatim within each block. No
    /// collision detection: two originals converting to the same name
    /// both emit their line, and the last `#define` wins at
    /// preprocessing time.
    pub fn render(
        &mut self,
        target: &TargetSpec,
        types: &[AliasMapping],
        functions: &[AliasMapping],
    ) -> String {
        self.output.push_str(&format!(
            "#ifndef {guard}\n#define {guard}\n\n",
            guard = target.guard
        ));
        self.output
            .push_str(&format!("#include \"{}\"\n\n", target.header));

        self.output.push_str("// Types\n");
        for mapping in types {
            self.emit_define(mapping);
        }

        self.output.push_str("\n// Functions\n");
        for mapping in functions {
            self.emit_define(mapping);
        }

        self.output
            .push_str(&format!("\n#endif // {}\n", target.guard));

        self.output.clone()
    }

    fn emit_define(&mut self, mapping: &AliasMapping) {
        self.output.push_str(&format!(
            "#define {} {}\n",
            mapping.converted_name, mapping.original_name
        ));
    }
}

impl Default for HeaderEmitter {
    fn default() -> Self {
        Self::new()
    }
}
