//! Core types shared across mockgen: discovered classes, parsed signatures,
//! mock generation configuration, and the per-run report.

use serde::Serialize;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Scanned source structures
// ---------------------------------------------------------------------------

/// A class found in the header, with the raw text between its outermost braces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassDeclaration {
    pub name: String,
    /// Empty when the class body could not be brace-matched.
    pub body: String,
}

/// One member function, decomposed from a raw declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FunctionSignature {
    pub name: String,
    pub return_type: String,
    /// Verbatim parameter declarations (`const Foo& foo`), in source order.
    pub parameters: Vec<String>,
    pub is_virtual: bool,
    pub is_inline: bool,
}

impl FunctionSignature {
    /// Only signatures with both a name and a return type produce a mock method.
    /// Constructors, destructors and fragments that failed to parse are rejected here.
    pub fn is_mockable(&self) -> bool {
        !self.name.is_empty() && !self.return_type.is_empty()
    }

    pub fn arity(&self) -> usize {
        self.parameters.len()
    }
}

/// A class together with the signatures accepted for emission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MockedClass {
    pub original_name: String,
    pub methods: Vec<FunctionSignature>,
}

impl MockedClass {
    /// Build from raw signatures, dropping the ones that cannot be mocked.
    pub fn new(original_name: impl Into<String>, signatures: Vec<FunctionSignature>) -> Self {
        Self {
            original_name: original_name.into(),
            methods: signatures.into_iter().filter(FunctionSignature::is_mockable).collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Generation configuration
// ---------------------------------------------------------------------------

pub const DEFAULT_INCLUDE_LINE: &str = "#include <gmock/gmock.h>";
pub const DEFAULT_CLASS_PREFIX: &str = "Mock";
pub const DEFAULT_INDENT: &str = "    ";

/// Rendering options. Loaded from `.mockgen.toml` or defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MockConfig {
    /// Emitted verbatim as the first line of every mock block.
    pub include_line: String,
    /// Prepended to the original class name to form the mock class name.
    pub class_prefix: String,
    /// Leading whitespace of each `MOCK_METHOD` line.
    pub indent: String,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            include_line: DEFAULT_INCLUDE_LINE.to_string(),
            class_prefix: DEFAULT_CLASS_PREFIX.to_string(),
            indent: DEFAULT_INDENT.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Run report
// ---------------------------------------------------------------------------

/// Summary of one `generate_file` run.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub classes: Vec<MockedClass>,
    pub output_bytes: usize,
}

impl GenerationReport {
    pub fn method_count(&self) -> usize {
        self.classes.iter().map(|c| c.methods.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signature_without_return_type_is_not_mockable() {
        let ctor = FunctionSignature { name: "Shape".into(), ..Default::default() };
        assert!(!ctor.is_mockable());
    }

    #[test]
    fn mocked_class_drops_rejected_signatures() {
        let sigs = vec![
            FunctionSignature { name: "Shape".into(), ..Default::default() },
            FunctionSignature {
                name: "area".into(),
                return_type: "double".into(),
                ..Default::default()
            },
        ];
        let class = MockedClass::new("Shape", sigs);
        assert_eq!(class.methods.len(), 1);
        assert_eq!(class.methods[0].name, "area");
    }
}
