//! Mock emission — render gmock classes from parsed signatures.

use crate::types::{FunctionSignature, MockConfig, MockedClass};

/// One `MOCK_METHODn(name, ret(params));` line, newline-terminated.
pub fn emit_mock_method(sig: &FunctionSignature, indent: &str) -> String {
    format!(
        "{indent}MOCK_METHOD{}({}, {}({}));\n",
        sig.arity(),
        sig.name,
        sig.return_type,
        sig.parameters.join(", ")
    )
}

/// Render a mock class for `name` with the default configuration.
pub fn emit_mock_class(name: &str, signatures: &[FunctionSignature]) -> String {
    emit_mock_class_with(name, signatures, &MockConfig::default())
}

/// Render a mock class for `name`.
///
/// Signatures without a name or return type are skipped. A class with no
/// mockable methods still gets its include, header and closing lines.
pub fn emit_mock_class_with(
    name: &str,
    signatures: &[FunctionSignature],
    config: &MockConfig,
) -> String {
    let mut out = String::new();
    out.push_str(&config.include_line);
    out.push('\n');
    out.push_str(&format!("class {}{name} : public {name}{{\n", config.class_prefix));
    out.push_str("public:\n");
    for sig in signatures.iter().filter(|s| s.is_mockable()) {
        out.push_str(&emit_mock_method(sig, &config.indent));
    }
    out.push_str("};\n");
    out
}

/// Concatenate mock blocks in class order, each followed by a blank line.
pub fn render_mocks(classes: &[MockedClass], config: &MockConfig) -> String {
    let mut out = String::new();
    for class in classes {
        out.push_str(&emit_mock_class_with(&class.original_name, &class.methods, config));
        out.push('\n');
    }
    out
}
