//! Signature parsing — decompose one member declaration into name, return type,
//! parameters and qualifiers.
//!
//! The parameter list is captured between the first `(` and the last `)` of the
//! declaration. Function-pointer parameters and parenthesized default values are
//! therefore not isolated correctly.

use tracing::trace;

use crate::types::FunctionSignature;

/// Specifiers removed from the declaration head before picking name and return type.
const STRIPPED_KEYWORDS: &[&str] = &["virtual", "inline"];

/// Split the text between the outer parentheses into verbatim parameters.
fn parse_parameters(declaration: &str, open: usize) -> Vec<String> {
    let close = match declaration.rfind(')') {
        Some(pos) if pos > open => pos,
        _ => return Vec::new(),
    };
    let inner = &declaration[open + 1..close];
    if inner.trim().is_empty() {
        return Vec::new();
    }
    inner.split(',').map(|p| p.trim().to_string()).collect()
}

/// Parse a raw declaration such as `virtual void setName(std::string name) = 0`.
///
/// A signature with an empty name or return type is returned as-is; callers
/// filter with [`FunctionSignature::is_mockable`].
pub fn parse(declaration: &str) -> FunctionSignature {
    let mut sig = FunctionSignature {
        is_virtual: declaration.contains("virtual"),
        is_inline: declaration.contains("inline"),
        ..Default::default()
    };

    let Some(open) = declaration.find('(') else {
        trace!(declaration = declaration, "No parameter list");
        return sig;
    };

    let head = declaration[..open].trim();
    let mut tokens: Vec<&str> =
        head.split_whitespace().filter(|t| !STRIPPED_KEYWORDS.contains(t)).collect();

    let Some(name) = tokens.pop() else {
        trace!(declaration = declaration, "No name before parameter list");
        return sig;
    };
    sig.name = name.to_string();
    sig.return_type = tokens.join(" ");
    sig.parameters = parse_parameters(declaration, open);

    if sig.return_type.is_empty() {
        trace!(name = sig.name.as_str(), "No return type (constructor or destructor)");
    }
    sig
}
