//! Header scanning — class discovery and brace-matched body extraction.
//!
//! Works on the raw header text: no preprocessing, no comment stripping.
//! A class body is located by anchoring on the literal `class <Name> {`
//! token sequence and counting braces from there.

use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

use crate::types::ClassDeclaration;

// ---------------------------------------------------------------------------
// Class name discovery
// ---------------------------------------------------------------------------

static CLASS_NAME_RE: OnceLock<Regex> = OnceLock::new();

fn class_name_re() -> &'static Regex {
    CLASS_NAME_RE.get_or_init(|| Regex::new(r"class\s+(\w+)\s*[:{]").unwrap())
}

/// Names of every `class X {` / `class X :` occurrence, in file order.
///
/// Repeated names are kept; forward declarations (`class X;`) are not matched.
pub fn extract_class_names(source: &str) -> Vec<String> {
    class_name_re()
        .captures_iter(source)
        .filter_map(|cap| cap.get(1).map(|m| m.as_str().trim().to_string()))
        .collect()
}

// ---------------------------------------------------------------------------
// Body extraction
// ---------------------------------------------------------------------------

/// Byte offset just past the `{` of the first `class <name> {` in `source`.
///
/// Requires at least one whitespace character between `class` and the name, and
/// allows any amount between the name and the brace. An inheritance clause
/// breaks the anchor, so `class D : public B {` never matches.
fn find_body_start(source: &str, name: &str) -> Option<usize> {
    if name.is_empty() {
        return None;
    }
    let bytes = source.as_bytes();
    let mut from = 0;

    while let Some(rel) = source[from..].find("class") {
        let keyword = from + rel;
        let mut i = keyword + "class".len();
        let ws_start = i;
        while i < bytes.len() && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        if i > ws_start && source[i..].starts_with(name) {
            let mut j = i + name.len();
            while j < bytes.len() && bytes[j].is_ascii_whitespace() {
                j += 1;
            }
            if j < bytes.len() && bytes[j] == b'{' {
                return Some(j + 1);
            }
        }
        from = keyword + 1;
    }
    None
}

/// Text between the outermost braces of `class <name> { ... }`, trimmed.
///
/// Returns an empty string when the class is not found or its braces never
/// balance (truncated input).
pub fn extract_class_body(source: &str, name: &str) -> String {
    let Some(start) = find_body_start(source, name) else {
        debug!(class = name, "No `class {name} {{` anchor found");
        return String::new();
    };

    let mut open_braces: usize = 1;
    for (offset, b) in source.as_bytes()[start..].iter().enumerate() {
        match b {
            b'{' => open_braces += 1,
            b'}' => {
                open_braces -= 1;
                if open_braces == 0 {
                    return source[start..start + offset].trim().to_string();
                }
            }
            _ => {}
        }
    }

    debug!(class = name, unclosed = open_braces, "Unbalanced braces, treating body as empty");
    String::new()
}

/// Discover all classes and extract their bodies, in discovery order.
pub fn scan_classes(source: &str) -> Vec<ClassDeclaration> {
    extract_class_names(source)
        .into_iter()
        .map(|name| {
            let body = extract_class_body(source, &name);
            ClassDeclaration { name, body }
        })
        .collect()
}
