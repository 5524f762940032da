//! mockgen — generate gmock classes from C++ headers.
//!
//! This crate scans a header, finds each `class Name { ... }` block, pulls out the
//! member function declarations, and renders a `MockName` class deriving from it
//! with one `MOCK_METHODn` line per method.
//!
//! # Modules
//!
//! - [`scan`] — Class discovery and brace-matched body extraction
//! - [`segment`] — Splitting a class body into member declarations
//! - [`signature`] — Decomposing a declaration into name, return type, parameters
//! - [`emit`] — Rendering mock classes
//! - [`types`] — Data types shared across the pipeline
//! - [`error`] — Fatal I/O and configuration errors

pub mod emit;
pub mod error;
pub mod scan;
pub mod segment;
pub mod signature;
pub mod types;

use std::path::Path;

use tracing::{debug, info, trace, warn};

use error::{MockgenError, Result};
use types::*;

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

/// Scan `source` and collect the mockable methods of every class, in discovery order.
pub fn build_mocked_classes(source: &str) -> Vec<MockedClass> {
    scan::scan_classes(source)
        .into_iter()
        .map(|class| {
            let signatures: Vec<FunctionSignature> = segment::segment(&class.body)
                .iter()
                .inspect(|decl| {
                    trace!(class = class.name.as_str(), decl = decl.as_str(), "Declaration")
                })
                .map(|decl| signature::parse(decl))
                .collect();
            let mocked = MockedClass::new(class.name, signatures);
            debug!(
                class = mocked.original_name.as_str(),
                methods = mocked.methods.len(),
                "Class scanned"
            );
            mocked
        })
        .collect()
}

/// Generate the full mock header text for `source` with the default configuration.
pub fn generate_mocks(source: &str) -> String {
    generate_mocks_with(source, &MockConfig::default())
}

pub fn generate_mocks_with(source: &str, config: &MockConfig) -> String {
    emit::render_mocks(&build_mocked_classes(source), config)
}

// ---------------------------------------------------------------------------
// File I/O
// ---------------------------------------------------------------------------

/// Read a header file. Invalid UTF-8 is replaced rather than rejected.
pub fn read_header(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)
        .map_err(|source| MockgenError::ReadInput { path: path.to_path_buf(), source })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

pub fn write_mocks(path: &Path, text: &str) -> Result<()> {
    std::fs::write(path, text)
        .map_err(|source| MockgenError::WriteOutput { path: path.to_path_buf(), source })
}

/// Read `input`, generate mocks for every class, and write them to `output`.
///
/// Nothing is written when the input cannot be read.
pub fn generate_file(input: &Path, output: &Path, config: &MockConfig) -> Result<GenerationReport> {
    let source = read_header(input)?;
    let classes = build_mocked_classes(&source);
    let text = emit::render_mocks(&classes, config);
    write_mocks(output, &text)?;

    let report = GenerationReport {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        classes,
        output_bytes: text.len(),
    };
    info!(
        input = %input.display(),
        output = %output.display(),
        classes = report.classes.len(),
        methods = report.method_count(),
        "Mocks generated"
    );
    Ok(report)
}

// ---------------------------------------------------------------------------
// .mockgen.toml config loading
// ---------------------------------------------------------------------------

/// Name of the per-directory config file.
pub const CONFIG_FILE_NAME: &str = ".mockgen.toml";

/// Known keys in `.mockgen.toml` for config validation.
const KNOWN_CONFIG_KEYS: &[&str] = &["include", "prefix", "indent"];

/// Simple Levenshtein edit distance for typo suggestions.
fn edit_distance(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];
    for (i, &ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let cost = if ca == cb { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

/// Turn an include target (`<gmock/gmock.h>` or `"mocks.h"`) into an include line.
/// A value that already starts with `#include` is used as-is.
pub fn include_line_for(target: &str) -> String {
    let target = target.trim();
    if target.starts_with("#include") {
        target.to_string()
    } else {
        format!("#include {target}")
    }
}

/// Parse config file content into a [`MockConfig`], starting from defaults.
///
/// Unknown keys only warn; values of the wrong type are errors.
pub fn parse_config(content: &str, path: &Path) -> Result<MockConfig> {
    let invalid = |message: String| MockgenError::Config { path: path.to_path_buf(), message };

    let table: toml::Table = content.parse().map_err(|e: toml::de::Error| invalid(e.to_string()))?;
    let mut config = MockConfig::default();

    // Validate keys — warn on unknown
    for key in table.keys() {
        if KNOWN_CONFIG_KEYS.contains(&key.as_str()) {
            continue;
        }
        let suggestion = KNOWN_CONFIG_KEYS
            .iter()
            .min_by_key(|k| edit_distance(key, k))
            .filter(|k| edit_distance(key, k) <= 3);
        match suggestion {
            Some(suggestion) => warn!(
                key = key.as_str(),
                suggestion = *suggestion,
                "Unknown key in {CONFIG_FILE_NAME} — did you mean '{suggestion}'?"
            ),
            None => warn!(
                key = key.as_str(),
                "Unknown key in {CONFIG_FILE_NAME} (known keys: {})",
                KNOWN_CONFIG_KEYS.join(", ")
            ),
        }
    }

    if let Some(value) = table.get("include") {
        let target =
            value.as_str().ok_or_else(|| invalid("'include' must be a string".to_string()))?;
        config.include_line = include_line_for(target);
    }

    if let Some(value) = table.get("prefix") {
        let prefix = value.as_str().ok_or_else(|| invalid("'prefix' must be a string".to_string()))?;
        config.class_prefix = prefix.to_string();
    }

    // indent — either a number of spaces or a literal string
    if let Some(value) = table.get("indent") {
        config.indent = match value {
            toml::Value::Integer(n) if (0..=16).contains(n) => " ".repeat(*n as usize),
            toml::Value::String(s) => s.clone(),
            _ => return Err(invalid("'indent' must be a string or an integer 0-16".to_string())),
        };
    }

    Ok(config)
}

/// Load an explicitly requested config file. Any failure is fatal.
pub fn load_config_file(path: &Path) -> Result<MockConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| MockgenError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    parse_config(&content, path)
}

/// Load `.mockgen.toml` from `dir`, falling back to defaults with a warning if it
/// is missing or invalid.
pub fn load_mockgen_config(dir: &Path) -> MockConfig {
    let config_path = dir.join(CONFIG_FILE_NAME);
    if !config_path.exists() {
        return MockConfig::default();
    }

    debug!(path = %config_path.display(), "Loading {CONFIG_FILE_NAME}");
    match load_config_file(&config_path) {
        Ok(config) => config,
        Err(e) => {
            warn!(error = %e, "Ignoring {CONFIG_FILE_NAME}, using defaults");
            MockConfig::default()
        }
    }
}
