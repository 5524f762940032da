//! End-to-end tests: fixture headers in, generated mock headers out.

mod helpers;

use helpers::{fixture, fixture_path};
use mockgen_core::error::MockgenError;
use mockgen_core::types::MockConfig;
use mockgen_core::{build_mocked_classes, generate_file, generate_mocks, load_mockgen_config};
use tempfile::TempDir;

// ---------------------------------------------------------------------------
// Pure pipeline
// ---------------------------------------------------------------------------

#[test]
fn test_shape_matches_expected_output() {
    assert_eq!(generate_mocks(&fixture("shape.h")), fixture("shape.expected.h"));
}

#[test]
fn test_multiple_classes_in_discovery_order() {
    assert_eq!(generate_mocks(&fixture("multi.h")), fixture("multi.expected.h"));
}

#[test]
fn test_constructors_destructors_and_fields_are_skipped() {
    let classes = build_mocked_classes(&fixture("multi.h"));
    let names: Vec<&str> = classes[0].methods.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["open", "close", "read", "id"]);
    assert!(classes[0].methods[3].is_inline);
    assert!(classes[0].methods.iter().take(3).all(|m| m.is_virtual));
}

#[test]
fn test_truncated_class_emits_header_only() {
    let out = generate_mocks(&fixture("truncated.h"));
    assert!(out.contains("MOCK_METHOD0(value, int());"), "got:\n{out}");
    assert!(
        out.contains("class MockTruncated : public Truncated{\npublic:\n};\n"),
        "Truncated class should have no methods, got:\n{out}"
    );
    assert!(!out.contains("start"), "got:\n{out}");
}

#[test]
fn test_one_malformed_class_does_not_affect_others() {
    let classes = build_mocked_classes(&fixture("truncated.h"));
    assert_eq!(classes.len(), 2);
    assert_eq!(classes[0].original_name, "Complete");
    assert_eq!(classes[0].methods.len(), 1);
    assert_eq!(classes[1].original_name, "Truncated");
    assert!(classes[1].methods.is_empty());
}

#[test]
fn test_duplicate_class_names_emit_twice() {
    let src = "class Twin {\n  virtual void a() = 0;\n};\nclass Twin {\n  virtual void b() = 0;\n};\n";
    let classes = build_mocked_classes(src);
    assert_eq!(classes.len(), 2);
    // Both resolve to the first body.
    assert_eq!(classes[0].methods, classes[1].methods);
    assert_eq!(classes[1].methods[0].name, "a");
}

// ---------------------------------------------------------------------------
// File I/O
// ---------------------------------------------------------------------------

#[test]
fn test_generate_file_writes_output_and_reports() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let output = dir.path().join("mock_multi.h");

    let report = generate_file(&fixture_path("multi.h"), &output, &MockConfig::default())
        .expect("generation should succeed");

    assert_eq!(std::fs::read_to_string(&output).unwrap(), fixture("multi.expected.h"));
    assert_eq!(report.classes.len(), 2);
    assert_eq!(report.method_count(), 5);
    assert_eq!(report.output_bytes, fixture("multi.expected.h").len());
}

#[test]
fn test_missing_input_is_fatal_and_writes_nothing() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let output = dir.path().join("out.h");

    let err = generate_file(&dir.path().join("nope.h"), &output, &MockConfig::default())
        .unwrap_err();
    assert!(matches!(err, MockgenError::ReadInput { .. }), "got: {err}");
    assert!(!output.exists());
}

#[test]
fn test_unwritable_output_is_fatal() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let output = dir.path().join("no_such_dir").join("out.h");

    let err = generate_file(&fixture_path("shape.h"), &output, &MockConfig::default())
        .unwrap_err();
    assert!(matches!(err, MockgenError::WriteOutput { .. }), "got: {err}");
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

#[test]
fn test_config_file_in_directory_is_applied() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    std::fs::write(
        dir.path().join(".mockgen.toml"),
        "include = '\"gmock_all.h\"'\nprefix = \"Stub\"\nindent = \"\\t\"\n",
    )
    .unwrap();

    let config = load_mockgen_config(dir.path());
    let out = mockgen_core::generate_mocks_with(&fixture("shape.h"), &config);
    assert!(out.starts_with("#include \"gmock_all.h\"\nclass StubShape : public Shape{\n"), "got:\n{out}");
    assert!(out.contains("\tMOCK_METHOD0(area, double());\n"), "got:\n{out}");
}

#[test]
fn test_invalid_config_in_directory_falls_back_to_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    std::fs::write(dir.path().join(".mockgen.toml"), "prefix = [1, 2]\n").unwrap();
    assert_eq!(load_mockgen_config(dir.path()), MockConfig::default());
}

#[test]
fn test_missing_config_uses_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    assert_eq!(load_mockgen_config(dir.path()), MockConfig::default());
}
