//! mockgen CLI — generate gmock classes from a C++ header.
//!
//! Calls `mockgen-core` directly: read the header, render one mock per class,
//! write the result.

use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::debug;

use mockgen_core::types::{GenerationReport, MockConfig};
use mockgen_core::{
    build_mocked_classes, emit, include_line_for, load_config_file, load_mockgen_config,
    read_header,
};

/// Generate gmock mock classes for every class declared in a C++ header.
#[derive(Parser)]
#[command(name = "mockgen", version, about)]
struct Cli {
    /// Header file to scan
    input: PathBuf,

    /// Header file to write the mock classes to
    output: PathBuf,

    /// Config file (default: .mockgen.toml next to the input)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Mocking framework include, e.g. '<gmock/gmock.h>'
    #[arg(long)]
    include: Option<String>,

    /// Prefix for generated class names
    #[arg(long)]
    prefix: Option<String>,

    /// Print the generated header to stdout instead of writing OUTPUT
    #[arg(long)]
    dry_run: bool,

    /// Output a JSON report instead of human-readable text
    #[arg(long)]
    json: bool,

    /// Log each class as it is scanned
    #[arg(short, long)]
    verbose: bool,
}

fn resolve_config(cli: &Cli) -> MockConfig {
    let mut config = match &cli.config {
        Some(path) => load_config_file(path).unwrap_or_else(|e| {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }),
        None => load_mockgen_config(cli.input.parent().unwrap_or(Path::new("."))),
    };

    if let Some(include) = &cli.include {
        config.include_line = include_line_for(include);
    }
    if let Some(prefix) = &cli.prefix {
        config.class_prefix = prefix.clone();
    }
    debug!(
        include = config.include_line.as_str(),
        prefix = config.class_prefix.as_str(),
        "Resolved config"
    );
    config
}

fn print_summary(report: &GenerationReport, config: &MockConfig) {
    for class in &report.classes {
        eprintln!(
            "  {:<40} {} methods",
            format!("{}{}", config.class_prefix, class.original_name),
            class.methods.len()
        );
    }
    eprintln!("\n{} classes, {} methods", report.classes.len(), report.method_count());
}

fn main() {
    let cli = Cli::parse();

    let directive = if cli.verbose { "mockgen=debug" } else { "mockgen=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(directive.parse().unwrap()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = resolve_config(&cli);

    if cli.dry_run {
        let source = read_header(&cli.input).unwrap_or_else(|e| {
            eprintln!("Error: {e}");
            std::process::exit(1);
        });
        let classes = build_mocked_classes(&source);
        print!("{}", emit::render_mocks(&classes, &config));
        return;
    }

    let report = match mockgen_core::generate_file(&cli.input, &cli.output, &config) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    if cli.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
    } else {
        println!("Mock classes generated successfully in {}", cli.output.display());
        print_summary(&report, &config);
    }
}
