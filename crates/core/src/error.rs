//! Fatal errors raised by the I/O and configuration layer.
//!
//! The parsing pipeline itself never fails: malformed input degrades to empty
//! bodies and skipped declarations instead.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MockgenError {
    #[error("cannot read input file {}: {source}", .path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write output file {}: {source}", .path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, MockgenError>;
