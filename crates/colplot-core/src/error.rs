// File: crates/colplot-core/src/error.rs
// Summary: Error types for parsing input files and rendering charts.

use std::io;
use std::num::ParseFloatError;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::YColumns;

/// Everything that can go wrong while turning one input file into a `Dataset`.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A data line has fewer fields than the first data line of the file.
    #[error("{}: bad formatted line {line_no} (expected {expected} columns, found {found}): {line}", path.display())]
    ColumnCount {
        path: PathBuf,
        line_no: usize,
        line: String,
        expected: usize,
        found: usize,
    },

    /// Strict-width mode only: a data line has more fields than the first data line.
    #[error("{}: line {line_no} has {found} columns, expected exactly {expected}: {line}", path.display())]
    ExtraColumns {
        path: PathBuf,
        line_no: usize,
        line: String,
        expected: usize,
        found: usize,
    },

    #[error("not enough columns in file {}: found {ncol}, x column is {xcol}, y column is {ycol}", path.display())]
    ColumnRange {
        path: PathBuf,
        ncol: usize,
        xcol: usize,
        ycol: YColumns,
    },

    #[error("{}: line {line_no}, column {column}: invalid number `{value}`: {source}", path.display())]
    Number {
        path: PathBuf,
        line_no: usize,
        column: usize,
        value: String,
        #[source]
        source: ParseFloatError,
    },
}

impl ParseError {
    /// The file the error was raised for.
    pub fn path(&self) -> &std::path::Path {
        match self {
            ParseError::Io { path, .. }
            | ParseError::ColumnCount { path, .. }
            | ParseError::ExtraColumns { path, .. }
            | ParseError::ColumnRange { path, .. }
            | ParseError::Number { path, .. } => path,
        }
    }
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to create a {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },

    #[error("failed to read back rendered pixels")]
    ReadPixels,

    #[error("encode PNG failed: {0}")]
    Encode(#[from] image::ImageError),

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
