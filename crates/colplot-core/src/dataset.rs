// File: crates/colplot-core/src/dataset.rs
// Summary: Parsed file model: fixed-width numeric rows plus an optional header legend.
// Notes:
// - Rows are never reordered; file order is plot order.
// - `ncol` is the width of the first row. Later rows are at least that wide.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// One data line of an input file.
#[derive(Clone, Debug, PartialEq)]
pub struct Row {
    values: Box<[f64]>,
}

impl Row {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values: values.into_boxed_slice() }
    }

    pub fn values(&self) -> &[f64] { &self.values }

    pub fn get(&self, column: usize) -> Option<f64> { self.values.get(column).copied() }

    pub fn len(&self) -> usize { self.values.len() }

    pub fn is_empty(&self) -> bool { self.values.is_empty() }
}

/// Column names taken from a header line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Legend {
    names: Vec<String>,
}

impl Legend {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { names: names.into_iter().map(Into::into).collect() }
    }

    pub fn names(&self) -> &[String] { &self.names }

    pub fn get(&self, column: usize) -> Option<&str> {
        self.names.get(column).map(String::as_str)
    }

    pub fn len(&self) -> usize { self.names.len() }

    pub fn is_empty(&self) -> bool { self.names.is_empty() }
}

#[derive(Clone, Debug)]
pub struct Dataset {
    source: PathBuf,
    rows: Vec<Row>,
    ncol: usize,
    legend: Option<Legend>,
}

impl Dataset {
    pub fn new(source: impl Into<PathBuf>, legend: Option<Legend>, rows: Vec<Row>) -> Self {
        let ncol = rows.first().map(Row::len).unwrap_or(0);
        Self { source: source.into(), rows, ncol, legend }
    }

    /// Path of the file the rows were read from.
    pub fn source(&self) -> &Path { &self.source }

    pub fn rows(&self) -> &[Row] { &self.rows }

    /// Column count fixed by the first data row; 0 when there are no rows.
    pub fn ncol(&self) -> usize { self.ncol }

    pub fn legend(&self) -> Option<&Legend> { self.legend.as_ref() }

    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    /// Values of one column in row order. Rows too short for `column` are skipped.
    pub fn column(&self, column: usize) -> Vec<f64> {
        self.rows.iter().filter_map(|r| r.get(column)).collect()
    }

    /// Dump the parsed rows and the legend, each line prefixed with the source path.
    pub fn print_data<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let source = self.source.display();
        writeln!(out, "{source} data:")?;
        for row in &self.rows {
            let fields: Vec<String> = row.values().iter().map(f64::to_string).collect();
            writeln!(out, "\t{}", fields.join(" "))?;
        }
        let names = self.legend.as_ref().map(|l| l.names().join(" ")).unwrap_or_default();
        writeln!(out, "{source} legend: {names}")
    }

    /// (x, y) pairs drawn from two columns of the same rows.
    pub fn xy(&self, x: usize, y: usize) -> Vec<(f64, f64)> {
        self.rows
            .iter()
            .filter_map(|r| Some((r.get(x)?, r.get(y)?)))
            .collect()
    }
}
