// File: crates/colplot-core/src/parse.rs
// Summary: Reads whitespace-delimited numeric columns into a `Dataset`.
// Behavior:
// - With `header` set, the first physical line is always the legend, never data or comment.
//   The comment prefix is stripped from its first token only.
// - Comment lines are skipped and do not count toward the column count. A blank line
//   is a data line with no fields, so it fails the column checks.
// - The first data line fixes `ncol`; later lines need at least `ncol` fields and keep
//   any extra trailing fields unless strict width is requested.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, warn};

use crate::config::{ColumnSelection, ParseOptions};
use crate::dataset::{Dataset, Legend, Row};
use crate::error::ParseError;

/// Open `path` and parse it line by line.
pub fn parse_file(
    path: impl AsRef<Path>,
    opts: &ParseOptions,
    columns: &ColumnSelection,
) -> Result<Dataset, ParseError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ParseError::Io { path: path.to_path_buf(), source })?;
    parse_reader(BufReader::new(file), path, opts, columns)
}

/// Parse from any buffered reader; `source` names the input in errors and in the dataset.
pub fn parse_reader<R: BufRead>(
    reader: R,
    source: &Path,
    opts: &ParseOptions,
    columns: &ColumnSelection,
) -> Result<Dataset, ParseError> {
    let mut legend = None;
    let mut ncol: Option<usize> = None;
    let mut rows = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|source_err| ParseError::Io {
            path: source.to_path_buf(),
            source: source_err,
        })?;
        let line_no = idx + 1;

        if idx == 0 && opts.header {
            legend = Some(parse_legend(&line, &opts.comment));
            continue;
        }

        let trimmed = line.trim();
        if opts.is_comment(trimmed) {
            continue;
        }

        let fields: Vec<&str> = trimmed.split_whitespace().collect();
        let found = fields.len();
        let expected = match ncol {
            Some(n) => n,
            None => {
                let n = found;
                if !columns.fits(n) {
                    return Err(ParseError::ColumnRange {
                        path: source.to_path_buf(),
                        ncol: n,
                        xcol: columns.x,
                        ycol: columns.y,
                    });
                }
                ncol = Some(n);
                n
            }
        };

        if found < expected {
            return Err(ParseError::ColumnCount {
                path: source.to_path_buf(),
                line_no,
                line,
                expected,
                found,
            });
        }
        if opts.strict_width && found > expected {
            return Err(ParseError::ExtraColumns {
                path: source.to_path_buf(),
                line_no,
                line,
                expected,
                found,
            });
        }

        let values = fields
            .iter()
            .enumerate()
            .map(|(column, field)| {
                field.parse::<f64>().map_err(|e| ParseError::Number {
                    path: source.to_path_buf(),
                    line_no,
                    column,
                    value: (*field).to_string(),
                    source: e,
                })
            })
            .collect::<Result<Vec<f64>, ParseError>>()?;
        rows.push(Row::new(values));
    }

    if let (Some(legend), Some(ncol)) = (&legend, ncol) {
        if legend.len() != ncol {
            warn!(
                file = %source.display(),
                legend = legend.len(),
                ncol,
                "legend length differs from column count"
            );
        }
    }
    debug!(file = %source.display(), rows = rows.len(), ncol = ncol.unwrap_or(0), "parsed");

    Ok(Dataset::new(source, legend, rows))
}

/// Split a header line into column names.
fn parse_legend(line: &str, comment: &str) -> Legend {
    let mut names: Vec<&str> = line.split_whitespace().collect();
    if let Some(first) = names.first_mut() {
        if !comment.is_empty() {
            let stripped = first.strip_prefix(comment).unwrap_or(*first);
            *first = stripped;
        }
    }
    // "# a b" leaves an empty first token; the names must line up with the columns.
    if names.first().is_some_and(|n| n.is_empty()) {
        names.remove(0);
    }
    Legend::new(names)
}
