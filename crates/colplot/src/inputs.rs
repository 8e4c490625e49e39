// File: crates/colplot/src/inputs.rs
// Summary: Resolves positional arguments into readable input files (root joining + glob expansion).
// Plain paths come first in argument order, then pattern matches in sorted order.

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use tracing::debug;

pub(crate) fn resolve_inputs(args: &[String], root: Option<&Path>) -> Result<Vec<PathBuf>> {
    let (patterns, plain): (Vec<&String>, Vec<&String>) = args.iter().partition(|a| a.contains('*'));

    let mut files = Vec::with_capacity(args.len());
    for arg in plain {
        let path = under_root(Path::new(arg), root);
        if !path.exists() {
            bail!("file does not exist: {}", path.display());
        }
        File::open(&path).with_context(|| format!("file is not readable: {}", path.display()))?;
        files.push(path);
    }

    for pattern in patterns {
        let pattern = under_root(Path::new(pattern), root);
        let pattern = pattern.to_string_lossy();
        let matches = glob::glob(&pattern).with_context(|| format!("bad file pattern: {pattern}"))?;
        let before = files.len();
        for entry in matches {
            let path = entry.with_context(|| format!("cannot read a match of {pattern}"))?;
            if path.is_file() {
                files.push(path);
            }
        }
        debug!(%pattern, matches = files.len() - before, "expanded pattern");
    }

    if files.is_empty() {
        bail!("no file to process");
    }
    Ok(files)
}

fn under_root(path: &Path, root: Option<&Path>) -> PathBuf {
    match root {
        Some(root) if path.is_relative() => root.join(path),
        _ => path.to_path_buf(),
    }
}
