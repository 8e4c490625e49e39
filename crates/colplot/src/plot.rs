// File: crates/colplot/src/plot.rs
// Summary: Combined and per-file chart pipelines (parse -> labels -> compose -> render).

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use colplot_core::{parse_file, ChartSpec, Dataset, LabelOverrides, ParseOptions, PlotComposer};
use rayon::prelude::*;
use tracing::{error, warn};

/// Everything a run needs besides the file list. Shared read-only by the
/// per-file workers.
pub(crate) struct Plotter<'a> {
    pub(crate) parse: ParseOptions,
    pub(crate) composer: PlotComposer<'a>,
    pub(crate) overrides: LabelOverrides,
}

impl Plotter<'_> {
    /// Every file on one chart. Any parse error aborts the whole run, since the
    /// palette indices of later files depend on the series of earlier ones.
    pub(crate) fn combined(&self, files: &[PathBuf]) -> Result<()> {
        let datasets = files
            .iter()
            .map(|f| self.load(f))
            .collect::<Result<Vec<_>>>()?;

        let chart = self
            .composer
            .combined(&datasets, &self.overrides)
            .context("no file to process")?;
        self.draw(&chart)
    }

    /// One chart per file, built in parallel. A failing file does not stop the
    /// others; every failure is reported once all of them are done.
    pub(crate) fn per_file(&self, files: &[PathBuf]) -> Result<()> {
        if self.overrides.output.is_some() && files.len() > 1 {
            warn!(files = files.len(), "an explicit output path is shared by every chart; each one overwrites it");
        }

        let failures: Vec<(&PathBuf, anyhow::Error)> = files
            .par_iter()
            .filter_map(|file| self.plot_file(file).err().map(|e| (file, e)))
            .collect();

        for (file, e) in &failures {
            error!(file = %file.display(), "chart failed");
            println!("{}: {e:#}", file.display());
        }
        if !failures.is_empty() {
            bail!("{} of {} files could not be plotted", failures.len(), files.len());
        }
        Ok(())
    }

    fn plot_file(&self, file: &Path) -> Result<()> {
        let dataset = self.load(file)?;
        let chart = self.composer.per_file(&dataset, &self.overrides);
        self.draw(&chart)
    }

    fn load(&self, file: &Path) -> Result<Dataset> {
        let dataset = parse_file(file, &self.parse, self.composer.columns())?;
        if self.composer.style().print {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            dataset.print_data(&mut out)?;
            out.flush()?;
        }
        Ok(dataset)
    }

    fn draw(&self, chart: &ChartSpec) -> Result<()> {
        if chart.style.print {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            chart.print_data(&mut out)?;
        }
        chart
            .save()
            .with_context(|| format!("cannot draw {}", chart.output.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use colplot_core::{ColorPalette, ColumnSelection, Style};

    fn scratch(name: &str) -> PathBuf {
        let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("target/test_out").join(name);
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    /// A well-formed file and one whose third line is too short.
    fn fixtures(dir: &Path) -> Vec<PathBuf> {
        let good = dir.join("good.res");
        let bad = dir.join("bad.res");
        std::fs::write(&good, "#t v\n0 1\n1 2\n2 4\n").unwrap();
        std::fs::write(&bad, "#t v\n0 1\n1\n").unwrap();
        vec![good, bad]
    }

    fn plotter(palette: &ColorPalette, output: PathBuf) -> Plotter<'_> {
        Plotter {
            parse: ParseOptions::default(),
            composer: PlotComposer::new(ColumnSelection::default(), palette, Style::default()),
            overrides: LabelOverrides { output: Some(output), ..LabelOverrides::default() },
        }
    }

    #[test]
    fn per_file_draws_good_files_and_reports_bad_ones() {
        let dir = scratch("plot_per_file");
        let files = fixtures(&dir);
        let out = dir.join("chart.png");
        let palette = ColorPalette::new();

        let err = plotter(&palette, out.clone()).per_file(&files).unwrap_err();
        assert!(err.to_string().contains("1 of 2 files"), "{err}");
        assert!(out.exists(), "the good file's chart should still be written");
    }

    #[test]
    fn per_file_succeeds_when_every_file_parses() {
        let dir = scratch("plot_per_file_ok");
        let files = fixtures(&dir);
        let out = dir.join("good.png");
        let palette = ColorPalette::new();

        plotter(&palette, out.clone()).per_file(&files[..1]).unwrap();
        assert!(out.exists());
    }

    #[test]
    fn combined_aborts_on_any_parse_error_without_a_chart() {
        let dir = scratch("plot_combined");
        let files = fixtures(&dir);
        let out = dir.join("combined.png");
        let palette = ColorPalette::new();

        let err = plotter(&palette, out.clone()).combined(&files).unwrap_err();
        assert!(err.to_string().contains("bad.res"), "{err}");
        assert!(!out.exists());
    }
}
