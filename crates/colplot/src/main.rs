// File: crates/colplot/src/main.rs
// Summary: Entry point: parse options, set up logging, resolve inputs and draw the charts.
// Fatal conditions print one message on stdout and exit with status 1.

mod cli;
mod inputs;
mod plot;

use std::io;
use std::process;

use anyhow::{anyhow, Result};
use clap::error::ErrorKind;
use clap::Parser;
use colplot_core::{ColorPalette, Mode, PlotComposer};
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::inputs::resolve_inputs;
use crate::plot::Plotter;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            println!("{e}");
            process::exit(1);
        }
    };

    init_tracing(cli.verbose);

    if let Err(e) = run(&cli) {
        println!("Error: {e:#}");
        process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn run(cli: &Cli) -> Result<()> {
    let columns = cli.columns().map_err(|e| anyhow!(e))?;
    let files = resolve_inputs(&cli.files, cli.root.as_deref())?;

    let palette = ColorPalette::with_capacity(usize::from(cli.max_series));
    let plotter = Plotter {
        parse: cli.parse_options(),
        composer: PlotComposer::new(columns, &palette, cli.style()),
        overrides: cli.overrides(),
    };

    match cli.mode() {
        Mode::Combined => plotter.combined(&files),
        Mode::PerFile => plotter.per_file(&files),
    }
}
