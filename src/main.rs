//! dlc2csv: DeepLabCut output conversion CLI Tool
//!
//! Recursively searches a directory for DeepLabCut output HDF5 files
//! and converts each of them into a CSV file.

use std::process::ExitCode;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;

use dlc2csv::cli::Cli;
use dlc2csv::pipeline::{convert_recursive, Converter, PandasBridgeLoader};
use dlc2csv::report::ConversionSummary;
use dlc2csv::utils::{print_error, print_warning};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            print_error(&format!("{err:#}"));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let root = cli.root();
    let loader = PandasBridgeLoader::new(&cli.python);
    let converter = Converter::new(&cli.fileformat, &loader)?
        .with_destination_dir(cli.output_dir.clone())
        .with_overwrite(cli.overwrite);

    log::info!(
        "converting DeepLabCut outputs under {} to {}",
        root.display(),
        converter.format()
    );

    let started = Instant::now();
    let counts = convert_recursive(&root, &converter)?;

    if cli.summary {
        ConversionSummary::new(&root, converter.format(), counts, started.elapsed()).display();
    }

    if counts.total() == 0 {
        log::info!("no DeepLabCut output files found under {}", root.display());
    }

    if cli.strict && counts.has_failures() {
        print_warning(&format!("{} file(s) failed to convert", counts.failed));
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}
