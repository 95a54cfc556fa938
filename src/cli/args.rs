//! Command-line argument definitions using clap

use clap::Parser;
use std::path::PathBuf;

use crate::pipeline::{registered_formats, OutputFormat, DEFAULT_PYTHON};

/// dlc2csv - Search for DeepLabCut output HDF5 files and convert them
#[derive(Parser, Debug)]
#[command(name = "dlc2csv")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// The directory to recursively search for HDF5 files from.
    /// Defaults to the current directory.
    pub directory: Option<PathBuf>,

    /// The output file format. Currently only supports 'csv'
    #[arg(short = 'F', long, default_value = "csv", value_parser = validate_fileformat)]
    pub fileformat: String,

    /// The output directory to write the converted files to.
    /// Defaults to the same directory as the original file.
    #[arg(short = 'D', long = "output-dir")]
    pub output_dir: Option<PathBuf>,

    /// Overwrite the output file when it already exists
    #[arg(long, default_value = "false")]
    pub overwrite: bool,

    /// Python interpreter with pandas and PyTables, used to read the HDF5 files
    #[arg(long, env = "DLC2CSV_PYTHON", default_value = DEFAULT_PYTHON)]
    pub python: PathBuf,

    /// Exit with a non-zero status when any file failed to convert
    #[arg(long, default_value = "false")]
    pub strict: bool,

    /// Print a table of conversion counts to stderr when done
    #[arg(long, default_value = "false")]
    pub summary: bool,
}

impl Cli {
    /// Root of the search, the current directory unless one was given
    pub fn root(&self) -> PathBuf {
        self.directory.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}

/// Validator for the fileformat parameter
fn validate_fileformat(s: &str) -> Result<String, String> {
    s.parse::<OutputFormat>().map(|_| s.to_string()).map_err(|_| {
        format!(
            "file format not found: '{}'. Supported formats: {}",
            s,
            registered_formats().join(", ")
        )
    })
}
