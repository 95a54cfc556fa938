//! Output formats and the strategies that write them

use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use polars::prelude::*;

use super::ConvertError;

/// How one output format names and writes converted files.
///
/// Implementations must be deterministic: the same source path always maps to the
/// same destination, and writing the same table twice produces the same bytes.
pub trait ConversionStrategy {
    /// Default destination for `source`, next to it in the same directory
    fn destination_path(&self, source: &Path) -> PathBuf;

    /// Serialize `table` into `writer`
    fn serialize(&self, table: &mut DataFrame, writer: &mut dyn Write) -> Result<()>;
}

/// Comma-separated text with a header row and no row-index column
#[derive(Debug, Default, Clone, Copy)]
pub struct CsvStrategy;

impl ConversionStrategy for CsvStrategy {
    fn destination_path(&self, source: &Path) -> PathBuf {
        source.with_extension("csv")
    }

    fn serialize(&self, table: &mut DataFrame, writer: &mut dyn Write) -> Result<()> {
        CsvWriter::new(writer)
            .include_header(true)
            .finish(table)
            .context("Failed to write CSV data")
    }
}

/// Registered output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    Csv,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 1] = [OutputFormat::Csv];

    /// Identifier used on the command line
    pub fn key(self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
        }
    }

    /// Build the strategy registered for this format
    pub fn strategy(self) -> Box<dyn ConversionStrategy> {
        match self {
            OutputFormat::Csv => Box::new(CsvStrategy),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for OutputFormat {
    type Err = ConvertError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        OutputFormat::ALL
            .into_iter()
            .find(|format| format.key() == s)
            .ok_or_else(|| ConvertError::UnknownFormat {
                format: s.to_string(),
                available: registered_formats().join(", "),
            })
    }
}

/// Identifiers of every registered output format
pub fn registered_formats() -> Vec<&'static str> {
    OutputFormat::ALL.iter().map(|f| f.key()).collect()
}
