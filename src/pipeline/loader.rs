//! Loading DeepLabCut tables into polars

use std::ffi::OsString;
use std::io::Cursor;
use std::path::Path;
use std::process::Command;

use anyhow::{Context, Result};
use polars::prelude::*;

/// Source of in-memory tables for conversion
pub trait TableLoader {
    /// Read the whole table stored at `path`
    fn load(&self, path: &Path) -> Result<DataFrame>;
}

/// Interpreter used when none is configured
#[cfg(not(windows))]
pub const DEFAULT_PYTHON: &str = "python3";
#[cfg(windows)]
pub const DEFAULT_PYTHON: &str = "python";

/// Joins the levels of a multi-level column label into one header name
pub const COLUMN_LEVEL_SEPARATOR: &str = "_";

// Reads the HDF5 table with pandas and streams it to stdout as CSV.
// Column levels are joined with COLUMN_LEVEL_SEPARATOR and the row index is dropped.
const READ_HDF_SCRIPT: &str = r#"
import sys
import pandas as pd
tab = pd.read_hdf(sys.argv[1])
tab.columns = ["_".join(map(str, c)) if isinstance(c, tuple) else str(c) for c in tab.columns]
tab.to_csv(sys.stdout, header=True, index=False)
"#;

/// Loads `.h5` tables by handing them to pandas in an external Python interpreter.
///
/// DeepLabCut environments always ship pandas with PyTables, so the interpreter that
/// produced the files can read them back. The table arrives as CSV on the child's stdout
/// and is parsed with polars.
///
/// Multi-level column labels (scorer, bodyparts, coords) are flattened into a single
/// header row, e.g. `DLC_resnet50_snout_x`. This differs from pandas' own `to_csv`, which
/// writes one header row per level as DeepLabCut's CSV export does, so readers expecting
/// `read_csv(header=[0, 1, 2])` must split the names instead.
#[derive(Debug, Clone)]
pub struct PandasBridgeLoader {
    python: OsString,
}

impl PandasBridgeLoader {
    pub fn new(python: impl Into<OsString>) -> Self {
        Self {
            python: python.into(),
        }
    }
}

impl TableLoader for PandasBridgeLoader {
    fn load(&self, path: &Path) -> Result<DataFrame> {
        log::debug!("reading {} via {:?}", path.display(), self.python);

        let output = Command::new(&self.python)
            .arg("-c")
            .arg(READ_HDF_SCRIPT)
            .arg(path)
            .output()
            .with_context(|| format!("Failed to start Python interpreter {:?}", self.python))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let reason = stderr
                .lines()
                .rev()
                .find(|line| !line.trim().is_empty())
                .unwrap_or("no error output");
            anyhow::bail!(
                "pandas could not read {} ({}): {}",
                path.display(),
                output.status,
                reason.trim()
            );
        }

        parse_csv_table(output.stdout)
            .with_context(|| format!("Failed to parse table read from {}", path.display()))
    }
}

/// Parse CSV bytes with a header row into a DataFrame.
///
/// Every column is kept as text so values written by pandas pass through unchanged.
pub fn parse_csv_table(bytes: Vec<u8>) -> Result<DataFrame> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .into_reader_with_file_handle(Cursor::new(bytes))
        .finish()?;
    Ok(df)
}
