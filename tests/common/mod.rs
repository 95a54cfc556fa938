//! Shared test utilities and fixture generators

#![allow(dead_code)]

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use dlc2csv::pipeline::TableLoader;
use polars::prelude::*;

/// Test stand-in for the HDF5 reader: fixtures are Parquet files with `.h5` names
pub struct ParquetLoader;

impl TableLoader for ParquetLoader {
    fn load(&self, path: &Path) -> Result<DataFrame> {
        let file = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
        let df = ParquetReader::new(file).finish()?;
        Ok(df)
    }
}

/// A small pose table shaped like a DeepLabCut prediction (flattened column levels)
pub fn create_pose_dataframe() -> DataFrame {
    df! {
        "DLC_resnet50_snout_x" => [10.5f64, 11.0, 11.75, 12.0],
        "DLC_resnet50_snout_y" => [20.0f64, 20.5, 21.0, 21.25],
        "DLC_resnet50_snout_likelihood" => [0.99f64, 0.98, 0.5, 0.97],
        "DLC_resnet50_tail_x" => [Some(1.0f64), None, Some(3.0), Some(4.0)],
    }
    .unwrap()
}

/// Write `df` as a loadable fixture at `path`
pub fn write_table(path: &Path, df: &mut DataFrame) -> PathBuf {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    let file = File::create(path).unwrap();
    ParquetWriter::new(file).finish(df).unwrap();
    path.to_path_buf()
}

/// Write a file whose content cannot be loaded as a table
pub fn write_corrupt(path: &Path) -> PathBuf {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, b"this is not a table").unwrap();
    path.to_path_buf()
}

/// Read a converted CSV back into a DataFrame
pub fn read_csv(path: &Path) -> DataFrame {
    CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .unwrap()
        .finish()
        .unwrap()
}

/// Column names of a DataFrame as owned strings
pub fn column_names(df: &DataFrame) -> Vec<String> {
    df.get_column_names().iter().map(|s| s.to_string()).collect()
}

/// Lines starting with the `***` skip/failure marker
pub fn annotated_lines(text: &str) -> Vec<&str> {
    text.lines().filter(|l| l.starts_with("***")).collect()
}
