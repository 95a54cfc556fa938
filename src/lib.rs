//! dlc2csv: DeepLabCut output conversion library
//!
//! Finds the HDF5 tables DeepLabCut writes its pose estimates to
//! and converts them into plain CSV files.

pub mod cli;
pub mod pipeline;
pub mod report;
pub mod utils;
