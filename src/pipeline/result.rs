//! Outcome records for a single conversion attempt

use std::fmt;
use std::path::{Path, PathBuf};

/// Terminal state of one conversion attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Success,
    Skipped,
    Failed,
}

impl Status {
    /// Short label used in summaries
    pub fn label(self) -> &'static str {
        match self {
            Status::Success => "converted",
            Status::Skipped => "skipped",
            Status::Failed => "failed",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of converting one source file.
///
/// Only constructed through [`ConversionResult::success`], [`ConversionResult::skipped`]
/// and [`ConversionResult::failed`], so the status always matches the constructor used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionResult {
    destination: PathBuf,
    status: Status,
    message: Option<String>,
}

impl ConversionResult {
    pub fn success(destination: impl Into<PathBuf>) -> Self {
        Self {
            destination: destination.into(),
            status: Status::Success,
            message: None,
        }
    }

    pub fn skipped(destination: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self {
            destination: destination.into(),
            status: Status::Skipped,
            message: Some(message.into()),
        }
    }

    pub fn failed(destination: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self {
            destination: destination.into(),
            status: Status::Failed,
            message: Some(message.into()),
        }
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }

    pub fn is_skipped(&self) -> bool {
        self.status == Status::Skipped
    }

    pub fn is_failed(&self) -> bool {
        self.status == Status::Failed
    }
}
