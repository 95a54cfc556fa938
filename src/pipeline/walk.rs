//! Recursive search-and-convert over a directory tree

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use super::{is_dlc_output, ConversionResult, Converter, Status};

/// Outcome counts for one walk
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WalkSummary {
    pub converted: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl WalkSummary {
    pub fn record(&mut self, status: Status) {
        match status {
            Status::Success => self.converted += 1,
            Status::Skipped => self.skipped += 1,
            Status::Failed => self.failed += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.converted + self.skipped + self.failed
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

/// Depth-first walk that converts every DeepLabCut output file it meets.
///
/// Converted files are announced on `out` by base name; skipped and failed ones go to
/// `err` as `***<message>: <base name>`. Each line is flushed as soon as it is written.
///
/// Symbolic links to directories are followed and cycles are not detected. Siblings are
/// visited in whatever order the platform lists them.
pub struct TreeWalker<'a, O: Write, E: Write> {
    converter: &'a Converter<'a>,
    out: O,
    err: E,
    summary: WalkSummary,
}

impl<'a, O: Write, E: Write> TreeWalker<'a, O, E> {
    pub fn new(converter: &'a Converter<'a>, out: O, err: E) -> Self {
        Self {
            converter,
            out,
            err,
            summary: WalkSummary::default(),
        }
    }

    /// Walk the tree under `root`, returning the counts of everything converted so far
    pub fn walk(mut self, root: &Path) -> Result<WalkSummary> {
        self.visit(root)?;
        Ok(self.summary)
    }

    fn visit(&mut self, dir: &Path) -> Result<()> {
        log::debug!("searching {}", dir.display());

        let entries = fs::read_dir(dir)
            .with_context(|| format!("Failed to list directory: {}", dir.display()))?;

        for entry in entries {
            let path = entry
                .with_context(|| format!("Failed to read entry in {}", dir.display()))?
                .path();

            if path.is_dir() {
                self.visit(&path)?;
            } else if is_dlc_output(&path) {
                let result = self.converter.convert(&path, &mut self.err)?;
                self.report(&path, &result)?;
            }
        }

        Ok(())
    }

    fn report(&mut self, source: &Path, result: &ConversionResult) -> Result<()> {
        self.summary.record(result.status());

        let name = source
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default();

        if result.is_success() {
            writeln!(self.out, "{name}")?;
            self.out.flush()?;
        } else {
            writeln!(self.err, "***{}: {name}", result.message().unwrap_or_default())?;
            self.err.flush()?;
        }
        Ok(())
    }
}

/// Convert every DeepLabCut output file under `root`, reporting on stdout and stderr
pub fn convert_recursive(root: &Path, converter: &Converter<'_>) -> Result<WalkSummary> {
    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    TreeWalker::new(converter, stdout.lock(), stderr.lock()).walk(root)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_counts() {
        let mut summary = WalkSummary::default();
        summary.record(Status::Success);
        summary.record(Status::Success);
        summary.record(Status::Failed);
        summary.record(Status::Skipped);

        assert_eq!(summary.converted, 2);
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.total(), 4);
        assert!(summary.has_failures());
    }
}
