//! Conversion summary report generation

use std::path::{Path, PathBuf};
use std::time::Duration;

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

use crate::pipeline::{OutputFormat, WalkSummary};

/// Summary of one conversion run
#[derive(Debug, Clone)]
pub struct ConversionSummary {
    pub root: PathBuf,
    pub format: OutputFormat,
    pub counts: WalkSummary,
    pub elapsed: Duration,
}

impl ConversionSummary {
    pub fn new(root: &Path, format: OutputFormat, counts: WalkSummary, elapsed: Duration) -> Self {
        Self {
            root: root.to_path_buf(),
            format,
            counts,
            elapsed,
        }
    }

    /// Render the summary table, one string per output line
    pub fn render(&self) -> Vec<String> {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Outcome").add_attribute(Attribute::Bold),
            Cell::new("Files").add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![
            Cell::new(format!("Converted to {}", self.format)),
            Cell::new(self.counts.converted).fg(Color::Green),
        ]);

        table.add_row(vec![
            Cell::new("Skipped (already converted)"),
            Cell::new(self.counts.skipped).fg(if self.counts.skipped == 0 {
                Color::White
            } else {
                Color::Yellow
            }),
        ]);

        table.add_row(vec![
            Cell::new("Failed"),
            Cell::new(self.counts.failed).fg(if self.counts.failed == 0 {
                Color::White
            } else {
                Color::Red
            }),
        ]);

        table.add_row(vec![
            Cell::new("Total matched"),
            Cell::new(self.counts.total()).add_attribute(Attribute::Bold),
        ]);

        table.to_string().lines().map(str::to_string).collect()
    }

    /// Print the summary to stderr, keeping stdout reserved for converted file names
    pub fn display(&self) {
        eprintln!();
        eprintln!(
            "    {} {}",
            style("CONVERSION SUMMARY").white().bold().for_stderr(),
            style(self.root.display()).dim().for_stderr()
        );
        eprintln!("    {}", style("─".repeat(50)).dim().for_stderr());

        for line in self.render() {
            eprintln!("    {}", line);
        }

        eprintln!(
            "    {}",
            style(format!("Finished in {:.2?}", self.elapsed))
                .dim()
                .for_stderr()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_includes_counts() {
        let counts = WalkSummary {
            converted: 3,
            skipped: 1,
            failed: 2,
        };
        let summary =
            ConversionSummary::new(Path::new("data"), OutputFormat::Csv, counts, Duration::ZERO);
        let text = summary.render().join("\n");

        assert!(text.contains("Converted to csv"));
        assert!(text.contains("Failed"));
        assert!(text.contains('6'));
    }
}
