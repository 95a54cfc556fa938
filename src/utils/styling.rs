//! Terminal styling for messages that are not part of the per-file report

use console::style;

/// Print a configuration or fatal error to stderr
pub fn print_error(message: &str) {
    eprintln!(
        "{} {}",
        style("error:").red().bold().for_stderr(),
        message
    );
}

/// Print a warning to stderr
pub fn print_warning(message: &str) {
    eprintln!(
        "{} {}",
        style("warning:").yellow().bold().for_stderr(),
        message
    );
}
