//! Output formatter
//!
//! Ensures consistent status lines across all commands. Success and listing
//! output goes to stdout; errors go to stderr. Color is handled by console's
//! own TTY detection, so piped output stays plain.

use console::style;

/// Formatter for CLI output
#[derive(Debug, Clone, Copy, Default)]
pub struct Formatter;

impl Formatter {
    /// Create a new formatter
    pub fn new() -> Self {
        Self
    }

    /// Output a success message
    pub fn success(&self, message: &str) {
        println!("{} {message}", style("✓").green());
    }

    /// Output an error message
    pub fn error(&self, message: &str) {
        eprintln!("{} {message}", style("✗").red().for_stderr());
    }

    /// Print a line of text
    pub fn println(&self, message: &str) {
        println!("{message}");
    }
}
