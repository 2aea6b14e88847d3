//!
//! The per-test console output.
//!

use colored::Colorize;

///
/// The per-test console output, shaped like the Mocha `spec` reporter.
///
#[derive(Debug, Clone, Default)]
pub struct Console {
    /// The suite nesting depth.
    depth: usize,
    /// The number of failed tests so far.
    failures: usize,
    /// Whether to print test durations.
    show_time_spent: bool,
    /// Whether to print nothing.
    quiet: bool,
}

impl Console {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(show_time_spent: bool, quiet: bool) -> Self {
        Self {
            depth: 0,
            failures: 0,
            show_time_spent,
            quiet,
        }
    }

    ///
    /// The number of failed tests so far.
    ///
    pub fn failures(&self) -> usize {
        self.failures
    }

    ///
    /// Prints a progress status line, e.g. `      Loaded 3 contracts`.
    ///
    pub fn status(&self, word: &str, message: &str) {
        let line = format!(
            "{} {message}",
            format!("{word:>12}").bright_green().bold()
        );
        self.print(line.as_str());
    }

    ///
    /// Enters a suite.
    ///
    pub fn suite(&mut self, title: &str) {
        self.depth += 1;
        let line = format!("{}{}", self.indent(), title);
        self.print(line.as_str());
    }

    ///
    /// Leaves the current suite. Top-level suites are followed by a blank line.
    ///
    pub fn suite_end(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        if self.depth == 1 {
            self.print("");
        }
    }

    ///
    /// Prints a skipped test.
    ///
    pub fn pending(&self, title: &str) {
        let line = format!("{}{}", self.indent(), format!("  - {title}").cyan());
        self.print(line.as_str());
    }

    ///
    /// Prints a passed test with the gas used by its body.
    ///
    pub fn pass(&self, title: &str, duration_ms: Option<u64>, gas_used: u64) {
        let line = self.format_pass(title, duration_ms, gas_used);
        self.print(line.as_str());
    }

    ///
    /// Prints a failed test with its failure number.
    ///
    pub fn fail(&mut self, title: &str) {
        self.failures += 1;
        let line = format!(
            "{}{}",
            self.indent(),
            format!("  {}) {title}", self.failures).red()
        );
        self.print("");
        self.print(line.as_str());
    }

    ///
    /// Formats a passed test line.
    ///
    /// Zero gas is not shown. The duration is shown only when enabled and known.
    ///
    pub fn format_pass(&self, title: &str, duration_ms: Option<u64>, gas_used: u64) -> String {
        let duration = duration_ms
            .filter(|_| self.show_time_spent)
            .map(|duration| format!("{duration}ms").yellow().to_string());
        let gas = (gas_used > 0).then(|| format!("{gas_used} gas").green().to_string());
        let consumption = match (duration, gas) {
            (Some(duration), Some(gas)) => format!(" ({duration}, {gas})"),
            (Some(value), None) | (None, Some(value)) => format!(" ({value})"),
            (None, None) => String::new(),
        };
        format!(
            "{}{} {}{consumption}",
            self.indent(),
            "  ✓".green(),
            title.bright_black()
        )
    }

    ///
    /// The current indentation, two spaces per nested suite.
    ///
    fn indent(&self) -> String {
        "  ".repeat(self.depth.saturating_sub(1))
    }

    ///
    /// Prints a line unless quiet.
    ///
    fn print(&self, line: &str) {
        if !self.quiet {
            println!("{line}");
        }
    }
}
