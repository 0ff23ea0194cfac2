//! Colored terminal output for the eqharness commands

use colored::*;

const COLUMN_WIDTH: usize = 20;

/// Status lines, case rows and tables for the harness commands
pub struct CliConsole {
    verbose: bool,
}

impl CliConsole {
    pub const fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Progress note, shown with `--verbose` only
    pub fn info(&self, message: &str) {
        if self.verbose {
            println!("{} {}", "ℹ".blue().bold(), message);
        }
    }

    pub fn success(&self, message: &str) {
        println!("{} {}", "✓".green().bold(), message.green());
    }

    /// Violations and failed runs; stays on stdout next to the report
    pub fn warn(&self, message: &str) {
        println!("{} {}", "⚠".yellow().bold(), message.yellow());
    }

    /// Harness errors go to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red().bold(), message.red());
    }

    /// Section title underlined to its own width
    pub fn print_header(&self, title: &str) {
        println!();
        println!("{}", title.bold().underline());
        println!("{}", "=".repeat(title.len()).dimmed());
    }

    /// One executed case as `[n/total] ✓ line`, numbered from 1
    pub fn print_case_result(&self, index: usize, total: usize, passed: bool, line: &str) {
        let status = if passed { "✓".green() } else { "✗".red() };
        println!("[{}/{}] {} {}", index + 1, total, status, line);
    }

    pub fn print_table_header(&self, headers: &[&str]) {
        let line = join_cells(headers.iter().map(|h| h.bold().to_string()));
        println!("{line}");
        println!("{}", "-".repeat(line.len()).dimmed());
    }

    pub fn print_table_row(&self, cells: &[&str]) {
        println!("{}", join_cells(cells.iter().map(|c| c.to_string())));
    }
}

fn join_cells(cells: impl Iterator<Item = String>) -> String {
    cells
        .map(|cell| format!("{:width$}", cell, width = COLUMN_WIDTH))
        .collect::<Vec<_>>()
        .join(" | ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cells_are_padded_and_joined() {
        let line = join_cells(["Field", "Value"].iter().map(|c| c.to_string()));
        assert_eq!(line, format!("{:20} | {:20}", "Field", "Value"));
    }
}
