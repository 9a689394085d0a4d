/// Console formatting module - Pure rendering concerns
///
/// This module handles the console summary printed after publishing:
/// - Table layout and borders
/// - Color terminal output
/// - Text truncation and padding
///
/// ## Output Flexibility
///
/// `TableWriter` writes to any `std::io::Write` destination, so the same
/// table can go to stdout (with colors) or into a buffer (plain).

use cuke_reports::DocumentOutcome;
use std::io::{self, Write};
use std::sync::OnceLock;
use term::color::Color;
use terminal_size::{Width, terminal_size};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Width of each numeric column, including one space of padding per side
const COUNT_WIDTH: usize = 10;
const COUNT_COLUMNS: [&str; 6] = ["Features", "Scenarios", "Steps", "Passed", "Failed", "Skipped"];

/// Writer for table output - configurable for color/plain text
pub struct TableWriter<W: Write> {
    writer: W,
    use_colors: bool,
}

impl<W: Write> TableWriter<W> {
    /// Create a new table writer
    pub fn new(writer: W, use_colors: bool) -> Self {
        Self { writer, use_colors }
    }

    /// Write formatted text, optionally with color
    fn write_colored(&mut self, text: &str, color: Color) -> io::Result<()> {
        if self.use_colors {
            if let Some(ref mut t) = term::stdout() {
                let _ = t.fg(color);
                let _ = t.write_all(text.as_bytes());
                let _ = t.reset();
                Ok(())
            } else {
                write!(self.writer, "{}", text)
            }
        } else {
            write!(self.writer, "{}", text)
        }
    }

    fn write_border(&mut self, left: char, mid: char, right: char, document_width: usize) -> io::Result<()> {
        let mut line = String::new();
        line.push(left);
        line.push_str(&"─".repeat(document_width));
        for _ in COUNT_COLUMNS {
            line.push(mid);
            line.push_str(&"─".repeat(COUNT_WIDTH));
        }
        line.push(right);
        writeln!(self.writer, "{}", line)
    }

    fn format_row(document: &str, cells: &[String], document_width: usize) -> String {
        let mut row = format!("│ {} ", truncate_with_padding(document, document_width - 2));
        for cell in cells {
            row.push_str(&format!("│{:>width$} ", cell, width = COUNT_WIDTH - 1));
        }
        row.push('│');
        row
    }

    /// Write the per-document summary table.
    ///
    /// Successful documents are green when they have no failed steps and red
    /// otherwise; documents that could not be published show their error.
    pub fn write_summary_table(&mut self, outcomes: &[DocumentOutcome], total_width: usize) -> io::Result<()> {
        let document_width = document_column_width(total_width);

        self.write_border('┌', '┬', '┐', document_width)?;
        let headers: Vec<String> = COUNT_COLUMNS.iter().map(|h| h.to_string()).collect();
        writeln!(self.writer, "{}", Self::format_row("Result file", &headers, document_width))?;
        self.write_border('├', '┼', '┤', document_width)?;

        for outcome in outcomes {
            match &outcome.result {
                Ok(report) => {
                    let t = &report.totals;
                    let cells: Vec<String> = [t.features, t.scenarios, t.steps, t.passed, t.failed, t.skipped]
                        .iter()
                        .map(|n| n.to_string())
                        .collect();
                    let color = if t.failed > 0 { term::color::BRIGHT_RED } else { term::color::BRIGHT_GREEN };
                    self.write_colored(&Self::format_row(&outcome.document, &cells, document_width), color)?;
                    writeln!(self.writer)?;
                }
                Err(e) => {
                    let cells = vec!["-".to_string(); COUNT_COLUMNS.len()];
                    self.write_colored(&Self::format_row(&outcome.document, &cells, document_width), term::color::BRIGHT_RED)?;
                    writeln!(self.writer)?;
                    let inner = document_width + COUNT_COLUMNS.len() * (COUNT_WIDTH + 1);
                    writeln!(self.writer, "│ {} │", truncate_with_padding(&e.to_string(), inner - 2))?;
                }
            }
        }

        self.write_border('└', '┴', '┘', document_width)
    }
}

/// Width of the "Result file" column for a given table width
fn document_column_width(total_width: usize) -> usize {
    // Borders: one before each column plus the closing one
    let fixed = COUNT_COLUMNS.len() * (COUNT_WIDTH + 1) + 2;
    total_width.saturating_sub(fixed).clamp(16, 60)
}

static CONSOLE_WIDTH: OnceLock<usize> = OnceLock::new();

/// Override the detected console width (for testing or narrow CI logs)
pub fn set_console_width(width: usize) {
    let _ = CONSOLE_WIDTH.set(width);
}

/// Get console width: override, detected terminal width, or 120
pub fn get_console_width() -> usize {
    *CONSOLE_WIDTH.get_or_init(|| if let Some((Width(w), _)) = terminal_size() { w as usize } else { 120 })
}

//
// Text Formatting Utilities
//

/// Count the display width of a string, accounting for wide Unicode characters
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Truncate and pad string to exact width
pub fn truncate_with_padding(s: &str, width: usize) -> String {
    let display_w = display_width(s);

    if display_w <= width {
        return format!("{}{}", s, " ".repeat(width - display_w));
    }

    // Reserve space for "..."
    let target_width = if width >= 3 { width - 3 } else { width };
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let c_width = UnicodeWidthChar::width(c).unwrap_or(1);
        if current_width + c_width > target_width {
            break;
        }
        result.push(c);
        current_width += c_width;
    }

    if width >= 3 {
        result.push_str("...");
        current_width += 3;
    }

    if current_width < width {
        result.push_str(&" ".repeat(width - current_width));
    }

    result
}

/// Print the summary table to stdout
pub fn print_summary_table(outcomes: &[DocumentOutcome]) {
    let mut writer = TableWriter::new(io::stdout(), true);
    let _ = writer.write_summary_table(outcomes, get_console_width());
}

#[cfg(test)]
#[path = "console_format_test.rs"]
mod console_format_test;
