//! Console status lines for the publishing run.
//!
//! Every line starts with the program name; outcome words are bold and
//! coloured when stdout is a terminal that supports it.

use std::io::Write;

const PREFIX: &str = "cuke-reports:";

/// Write `word` bold in `color`, or plain when the terminal has no colour support
fn emphasized(word: &str, color: term::color::Color) {
    if let Some(mut t) = term::stdout()
        && t.fg(color).is_ok()
    {
        let _ = t.attr(term::Attr::Bold);
        let written = write!(t, "{}", word).is_ok();
        let _ = t.reset();
        if written {
            return;
        }
    }
    print!("{}", word);
}

pub fn status(message: &str) {
    println!("{} {}", PREFIX, message);
}

/// One result line per document: "ok" in green or "failed" in red
pub fn document_status(document: &str, passed: bool, detail: &str) {
    print!("{} ", PREFIX);
    if passed {
        emphasized("ok", term::color::BRIGHT_GREEN);
    } else {
        emphasized("failed", term::color::BRIGHT_RED);
    }
    println!(" {} {}", document, detail);
}

/// Warning line for conditions that do not fail the run
pub fn warning(message: &str) {
    print!("{} ", PREFIX);
    emphasized("warning", term::color::BRIGHT_YELLOW);
    println!(": {}", message);
}

pub fn print_error(message: &str) {
    println!();
    emphasized("error", term::color::BRIGHT_RED);
    println!(": {}", message);
    println!();
}
