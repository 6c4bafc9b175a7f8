//! Styled Status Lines
//!
//! Console glyphs for the inspection binary: pass/fail verdicts from
//! `check`, existence marks and section headings from `show` and `paths`.

use console::style;

/// Rule length under a section heading
const RULE_WIDTH: usize = 40;

#[derive(Default)]
pub struct Output;

impl Output {
    pub fn new() -> Self {
        Self
    }

    pub fn success(&self, message: &str) {
        println!("{} {}", style("✓").green(), message);
    }

    /// Written to stderr so a `check` verdict survives stdout redirection.
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", style("✗").red(), message);
    }

    pub fn warning(&self, message: &str) {
        println!("{} {}", style("⚠").yellow(), message);
    }

    pub fn section(&self, message: &str) {
        println!("\n{}", style(message).bold());
        println!("{}", "─".repeat(RULE_WIDTH));
    }
}
