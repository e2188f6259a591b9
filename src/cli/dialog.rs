//! Confirmation dialog shown before a conversion is submitted.
use super::ui;
use anyhow::{Context, Result};
use console::Term;

pub const CONFIRM_TITLE: &str = "Confirm to convert the currency?";

/// How the user resolved the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Confirmed,
    Cancelled,
}

impl Decision {
    pub fn title(&self) -> &'static str {
        match self {
            Decision::Confirmed => "Success",
            Decision::Cancelled => "Cancelled",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Decision::Confirmed => "You have successfully converted your currency!",
            Decision::Cancelled => "Your conversion has been cancelled.",
        }
    }
}

pub trait Confirmation {
    fn confirm(&self, title: &str, summary: &str) -> Result<Decision>;
}

/// Asks on the terminal. Anything but an explicit yes cancels.
pub struct TerminalConfirmation {
    term: Term,
}

impl TerminalConfirmation {
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
        }
    }
}

impl Default for TerminalConfirmation {
    fn default() -> Self {
        Self::new()
    }
}

impl Confirmation for TerminalConfirmation {
    fn confirm(&self, title: &str, summary: &str) -> Result<Decision> {
        self.term
            .write_line(&ui::style_text(title, ui::StyleType::Label))
            .context("Failed to write confirmation prompt")?;
        self.term
            .write_str(&format!("{summary} [y/N] "))
            .context("Failed to write confirmation prompt")?;
        let answer = self
            .term
            .read_line()
            .context("Failed to read confirmation answer")?;
        Ok(parse_answer(&answer))
    }
}

/// Resolves every dialog the same way without prompting.
pub struct FixedConfirmation(pub Decision);

impl Confirmation for FixedConfirmation {
    fn confirm(&self, _title: &str, _summary: &str) -> Result<Decision> {
        Ok(self.0)
    }
}

fn parse_answer(answer: &str) -> Decision {
    match answer.trim().to_lowercase().as_str() {
        "y" | "yes" => Decision::Confirmed,
        _ => Decision::Cancelled,
    }
}
