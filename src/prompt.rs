//! # Confirmation
//!
//! The force-push fallback in `push` and `auto` asks the user before
//! overwriting remote history. The question is asked through the [`Confirm`]
//! trait so the dispatcher never reads the terminal itself.
//!
//! - [`TerminalConfirm`] asks interactively. On a terminal it uses a
//!   `dialoguer` prompt; otherwise it reads one line from stdin.
//! - [`FixedAnswer`] always returns the same answer (`--yes`, tests).
//!
//! Both default to "no": only an answer starting with `y` or `Y` counts as yes.

use std::io::{self, BufRead, Write};
use std::sync::LazyLock;

use dialoguer::{theme::ColorfulTheme, Confirm as ConfirmPrompt};
use regex::Regex;

use crate::error::Result;

static AFFIRMATIVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[Yy]").expect("affirmative pattern is valid"));

/// Asks the user a yes/no question.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> Result<bool>;
}

/// Whether a free-form answer means "yes".
pub fn is_affirmative(answer: &str) -> bool {
    AFFIRMATIVE.is_match(answer.trim())
}

/// Interactive confirmation on the controlling terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalConfirm;

impl TerminalConfirm {
    fn read_line(prompt: &str, input: &mut impl BufRead) -> Result<bool> {
        print!("{} (y/N): ", prompt);
        io::stdout().flush()?;

        let mut answer = String::new();
        // EOF leaves the answer empty, which is a "no"
        input.read_line(&mut answer)?;
        Ok(is_affirmative(&answer))
    }
}

impl Confirm for TerminalConfirm {
    fn confirm(&self, prompt: &str) -> Result<bool> {
        if console::user_attended() && console::Term::stderr().is_term() {
            let answer = ConfirmPrompt::with_theme(&ColorfulTheme::default())
                .with_prompt(prompt)
                .default(false)
                .interact()?;
            return Ok(answer);
        }

        Self::read_line(prompt, &mut io::stdin().lock())
    }
}

/// Confirmation that never asks.
#[derive(Debug, Clone, Copy)]
pub struct FixedAnswer(pub bool);

impl Confirm for FixedAnswer {
    fn confirm(&self, prompt: &str) -> Result<bool> {
        log::info!("{} -> {}", prompt, if self.0 { "yes" } else { "no" });
        Ok(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_is_affirmative() {
        assert!(is_affirmative("y"));
        assert!(is_affirmative("Y\n"));
        assert!(is_affirmative("yes"));
        assert!(is_affirmative("  y  "));
    }

    #[test]
    fn test_is_affirmative_defaults_to_no() {
        assert!(!is_affirmative(""));
        assert!(!is_affirmative("n"));
        assert!(!is_affirmative("no"));
        assert!(!is_affirmative("sure"));
        assert!(!is_affirmative("\n"));
    }

    #[test]
    fn test_read_line_accepts_yes() {
        let mut input = Cursor::new("y\n");
        assert!(TerminalConfirm::read_line("Force push?", &mut input).unwrap());
    }

    #[test]
    fn test_read_line_eof_is_no() {
        let mut input = Cursor::new("");
        assert!(!TerminalConfirm::read_line("Force push?", &mut input).unwrap());
    }

    #[test]
    fn test_fixed_answer() {
        assert!(FixedAnswer(true).confirm("Force push?").unwrap());
        assert!(!FixedAnswer(false).confirm("Force push?").unwrap());
    }
}
