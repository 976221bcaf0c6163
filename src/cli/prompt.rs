// src/cli/prompt.rs
use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};

/// Answers a delete confirmation
pub trait Confirm {
    fn confirm(&mut self, message: &str) -> Result<bool>;
}

/// Asks on stdout and reads the answer from stdin
#[derive(Debug, Default)]
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&mut self, message: &str) -> Result<bool> {
        let mut stdout = io::stdout();
        write!(stdout, "{message} [y/N] ").context("Failed to write prompt")?;
        stdout.flush().context("Failed to flush prompt")?;

        let mut answer = String::new();
        io::stdin()
            .lock()
            .read_line(&mut answer)
            .context("Failed to read confirmation")?;
        Ok(is_yes(&answer))
    }
}

/// Fixed answer for non-interactive runs
#[derive(Debug, Clone, Copy)]
pub struct Always(pub bool);

impl Confirm for Always {
    fn confirm(&mut self, _message: &str) -> Result<bool> {
        Ok(self.0)
    }
}

/// Only an explicit yes confirms; empty input means no
pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
