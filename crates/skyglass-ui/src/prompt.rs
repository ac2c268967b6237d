//! Asking the user for a place name when the location can't be worked out.

use std::io::{self, BufRead, Stdout, StdinLock, Write};

/// Source of typed place names.
pub trait LocationPrompt {
    /// Show `message` and wait for one answer. `None` means the user gave up.
    fn ask(&mut self, message: &str) -> Option<String>;
}

/// Line-based prompt over any reader/writer pair; end of input cancels.
pub struct TerminalPrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalPrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl TerminalPrompt<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> LocationPrompt for TerminalPrompt<R, W> {
    fn ask(&mut self, message: &str) -> Option<String> {
        if let Err(e) = write!(self.output, "{}\n> ", message).and_then(|_| self.output.flush()) {
            tracing::warn!("Failed to write prompt: {}", e);
            return None;
        }

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
            Err(e) => {
                tracing::warn!("Failed to read location input: {}", e);
                None
            }
        }
    }
}
