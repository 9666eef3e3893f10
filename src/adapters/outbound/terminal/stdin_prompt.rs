use std::io::{self, BufRead, Write};

use crate::ports::interaction::{ConfirmationPrompt, PromptError};

/// Asks on stdout and blocks on a line from stdin
#[derive(Debug, Default, Clone, Copy)]
pub struct StdinPrompt;

impl StdinPrompt {
    pub fn new() -> Self {
        Self
    }
}

impl ConfirmationPrompt for StdinPrompt {
    fn ask(&self, message: &str) -> Result<String, PromptError> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        read_answer(&mut stdin.lock(), &mut stdout.lock(), message)
    }
}

/// Write `message`, then read one line. EOF before any input is an error.
pub fn read_answer<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    message: &str,
) -> Result<String, PromptError> {
    write!(writer, "{} ", message)?;
    writer.flush()?;

    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(PromptError::Closed);
    }

    Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
}
