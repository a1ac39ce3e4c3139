//! Reading commands from the user
//!
//! Input is read a line at a time with a hard cap on line length. A line may
//! hold several whitespace-delimited tokens; they are handed out one per
//! prompt cycle.

use crate::error::{InputError, Result};
use crate::render::Renderer;
use std::collections::VecDeque;
use std::io::{BufRead, Read, Write};
use tracing::{debug, warn};

/// Text written before every read
pub const PROMPT: &str = "\n What would you like to do?\n >> ";

/// Reads one token per prompt cycle from a buffered source
#[derive(Debug)]
pub struct Prompter<R: BufRead> {
    input: R,
    max_input_len: usize,
    pending: VecDeque<String>,
}

impl<R: BufRead> Prompter<R> {
    pub fn new(input: R, max_input_len: usize) -> Self {
        Self {
            input,
            max_input_len,
            pending: VecDeque::new(),
        }
    }

    /// Print the prompt and return the next token
    ///
    /// Returns `Ok(None)` for a blank line. Fails with
    /// [`InputError::Exhausted`] once the input is closed and with
    /// [`InputError::TooLong`] when a line exceeds the cap.
    pub fn prompt<W: Write>(&mut self, renderer: &mut Renderer<W>) -> Result<Option<String>> {
        renderer.print(PROMPT)?;
        renderer.flush()?;

        if let Some(token) = self.pending.pop_front() {
            return Ok(Some(token));
        }

        let line = self.read_line()?;
        let mut tokens = line.split_whitespace().map(str::to_string);
        let first = tokens.next();
        self.pending.extend(tokens);

        if !self.pending.is_empty() {
            debug!("Queued {} extra tokens from input line", self.pending.len());
        }

        Ok(first)
    }

    /// Tokens read but not yet returned
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    fn read_line(&mut self) -> Result<String> {
        let limit = self.max_input_len;
        // Two bytes past the cap leave room for a `\r\n` terminator.
        let budget = (limit as u64).saturating_add(2);
        let mut buf = Vec::new();
        let read = (&mut self.input).take(budget).read_until(b'\n', &mut buf)?;

        if read == 0 {
            return Err(InputError::Exhausted.into());
        }

        let terminated = buf.last() == Some(&b'\n');
        if content_len(&buf) > limit {
            if !terminated {
                self.discard_rest_of_line()?;
            }
            warn!("Discarded input line longer than {} bytes", limit);
            return Err(InputError::TooLong { limit }.into());
        }

        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    fn discard_rest_of_line(&mut self) -> Result<()> {
        loop {
            let available = self.input.fill_buf()?;
            if available.is_empty() {
                return Ok(());
            }
            match available.iter().position(|&b| b == b'\n') {
                Some(pos) => {
                    self.input.consume(pos + 1);
                    return Ok(());
                }
                None => {
                    let len = available.len();
                    self.input.consume(len);
                }
            }
        }
    }
}

/// Length of a line without its `\n` or `\r\n` terminator
fn content_len(line: &[u8]) -> usize {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line).len()
}
