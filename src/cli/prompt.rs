//! Line-oriented user input
//!
//! The menu only ever needs "show this question, give me the answer". That
//! request/response exchange is the [`Prompt`] trait; [`LinePrompt`] answers
//! it from any buffered reader and echoes questions and output to a writer.

use std::io::{self, BufRead, Write};

/// Asks the user for one line of text
pub trait Prompt {
    /// Show `query` and return the answer without its line ending
    ///
    /// Returns `Ok(None)` once input is exhausted.
    fn ask(&mut self, query: &str) -> io::Result<Option<String>>;
}

/// Prompt over a reader/writer pair (stdin/stdout in the binary)
pub struct LinePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    /// Create a prompt reading from `input` and writing to `output`
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the prompt and return its writer
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Prompt for LinePrompt<R, W> {
    fn ask(&mut self, query: &str) -> io::Result<Option<String>> {
        self.output.write_all(query.as_bytes())?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed = line.trim_end_matches(&['\n', '\r'][..]).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

impl<R, W: Write> Write for LinePrompt<R, W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.output.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.output.flush()
    }
}
