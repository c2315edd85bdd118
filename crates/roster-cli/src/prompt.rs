//! Line-oriented prompting over any reader/writer pair.

use std::io::{self, BufRead, Write};

pub struct Prompt<I, O> {
    input: I,
    output: O,
}

impl<I: BufRead, O: Write> Prompt<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }

    /// Print `label` and read one line, trimmed.
    ///
    /// Returns `None` once the input is exhausted. Bytes that are not valid
    /// UTF-8 are replaced, so a garbled line reads as bad input.
    pub fn ask(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&line).trim().to_string()))
    }

    /// Wait for the user to press Enter. Returns `false` at end of input.
    pub fn pause(&mut self) -> io::Result<bool> {
        Ok(self.ask("\nPress Enter to continue...")?.is_some())
    }

    /// Write one line of output.
    pub fn say(&mut self, line: impl std::fmt::Display) -> io::Result<()> {
        writeln!(self.output, "{line}")
    }
}
