//! Line-oriented terminal I/O shared by both games.

use std::io::{self, BufRead, Write};

/// Prompt/write wrapper over any reader and writer.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    /// Write a message surrounded by blank lines.
    pub fn write(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{text}")?;
        self.output.flush()
    }

    /// Ask a question and read one line of input.
    /// Returns `None` once the input is closed.
    pub fn prompt(&mut self, question: &str) -> io::Result<Option<String>> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Consume the console and return the writer.
    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

/// Parse a 1-based choice in `1..=max` into a 0-based index.
pub fn parse_choice(input: &str, max: usize) -> Option<usize> {
    match input.trim().parse::<usize>() {
        Ok(n) if (1..=max).contains(&n) => Some(n - 1),
        _ => None,
    }
}
