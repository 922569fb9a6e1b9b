//! Interactive value source.
//!
//! [`PromptSource`] asks for each variable on a writer and reads the answer as a
//! line from a reader. With [`PromptSource::stdio`] that is the console; tests
//! drive it with in-memory buffers.

use std::io::{self, BufRead, Write};

use crate::Real;
use crate::error::{ExprError, Result};
use crate::source::ValueSource;

/// Prompts for variable values, one line per variable.
pub struct PromptSource<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> PromptSource<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl PromptSource<io::StdinLock<'static>, io::Stdout> {
    /// Prompt on stdout and read answers from stdin.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

fn io_error(err: io::Error) -> ExprError {
    err.to_string().into()
}

impl<R: BufRead, W: Write> ValueSource for PromptSource<R, W> {
    fn resolve(&mut self, name: &str) -> Result<Real> {
        write!(self.writer, "Enter the value for variable {}: ", name).map_err(io_error)?;
        self.writer.flush().map_err(io_error)?;

        let mut line = String::new();
        let read = self.reader.read_line(&mut line).map_err(io_error)?;
        if read == 0 {
            return Err(format!("end of input while reading variable '{}'", name).into());
        }
        Ok(line.trim().parse::<Real>()?)
    }
}
