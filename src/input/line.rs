use std::io::{self, BufRead, Cursor, Stdout, StdinLock, Write};

use tracing::debug;

use super::{InputSource, Prompted};
use crate::error::FieldError;

/// Typing this at any prompt cancels the current operation.
pub const CANCEL: &str = "~";

/// Line-oriented input: one prompt, one answer line.
///
/// Bad entries are reported and asked again. End of input counts as a
/// cancel. With `max_attempts` set, the read yields `Invalid` after that
/// many bad entries in a row.
pub struct LineInput<R, W> {
    reader: R,
    writer: W,
    max_attempts: Option<usize>,
}

/// In-memory input with a captured transcript, for tests and scripted runs.
pub type ScriptedInput = LineInput<Cursor<String>, Vec<u8>>;

impl LineInput<StdinLock<'static>, Stdout> {
    /// Reads stdin and writes stdout.
    pub fn console() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl ScriptedInput {
    /// Answers prompts with `lines`, in order.
    pub fn scripted(lines: &[&str]) -> Self {
        let script: String = lines.iter().map(|line| format!("{}\n", line)).collect();
        Self::new(Cursor::new(script), Vec::new())
    }

    /// Everything written to the user so far.
    pub fn transcript(&self) -> String {
        String::from_utf8_lossy(&self.writer).into_owned()
    }
}

impl<R: BufRead, W: Write> LineInput<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            max_attempts: None,
        }
    }

    pub fn with_max_attempts(mut self, max_attempts: Option<usize>) -> Self {
        self.max_attempts = max_attempts.filter(|&n| n > 0);
        self
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Prints the prompt and returns the next trimmed line, or `None` at end of input.
    fn next_line(&mut self, prompt: &str) -> Option<String> {
        writeln!(self.writer, "{}", prompt).ok();
        self.writer.flush().ok();
        let mut buf = String::new();
        match self.reader.read_line(&mut buf) {
            Ok(0) => None,
            Ok(_) => Some(buf.trim().to_string()),
            Err(e) => {
                debug!("Input read failed: {}", e);
                None
            }
        }
    }

    fn report(&mut self, error: &FieldError) {
        writeln!(self.writer, "{}. Please try again.", error).ok();
    }
}

fn with_cancel_hint(prompt: &str) -> String {
    format!("{}\n(Enter {} to cancel)", prompt, CANCEL)
}

impl<R: BufRead, W: Write> InputSource for LineInput<R, W> {
    fn read_checked(
        &mut self,
        prompt: &str,
        check: &mut dyn FnMut(&str) -> Result<(), FieldError>,
    ) -> Prompted<()> {
        let prompt = with_cancel_hint(prompt);
        let mut failures = 0;
        loop {
            let line = match self.next_line(&prompt) {
                Some(line) => line,
                None => return Prompted::Cancelled,
            };
            if line == CANCEL {
                return Prompted::Cancelled;
            }
            match check(&line) {
                Ok(()) => return Prompted::Value(()),
                Err(e) => {
                    self.report(&e);
                    failures += 1;
                    if self.max_attempts.map_or(false, |max| failures >= max) {
                        return Prompted::Invalid(e);
                    }
                }
            }
        }
    }

    fn read_line(&mut self, prompt: &str) -> Prompted<String> {
        match self.next_line(&with_cancel_hint(prompt)) {
            Some(line) if line == CANCEL => Prompted::Cancelled,
            Some(line) => Prompted::Value(line),
            None => Prompted::Cancelled,
        }
    }

    fn show(&mut self, text: &str) {
        writeln!(self.writer, "{}", text).ok();
        self.writer.flush().ok();
    }
}
