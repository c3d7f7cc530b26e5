//! Result line writer.

use std::io::{self, Write};

use crate::config::BatchConfig;

/// Writes `"<label> #<n>: <distance>"` lines to a byte stream.
///
/// Generic over `W: Write` so tests can use `Vec<u8>` and production
/// code can use locked stdout.
///
/// # Examples
///
/// ```
/// use prism_batch::ResultWriter;
///
/// let mut buf = Vec::new();
/// let mut writer = ResultWriter::new(&mut buf, "Universe", 2);
/// writer.write_result(1, 5f64.sqrt()).unwrap();
/// writer.write_result(2, 40.0).unwrap();
/// assert_eq!(writer.lines_written(), 2);
/// drop(writer);
///
/// assert_eq!(String::from_utf8(buf).unwrap(), "Universe #1: 2.24\nUniverse #2: 40.00\n");
/// ```
pub struct ResultWriter<W: Write> {
    writer: W,
    label: String,
    decimals: usize,
    lines_written: u64,
}

impl<W: Write> ResultWriter<W> {
    /// Create a writer with an explicit label and precision.
    pub fn new(writer: W, label: impl Into<String>, decimals: usize) -> Self {
        Self {
            writer,
            label: label.into(),
            decimals,
            lines_written: 0,
        }
    }

    /// Create a writer using the label and precision of `config`.
    pub fn from_config(writer: W, config: &BatchConfig) -> Self {
        Self::new(writer, config.label.clone(), config.decimals)
    }

    /// Write one result line for the 1-based case `index`.
    pub fn write_result(&mut self, index: usize, distance: f64) -> io::Result<()> {
        writeln!(
            self.writer,
            "{} #{index}: {distance:.prec$}",
            self.label,
            prec = self.decimals
        )?;
        self.lines_written += 1;
        Ok(())
    }

    /// Number of lines written so far.
    pub fn lines_written(&self) -> u64 {
        self.lines_written
    }

    /// Flush the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    /// Consume the writer, returning the underlying sink.
    pub fn into_inner(self) -> W {
        self.writer
    }
}
