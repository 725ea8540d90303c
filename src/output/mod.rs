//! Module writing generated lines into the `.in`/`.out` fixture pair.

use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::error::{Error, create_error};
use crate::generator::GeneratedLine;


/// Line counts of a finished fixture.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixtureSummary {
    /// Lines in the `.in` file, fresh and rotated
    pub input_lines: usize,
    /// Lines in the `.out` file, fresh only
    pub output_lines: usize,
}

impl fmt::Display for FixtureSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} input lines, {} expected output lines",
            self.input_lines, self.output_lines
        )
    }
}

/// Buffered writer pair for the input and the expected output of one fixture.
///
/// Both writers are released when this value is dropped, also when generation bails out early.
/// Only [`FixtureWriter::finish`] reports flush failures though, so a successful run must end with it.
pub(crate) struct FixtureWriter<W: Write> {
    input: BufWriter<W>,
    output: BufWriter<W>,
    summary: FixtureSummary,
}

impl FixtureWriter<File> {
    /// Creates (or truncates) `{dir}/{name}.in` and `{dir}/{name}.out`.
    pub(crate) fn create(dir: &Path, name: &str) -> Result<Self, Error> {
        let input = create_file(&dir.join(format!("{name}.in")))?;
        let output = create_file(&dir.join(format!("{name}.out")))?;
        Ok(Self::new(input, output))
    }
}

fn create_file(path: &Path) -> Result<File, Error> {
    let file = File::create(path).map_err(|e| create_error(path, e))?;
    debug!(path = %path.display(), "created fixture file");
    Ok(file)
}

impl<W: Write> FixtureWriter<W> {
    pub(crate) fn new(input: W, output: W) -> Self {
        Self {
            input: BufWriter::new(input),
            output: BufWriter::new(output),
            summary: FixtureSummary::default(),
        }
    }

    /// Appends the line to the input, and to the expected output if it is fresh.
    pub(crate) fn write_line(&mut self, line: &GeneratedLine) -> Result<(), Error> {
        if line.is_fresh() {
            writeln!(self.output, "{}", line.text)?;
            self.summary.output_lines += 1;
        }
        writeln!(self.input, "{}", line.text)?;
        self.summary.input_lines += 1;
        Ok(())
    }

    /// Flushes both files and hands back the underlying writers together with the line counts.
    pub(crate) fn finish(self) -> Result<(W, W, FixtureSummary), Error> {
        let input = self.input.into_inner().map_err(|e| e.into_error())?;
        let output = self.output.into_inner().map_err(|e| e.into_error())?;
        Ok((input, output, self.summary))
    }
}
