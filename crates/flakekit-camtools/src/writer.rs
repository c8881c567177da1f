//! Program output
//!
//! Streams a program to a sink one line at a time, in generation order. The
//! sink is flushed once when the writer is finished. There is no recovery
//! from a failed write: the first error is returned and the sink is left as is.

use crate::error::CamToolResult;
use flakekit_core::{Program, ProgramLine};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// File name used when no output path is configured.
pub const DEFAULT_OUTPUT_FILE: &str = "snowflake.gcode";

/// Line-oriented program writer
pub struct ProgramWriter<W: Write> {
    inner: BufWriter<W>,
    lines_written: usize,
}

impl<W: Write> ProgramWriter<W> {
    /// Wrap a sink
    pub fn new(inner: W) -> Self {
        Self {
            inner: BufWriter::new(inner),
            lines_written: 0,
        }
    }

    /// Write one line followed by `\n`
    pub fn write_line(&mut self, line: &ProgramLine) -> CamToolResult<()> {
        writeln!(self.inner, "{}", line)?;
        self.lines_written += 1;
        Ok(())
    }

    /// Write every line of `program`
    pub fn write_program(&mut self, program: &Program) -> CamToolResult<()> {
        for line in program.lines() {
            self.write_line(line)?;
        }
        Ok(())
    }

    /// Lines written so far
    pub fn lines_written(&self) -> usize {
        self.lines_written
    }

    /// Flush and hand back the sink
    pub fn finish(self) -> CamToolResult<W> {
        let inner = self.inner.into_inner().map_err(|e| e.into_error())?;
        Ok(inner)
    }
}

/// Write `program` to `path`, creating or truncating the file
///
/// Returns the number of lines written.
pub fn write_to_file(program: &Program, path: &Path) -> CamToolResult<usize> {
    let file = File::create(path)?;
    let mut writer = ProgramWriter::new(file);
    writer.write_program(program)?;
    let lines = writer.lines_written();
    writer.finish()?.sync_all()?;

    info!(path = %path.display(), lines, "Program written");
    Ok(lines)
}
