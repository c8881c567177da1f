//! Emitted program lines
//!
//! A [`Program`] is the flat, ordered output of a generator: motion lines
//! interleaved with standalone M-code markers.

use crate::error::{GcodeError, Result};
use crate::motion::MotionCommand;
use crate::toolpath::Toolpath;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Standalone machine markers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Marker {
    /// Start extruding (`M101`)
    StartExtrusion,
    /// Stop extruding (`M103`)
    StopExtrusion,
    /// Heater off, target temperature 0 (`M104 S0`)
    HeaterOff,
}

impl Marker {
    /// Literal G-code for this marker
    pub fn as_gcode(&self) -> &'static str {
        match self {
            Marker::StartExtrusion => "M101",
            Marker::StopExtrusion => "M103",
            Marker::HeaterOff => "M104 S0",
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_gcode())
    }
}

impl FromStr for Marker {
    type Err = GcodeError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.split_whitespace().collect::<Vec<_>>().join(" ");
        match normalized.as_str() {
            "M101" => Ok(Marker::StartExtrusion),
            "M103" => Ok(Marker::StopExtrusion),
            "M104 S0" => Ok(Marker::HeaterOff),
            "" => Err(GcodeError::EmptyLine),
            other => Err(GcodeError::UnknownCode {
                code: other.to_string(),
            }),
        }
    }
}

/// One line of an emitted program
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ProgramLine {
    /// Linear move
    Move(MotionCommand),
    /// Standalone marker
    Marker(Marker),
}

impl ProgramLine {
    /// Check if this line is the given marker
    pub fn is_marker(&self, marker: Marker) -> bool {
        matches!(self, ProgramLine::Marker(m) if *m == marker)
    }

    /// The move carried by this line, if it is one
    pub fn as_move(&self) -> Option<&MotionCommand> {
        match self {
            ProgramLine::Move(command) => Some(command),
            ProgramLine::Marker(_) => None,
        }
    }
}

impl fmt::Display for ProgramLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProgramLine::Move(command) => write!(f, "{}", command),
            ProgramLine::Marker(marker) => write!(f, "{}", marker),
        }
    }
}

impl FromStr for ProgramLine {
    type Err = GcodeError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.starts_with('G') {
            trimmed.parse().map(ProgramLine::Move)
        } else {
            trimmed.parse().map(ProgramLine::Marker)
        }
    }
}

/// Ordered output sequence
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Program {
    lines: Vec<ProgramLine>,
}

impl Program {
    /// Creates an empty program.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a single move.
    pub fn push_move(&mut self, command: MotionCommand) {
        self.lines.push(ProgramLine::Move(command));
    }

    /// Appends a marker line.
    pub fn push_marker(&mut self, marker: Marker) {
        self.lines.push(ProgramLine::Marker(marker));
    }

    /// Appends every command of `toolpath` as a move, in order.
    pub fn push_toolpath(&mut self, toolpath: &Toolpath) {
        self.lines
            .extend(toolpath.iter().copied().map(ProgramLine::Move));
    }

    /// All lines in emission order.
    pub fn lines(&self) -> &[ProgramLine] {
        &self.lines
    }

    /// Total line count.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the program has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of motion lines.
    pub fn move_count(&self) -> usize {
        self.lines
            .iter()
            .filter(|line| matches!(line, ProgramLine::Move(_)))
            .count()
    }

    /// Number of occurrences of `marker`.
    pub fn marker_count(&self, marker: Marker) -> usize {
        self.lines
            .iter()
            .filter(|line| line.is_marker(marker))
            .count()
    }

    /// Parse program text, one line per entry; blank lines are skipped
    pub fn parse(text: &str) -> Result<Self> {
        text.lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| line.parse::<ProgramLine>())
            .collect::<Result<Vec<_>>>()
            .map(|lines| Self { lines })
    }
}

impl fmt::Display for Program {
    /// Every line terminated by `\n`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
