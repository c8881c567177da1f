//! Ordered sequences of motion commands
//!
//! A [`Toolpath`] owns its commands outright. Merging another toolpath in
//! copies every command, so the two never alias and can be transformed
//! independently afterwards. Order is the print order and only changes
//! through [`Toolpath::reverse_order`].

use crate::motion::MotionCommand;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A continuous path made up of linear moves
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Toolpath {
    commands: Vec<MotionCommand>,
}

impl Toolpath {
    /// Creates a new empty toolpath.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty toolpath with room for `capacity` commands.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            commands: Vec::with_capacity(capacity),
        }
    }

    /// Adds a command to the end of the toolpath.
    pub fn append(&mut self, command: MotionCommand) {
        self.commands.push(command);
    }

    /// Appends copies of every command in `other`, in order.
    pub fn extend(&mut self, other: &Toolpath) {
        self.commands.extend_from_slice(&other.commands);
    }

    /// Rotates every command about the origin by `theta` radians.
    pub fn rotate(&mut self, theta: f64) {
        for command in &mut self.commands {
            command.rotate(theta);
        }
    }

    /// Returns a rotated copy, leaving `self` untouched.
    pub fn rotated(&self, theta: f64) -> Self {
        let mut copy = self.clone();
        copy.rotate(theta);
        copy
    }

    /// Negates the Y coordinate of every command.
    pub fn mirror_across_x_axis(&mut self) {
        for command in &mut self.commands {
            command.mirror_x();
        }
    }

    /// Reverses the traversal order; the commands themselves are unchanged.
    pub fn reverse_order(&mut self) {
        self.commands.reverse();
    }

    /// Adds `delta` to the Z of every command. Repeated calls accumulate.
    pub fn raise_z(&mut self, delta: f64) {
        for command in &mut self.commands {
            command.raise_z(delta);
        }
    }

    /// Number of commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Check if the toolpath has no commands.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// All commands in print order.
    pub fn commands(&self) -> &[MotionCommand] {
        &self.commands
    }

    /// Iterate over commands in print order.
    pub fn iter(&self) -> std::slice::Iter<'_, MotionCommand> {
        self.commands.iter()
    }

    /// First command, if any.
    pub fn first(&self) -> Option<&MotionCommand> {
        self.commands.first()
    }

    /// Last command, if any.
    pub fn last(&self) -> Option<&MotionCommand> {
        self.commands.last()
    }

    /// Gets the total XY length travelled along the toolpath.
    pub fn total_length(&self) -> f64 {
        self.commands
            .windows(2)
            .map(|pair| pair[0].distance_xy(&pair[1]))
            .sum()
    }
}

impl From<Vec<MotionCommand>> for Toolpath {
    fn from(commands: Vec<MotionCommand>) -> Self {
        Self { commands }
    }
}

impl FromIterator<MotionCommand> for Toolpath {
    fn from_iter<I: IntoIterator<Item = MotionCommand>>(iter: I) -> Self {
        Self {
            commands: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Toolpath {
    type Item = &'a MotionCommand;
    type IntoIter = std::slice::Iter<'a, MotionCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}

impl fmt::Display for Toolpath {
    /// One `G1` line per command, joined by newlines (no trailing newline)
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, command) in self.commands.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", command)?;
        }
        Ok(())
    }
}
