//! Rendering of the routine's two output lines.

use std::fmt;
use std::io::Write;

use crate::error::DemoError;

/// Result of one run: the pre-sort sum and the sorted values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub sum: i32,
    pub sorted: Vec<i32>,
}

impl Report {
    /// Write both lines to `out` and flush.
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<(), DemoError> {
        write!(out, "{self}")?;
        out.flush()?;
        Ok(())
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Sum: {}", self.sum)?;
        write!(f, "Sorted numbers: ")?;
        // Each element is followed by a space, including the last one.
        for num in &self.sorted {
            write!(f, "{num} ")?;
        }
        writeln!(f)
    }
}
