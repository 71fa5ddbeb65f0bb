//! The demo routine: sum, sort, print.
//!
//! Runs top to bottom once. The unused local and the constant-false branch
//! are part of the sample and stay in place.

use std::io::Write;

use crate::config::SampleConfig;
use crate::error::DemoError;
use crate::report::Report;
use crate::sequence::IntegerSequence;

/// Run the routine over `sample`, writing both lines to `out`.
pub fn run<W: Write>(sample: &SampleConfig, out: &mut W) -> Result<Report, DemoError> {
    let mut numbers = IntegerSequence::from_slice(&sample.numbers);

    let sum = numbers.sum()?;

    #[allow(unused_variables)]
    let unused_var = sample.unused_value;
    if false {
        writeln!(out, "This will never execute")?;
    }

    numbers.sort();

    let report = Report {
        sum,
        sorted: numbers.as_slice().to_vec(),
    };
    report.write_to(out)?;
    Ok(report)
}

/// Run the routine over the built-in sample.
pub fn run_default<W: Write>(out: &mut W) -> Result<Report, DemoError> {
    run(&SampleConfig::default(), out)
}
