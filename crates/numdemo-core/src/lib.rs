//! numdemo-core: the numeric demo routine.
//!
//! Builds a fixed integer sequence, sums it, sorts it and prints both results.
//! Exposed as a library for integration testing.

pub mod config;
pub mod error;
pub mod report;
pub mod routine;
pub mod sequence;

pub use config::SampleConfig;
pub use error::DemoError;
pub use report::Report;
pub use routine::{run, run_default};
pub use sequence::IntegerSequence;
