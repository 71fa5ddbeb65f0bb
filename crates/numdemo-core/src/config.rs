use serde::Deserialize;
use std::path::Path;

use crate::error::DemoError;

/// Values the demo routine starts from.
pub const DEFAULT_NUMBERS: [i32; 6] = [5, 2, 8, 1, 9, 3];

/// Value assigned to the unused local.
pub const DEFAULT_UNUSED_VALUE: i32 = 42;

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct SampleConfig {
    /// Initial contents of the integer sequence, in order.
    pub numbers: Vec<i32>,
    /// Assigned once and never read.
    pub unused_value: i32,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            numbers: DEFAULT_NUMBERS.to_vec(),
            unused_value: DEFAULT_UNUSED_VALUE,
        }
    }
}

impl SampleConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, DemoError> {
        toml::from_str(contents).map_err(|e| DemoError::Config(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self, DemoError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| DemoError::Config(format!("failed to read {}: {e}", path.display())))?;
        Self::from_toml_str(&contents)
    }
}
