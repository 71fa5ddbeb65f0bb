//! The integer sequence the demo routine sums and sorts.

use crate::error::DemoError;

/// Ordered, mutable sequence of signed integers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntegerSequence {
    values: Vec<i32>,
}

impl IntegerSequence {
    pub fn new(values: Vec<i32>) -> Self {
        Self { values }
    }

    pub fn from_slice(values: &[i32]) -> Self {
        Self::new(values.to_vec())
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Sum every element once, in index order.
    ///
    /// Addition is checked: an overflowing accumulator is reported with the
    /// index and operands where it happened instead of wrapping.
    #[allow(clippy::needless_range_loop)]
    pub fn sum(&self) -> Result<i32, DemoError> {
        let mut sum: i32 = 0;
        for i in 0..self.values.len() {
            let value = self.values[i];
            sum = sum.checked_add(value).ok_or(DemoError::Overflow {
                index: i,
                partial: sum,
                value,
            })?;
        }
        Ok(sum)
    }

    /// Sort ascending in place.
    pub fn sort(&mut self) {
        self.values.sort_unstable();
    }
}

impl From<Vec<i32>> for IntegerSequence {
    fn from(values: Vec<i32>) -> Self {
        Self::new(values)
    }
}
