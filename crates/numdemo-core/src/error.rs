//! Error type for the demo routine.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DemoError {
    #[error("output error: {0}")]
    Io(#[from] io::Error),
    #[error("sum overflowed at index {index}: {partial} + {value}")]
    Overflow { index: usize, partial: i32, value: i32 },
    #[error("config error: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overflow_message_names_operands() {
        let err = DemoError::Overflow {
            index: 1,
            partial: i32::MAX,
            value: 1,
        };
        assert_eq!(
            err.to_string(),
            format!("sum overflowed at index 1: {} + 1", i32::MAX)
        );
    }

    #[test]
    fn io_error_converts() {
        let err: DemoError = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed").into();
        assert!(matches!(err, DemoError::Io(_)));
        assert_eq!(err.to_string(), "output error: pipe closed");
    }
}
