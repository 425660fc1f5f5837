use core::fmt::Display;

use anyhow::Error;
use thiserror::Error;

/// A definition/target pairing whose invariants are inconsistent.
///
/// The catalog loader and caller validate inputs before they reach the core, so a precondition
/// violation is a programmer error: fatal, surfaced immediately, never retried.
#[derive(Error, Debug)]
#[error("precondition violated: {message}")]
pub struct PreconditionError {
    message: String,
}

impl PreconditionError {
    /// Constructs a new precondition violation.
    pub fn new<M>(message: M) -> Self
    where
        M: Display,
    {
        Self {
            message: message.to_string(),
        }
    }
}

/// An out-of-range index into a fixed-size collection.
#[derive(Error, Debug)]
#[error("{target} index {index} out of range")]
pub struct RangeError {
    target: String,
    index: usize,
}

impl RangeError {
    /// Constructs a new range violation.
    pub fn new<M>(target: M, index: usize) -> Self
    where
        M: Display,
    {
        Self {
            target: target.to_string(),
            index,
        }
    }
}

/// Helper for an [`struct@Error`] wrapping a [`PreconditionError`].
pub fn precondition_error<M>(message: M) -> Error
where
    M: Display,
{
    PreconditionError::new(message).into()
}

/// Helper for an [`struct@Error`] wrapping a [`RangeError`].
pub fn range_error<M>(target: M, index: usize) -> Error
where
    M: Display,
{
    RangeError::new(target, index).into()
}

#[cfg(test)]
mod error_test {
    use crate::{
        precondition_error,
        range_error,
    };

    #[test]
    fn formats_precondition_message() {
        let error = precondition_error("species 10000 missing from the registry");
        assert_eq!(
            error.to_string(),
            "precondition violated: species 10000 missing from the registry"
        );
    }

    #[test]
    fn formats_range_message() {
        let error = range_error("ability slot", 3);
        assert_eq!(error.to_string(), "ability slot index 3 out of range");
    }
}
