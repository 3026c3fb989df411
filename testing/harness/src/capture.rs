//! Capture-and-compare of assertion failure messages.
//!
//! A failed assertion panics with its message. The functions here run an operation under
//! [`std::panic::catch_unwind`], pull the message out of the panic payload and compare it
//! with an expected text. Both a missing failure and a different message are errors of the
//! harness itself, distinct from the assertion failure being inspected.

use plate_assert::AssertionError;
use std::{
    any::Any,
    panic::{self, AssertUnwindSafe},
};
use tracing::{debug, trace};

/// Errors raised by the harness.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HarnessError {
    /// The operation completed without failing.
    #[error("expected a failure but none occurred")]
    NoFailure,
    /// The operation failed with another message.
    #[error("failure message mismatch\nexpected:\n{expected}\nactual:\n{actual}")]
    MessageMismatch {
        /// The expected message.
        expected: String,
        /// The trimmed message of the captured failure.
        actual: String,
    },
    /// An operation expected to pass failed with the given message.
    #[error("unexpected failure:\n{0}")]
    UnexpectedFailure(String),
}

/// The failure raised by an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedFailure {
    message: String,
}

impl CapturedFailure {
    fn from_payload(payload: &(dyn Any + Send)) -> Self {
        let message = if let Some(message) = payload.downcast_ref::<String>() {
            message.as_str()
        } else if let Some(message) = payload.downcast_ref::<&'static str>() {
            message
        } else if let Some(error) = payload.downcast_ref::<AssertionError>() {
            error.message()
        } else {
            ""
        };
        Self { message: message.trim().to_string() }
    }

    /// The failure message without surrounding whitespace, empty if the failure carried none.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Consumes the failure, returning its message.
    pub fn into_message(self) -> String {
        self.message
    }
}

/// Runs `operation` once and returns the failure it raised.
///
/// Returns [`HarnessError::NoFailure`] if it completed normally.
pub fn capture_failure<F: FnOnce()>(operation: F) -> Result<CapturedFailure, HarnessError> {
    match panic::catch_unwind(AssertUnwindSafe(operation)) {
        Ok(()) => {
            debug!(target: "plate::harness", "operation completed without a failure");
            Err(HarnessError::NoFailure)
        }
        Err(payload) => {
            let failure = CapturedFailure::from_payload(payload.as_ref());
            trace!(target: "plate::harness", message = failure.message(), "captured failure");
            Ok(failure)
        }
    }
}

/// Runs `operation` and checks that it fails with exactly `expected`.
pub fn expect_failure<F: FnOnce()>(expected: &str, operation: F) -> Result<(), HarnessError> {
    let actual = capture_failure(operation)?.into_message();
    if actual == expected {
        return Ok(())
    }
    Err(HarnessError::MessageMismatch { expected: expected.to_string(), actual })
}

/// Asserts that `operation` fails with exactly `expected`.
///
/// # Panics
///
/// With the [`HarnessError`] text if the operation does not fail or fails differently.
///
/// ```
/// use plate_assert::prelude::*;
/// use plate_harness::assert_error_contains;
///
/// assert_error_contains("expected: \"bye\"\nbut was : \"hi\"", || {
///     assert_that("hi").is_equal_to("bye");
/// });
/// ```
#[track_caller]
pub fn assert_error_contains<F: FnOnce()>(expected: &str, operation: F) {
    if let Err(err) = expect_failure(expected, operation) {
        panic!("{err}");
    }
}

/// An operation paired with the message it is expected to fail with.
pub struct ExpectedFailure<F> {
    operation: F,
    message: String,
}

impl<F: FnOnce()> ExpectedFailure<F> {
    /// Pairs `operation` with its expected failure `message`.
    pub fn new(message: impl Into<String>, operation: F) -> Self {
        Self { operation, message: message.into() }
    }

    /// The expected failure message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Runs the operation and compares its failure with the expected message.
    pub fn verify(self) -> Result<(), HarnessError> {
        expect_failure(&self.message, self.operation)
    }
}

impl<F> std::fmt::Debug for ExpectedFailure<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExpectedFailure").field("message", &self.message).finish_non_exhaustive()
    }
}
