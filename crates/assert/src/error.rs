//! Assertion failures.

use std::fmt::Write;

/// Result alias for a single evaluated expectation.
pub type AssertionResult = Result<(), AssertionError>;

/// A violated expectation.
///
/// The message is the complete, human readable failure text; [`Display`](std::fmt::Display)
/// renders it verbatim so the panic payload of a failed assertion is exactly this text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct AssertionError {
    message: String,
}

impl AssertionError {
    /// Creates an error from an already formatted message.
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    /// The formatted failure message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Consumes the error, returning its message.
    pub fn into_message(self) -> String {
        self.message
    }

    /// Prefixes the message with `[description] `.
    pub fn described_as(self, description: &str) -> Self {
        Self { message: format!("[{description}] {}", self.message) }
    }

    /// Folds several failures into one, numbering each of them.
    ///
    /// A single failure is returned unchanged.
    pub fn multiple(mut failures: Vec<Self>) -> Self {
        if failures.len() == 1 {
            return failures.remove(0)
        }

        let count = failures.len();
        let mut message = format!("Multiple Failures ({count} failures)");
        for (idx, failure) in failures.iter().enumerate() {
            // writing into a String is infallible
            let _ = write!(message, "\n-- failure {} --\n{}", idx + 1, failure.message);
        }
        Self { message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_message() {
        let err = AssertionError::new("expected: 1\nbut was : 2");
        assert_eq!(err.to_string(), "expected: 1\nbut was : 2");
    }

    #[test]
    fn description_prefix() {
        let err = AssertionError::new("boom").described_as("dish name");
        assert_eq!(err.message(), "[dish name] boom");
    }

    #[test]
    fn multiple_failures_are_numbered() {
        let err = AssertionError::multiple(vec![
            AssertionError::new("first"),
            AssertionError::new("second\nline"),
        ]);
        assert_eq!(
            err.message(),
            "Multiple Failures (2 failures)\n-- failure 1 --\nfirst\n-- failure 2 --\nsecond\nline"
        );
    }

    #[test]
    fn single_failure_is_not_wrapped() {
        let err = AssertionError::multiple(vec![AssertionError::new("only")]);
        assert_eq!(err.message(), "only");
    }
}
