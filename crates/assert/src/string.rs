//! Assertions on text.

use crate::{messages, Assert};

/// Assertions available on subjects that can be viewed as `str`.
pub trait StrAssertions {
    /// Verifies that the text contains `fragment`.
    fn contains(&self, fragment: &str) -> &Self;

    /// Verifies that the text does not contain `fragment`.
    fn does_not_contain(&self, fragment: &str) -> &Self;

    /// Verifies that the text starts with `prefix`.
    fn starts_with(&self, prefix: &str) -> &Self;

    /// Verifies that the text ends with `suffix`.
    fn ends_with(&self, suffix: &str) -> &Self;

    /// Verifies that the text is `expected` characters long.
    fn has_size(&self, expected: usize) -> &Self;

    /// Verifies that the text is empty.
    fn is_empty(&self) -> &Self;

    /// Verifies that the text is not empty.
    fn is_not_empty(&self) -> &Self;
}

impl<S: AsRef<str>> StrAssertions for Assert<S> {
    #[track_caller]
    fn contains(&self, fragment: &str) -> &Self {
        let text = self.actual().as_ref();
        if text.contains(fragment) {
            return self
        }
        let repr = self.representation();
        self.check(Err(messages::should_contain(&repr.value(text), &repr.value(fragment), None)))
    }

    #[track_caller]
    fn does_not_contain(&self, fragment: &str) -> &Self {
        let text = self.actual().as_ref();
        if !text.contains(fragment) {
            return self
        }
        let repr = self.representation();
        let (actual, fragment) = (repr.value(text), repr.value(fragment));
        self.check(Err(messages::should_not_contain(&actual, &fragment, None)))
    }

    #[track_caller]
    fn starts_with(&self, prefix: &str) -> &Self {
        let text = self.actual().as_ref();
        if text.starts_with(prefix) {
            return self
        }
        let repr = self.representation();
        self.check(Err(messages::should_start_with(&repr.value(text), &repr.value(prefix))))
    }

    #[track_caller]
    fn ends_with(&self, suffix: &str) -> &Self {
        let text = self.actual().as_ref();
        if text.ends_with(suffix) {
            return self
        }
        let repr = self.representation();
        self.check(Err(messages::should_end_with(&repr.value(text), &repr.value(suffix))))
    }

    #[track_caller]
    fn has_size(&self, expected: usize) -> &Self {
        let text = self.actual().as_ref();
        let size = text.chars().count();
        if size == expected {
            return self
        }
        let actual = self.representation().value(text);
        self.check(Err(messages::should_have_size(&actual, expected, size)))
    }

    #[track_caller]
    fn is_empty(&self) -> &Self {
        let text = self.actual().as_ref();
        if text.is_empty() {
            return self
        }
        self.check(Err(messages::should_be_empty(&self.representation().value(text))))
    }

    #[track_caller]
    fn is_not_empty(&self) -> &Self {
        if !self.actual().as_ref().is_empty() {
            return self
        }
        self.check(Err(messages::should_not_be_empty()))
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn passing_chain() {
        assert_that("hi")
            .contains("h")
            .does_not_contain("x")
            .starts_with("h")
            .ends_with("i")
            .has_size(2)
            .is_not_empty();
        assert_that(String::new()).is_empty();
    }

    #[test]
    fn size_counts_chars() {
        assert_that("héllo").has_size(5);
    }

    #[test]
    #[should_panic(expected = "Expecting actual:\n  \"hi\"\nto contain:\n  \"aye\"")]
    fn missing_fragment() {
        assert_that("hi").contains("aye");
    }

    #[test]
    #[should_panic(expected = "Expected size: 1 but was: 2 in:\n\"hi\"")]
    fn wrong_size() {
        assert_that("hi").has_size(1);
    }

    #[test]
    #[should_panic(expected = "Expecting empty but was: \"hi\"")]
    fn not_empty() {
        assert_that("hi").is_empty();
    }

    #[test]
    #[should_panic(expected = "Expecting actual not to be empty")]
    fn empty_text_is_not_empty_fails() {
        assert_that("").is_not_empty();
    }
}
