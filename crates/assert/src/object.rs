//! Equality and membership of single values.

use crate::{messages, Assert};
use std::fmt::Debug;

/// Assertions available on any subject with a [`Debug`] representation.
pub trait EqualityAssertions {
    /// The type of the value under test.
    type Actual;

    /// Verifies that the actual value equals `expected`.
    fn is_equal_to<U>(&self, expected: U) -> &Self
    where
        U: Debug,
        Self::Actual: PartialEq<U>;

    /// Verifies that the actual value does not equal `other`.
    fn is_not_equal_to<U>(&self, other: U) -> &Self
    where
        U: Debug,
        Self::Actual: PartialEq<U>;

    /// Verifies that the actual value equals one of `values`.
    fn is_in<U, I>(&self, values: I) -> &Self
    where
        I: IntoIterator<Item = U>,
        U: Debug,
        Self::Actual: PartialEq<U>;

    /// Verifies that the actual value equals none of `values`.
    fn is_not_in<U, I>(&self, values: I) -> &Self
    where
        I: IntoIterator<Item = U>,
        U: Debug,
        Self::Actual: PartialEq<U>;
}

impl<S: Debug> EqualityAssertions for Assert<S> {
    type Actual = S;

    #[track_caller]
    fn is_equal_to<U>(&self, expected: U) -> &Self
    where
        U: Debug,
        S: PartialEq<U>,
    {
        if *self.actual() == expected {
            return self
        }
        let repr = self.representation();
        let (actual, expected) = (repr.value(self.actual()), repr.value(&expected));
        self.check(Err(messages::should_be_equal(&actual, &expected)))
    }

    #[track_caller]
    fn is_not_equal_to<U>(&self, other: U) -> &Self
    where
        U: Debug,
        S: PartialEq<U>,
    {
        if *self.actual() != other {
            return self
        }
        let repr = self.representation();
        let (actual, other) = (repr.value(self.actual()), repr.value(&other));
        self.check(Err(messages::should_not_be_equal(&actual, &other)))
    }

    #[track_caller]
    fn is_in<U, I>(&self, values: I) -> &Self
    where
        I: IntoIterator<Item = U>,
        U: Debug,
        S: PartialEq<U>,
    {
        let values: Vec<U> = values.into_iter().collect();
        if values.iter().any(|value| *self.actual() == *value) {
            return self
        }
        let repr = self.representation();
        self.check(Err(messages::should_be_in(&repr.value(self.actual()), &repr.elements(&values))))
    }

    #[track_caller]
    fn is_not_in<U, I>(&self, values: I) -> &Self
    where
        I: IntoIterator<Item = U>,
        U: Debug,
        S: PartialEq<U>,
    {
        let values: Vec<U> = values.into_iter().collect();
        if !values.iter().any(|value| *self.actual() == *value) {
            return self
        }
        let repr = self.representation();
        self.check(Err(messages::should_not_be_in(
            &repr.value(self.actual()),
            &repr.elements(&values),
        )))
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn equal_values_pass() {
        assert_that("hi").is_equal_to("hi").is_not_equal_to("bye");
        assert_that(String::from("hi")).is_equal_to("hi");
        assert_that(3).is_in([1, 2, 3]).is_not_in([4, 5]);
    }

    #[test]
    #[should_panic(expected = "expected: \"bye\"\nbut was : \"hi\"")]
    fn unequal_values_fail() {
        assert_that("hi").is_equal_to("bye");
    }

    #[test]
    #[should_panic(expected = "[greeting] expected: \"bye\"")]
    fn description_is_prefixed() {
        assert_that("hi").described_as("greeting").is_equal_to("bye");
    }

    #[test]
    #[should_panic(expected = "Expecting actual:\n  \"one\"\nto be in:\n  [\"two\", \"three\"]")]
    fn missing_membership_fails() {
        assert_that("one").is_in(["two", "three"]);
    }

    #[test]
    #[should_panic(expected = "Expecting actual:\n  2\nnot to be in:\n  [1, 2]")]
    fn unwanted_membership_fails() {
        assert_that(2).is_not_in([1, 2]);
    }
}
