use crate::{case::Case, suite::Suite};
use plate_assert::prelude::*;

const GROUP: &str = "single-element";

/// Equality and text assertions on a single value.
#[derive(Debug, Clone, Copy, Default)]
pub struct SingleElementSuite;

impl Suite for SingleElementSuite {
    fn suite_name(&self) -> &'static str {
        GROUP
    }

    fn cases(&self) -> Vec<Case> {
        vec![
            Case::fail(GROUP, "one assertion", "expected: \"bye\"\nbut was : \"hi\"", || {
                assert_that("hi").is_equal_to("bye");
            }),
            Case::pass(GROUP, "passing chain", || {
                assert_that("hi").is_equal_to("hi").contains("h").starts_with("h").has_size(2);
                assert_that(String::from("hi")).is_not_equal_to("bye").is_in(["hey", "hi"]);
            }),
            Case::fail(
                GROUP,
                "multiple chain assertions stop at the first failure",
                "Expecting actual:\n  \"hi\"\nto contain:\n  \"aye\"",
                || {
                    assert_that("hi").is_equal_to("hi").contains("aye").has_size(1);
                },
            ),
            Case::fail(
                GROUP,
                "multiple chain assertions softly",
                "Multiple Failures (2 failures)
-- failure 1 --
Expecting actual:
  \"hi\"
to contain:
  \"aye\"
-- failure 2 --
Expected size: 1 but was: 2 in:
\"hi\"",
                || {
                    assert_that("hi").all(|it| {
                        it.is_equal_to("hi");
                        it.contains("aye");
                        it.has_size(1);
                    });
                },
            ),
            Case::fail(
                GROUP,
                "described subject",
                "[greeting] expected: \"bye\"\nbut was : \"hi\"",
                || {
                    assert_that("hi").described_as("greeting").is_equal_to("bye");
                },
            ),
            Case::fail(
                GROUP,
                "membership",
                "Expecting actual:\n  \"hi\"\nto be in:\n  [\"hey\", \"hello\"]",
                || {
                    assert_that("hi").is_in(["hey", "hello"]);
                },
            ),
        ]
    }
}
