use crate::{
    case::Case,
    fixtures::{words, words_with_duplicates},
    suite::Suite,
};
use plate_assert::prelude::*;
use std::collections::{BTreeSet, HashSet, VecDeque};

const GROUP: &str = "iterable";

/// Containment, ordering and set-equality assertions on `["one", "two", "three"]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct IterableSuite;

impl Suite for IterableSuite {
    fn suite_name(&self) -> &'static str {
        GROUP
    }

    fn cases(&self) -> Vec<Case> {
        vec![
            Case::pass(GROUP, "contains given values in any order", || {
                assert_that(words())
                    .contains(["one"])
                    .contains(["one", "two"])
                    .contains(["one", "three", "two"]);
            }),
            Case::fail(
                GROUP,
                "contains reports missing values",
                r#"Expecting actual:
  ["one", "two", "three"]
to contain:
  ["absent"]
but could not find the following element(s):
  ["absent"]"#,
                || {
                    assert_that(words()).contains(["absent"]);
                },
            ),
            Case::pass(GROUP, "contains exactly given values in order", || {
                assert_that(words()).contains_exactly(["one", "two", "three"]);
            }),
            Case::fail(
                GROUP,
                "contains exactly reports the first element out of order",
                r#"Actual and expected have the same elements but not in the same order, at index 1 actual element was:
  "two"
whereas expected element was:
  "three""#,
                || {
                    assert_that(words()).contains_exactly(["one", "three", "two"]);
                },
            ),
            Case::skip(
                GROUP,
                "contains exactly reports every index out of order",
                "order mismatches report the first differing index only",
            ),
            Case::pass(GROUP, "contains exactly given values in any order", || {
                assert_that(words())
                    .contains_exactly_in_any_order(["three", "two", "one"])
                    .contains_exactly_in_any_order(["two", "three", "one"])
                    .contains_exactly_in_any_order(["one", "three", "two"]);
            }),
            Case::fail(
                GROUP,
                "contains exactly in any order reports unexpected values",
                r#"Expecting actual:
  ["one", "two", "three"]
to contain exactly in any order:
  ["one", "three"]
but the following elements were unexpected:
  ["two"]"#,
                || {
                    assert_that(words()).contains_exactly_in_any_order(["one", "three"]);
                },
            ),
            Case::pass(GROUP, "contains only given values ignoring duplicates", || {
                assert_that(words_with_duplicates())
                    .contains_only(["three", "two", "one"])
                    .contains_only(["two", "three", "one"])
                    .contains_only(["one", "three", "two", "two"]);
            }),
            Case::fail(
                GROUP,
                "contains only reports every unexpected value",
                r#"Expecting actual:
  ["one", "two", "three", "two"]
to contain only:
  ["one", "three"]
but the following element(s) were unexpected:
  ["two", "two"]"#,
                || {
                    assert_that(words_with_duplicates()).contains_only(["one", "three"]);
                },
            ),
            Case::pass(GROUP, "contains any of the given values", || {
                assert_that(words())
                    .contains_any_of(["three", "two"])
                    .contains_any_of(["one", "absentOne", "absentTwo"]);
            }),
            Case::fail(
                GROUP,
                "contains any of reports when none is found",
                r#"Expecting actual:
  ["one", "two", "three"]
to contain at least one of the following elements:
  ["absentOne", "absentTwo", "absentThree"]
but none were found"#,
                || {
                    assert_that(words()).contains_any_of(["absentOne", "absentTwo", "absentThree"]);
                },
            ),
            Case::pass(GROUP, "any element is in the given values", || {
                assert_that(words())
                    .any_satisfy(|it| {
                        it.is_in(["three", "two"]);
                    })
                    .any_satisfy(|it| {
                        it.is_in(["one", "absentOne", "absentTwo"]);
                    });
            }),
            Case::fail(
                GROUP,
                "any element reports every failed element",
                r#"Expecting any element of:
  ["one", "two", "three"]
to satisfy the given requirements, but none did:
  element [0] "one":
    Expecting actual:
      "one"
    to be in:
      ["absentOne", "absentTwo", "absentThree"]
  element [1] "two":
    Expecting actual:
      "two"
    to be in:
      ["absentOne", "absentTwo", "absentThree"]
  element [2] "three":
    Expecting actual:
      "three"
    to be in:
      ["absentOne", "absentTwo", "absentThree"]"#,
                || {
                    assert_that(words()).any_satisfy(|it| {
                        it.is_in(["absentOne", "absentTwo", "absentThree"]);
                    });
                },
            ),
            Case::pass(GROUP, "contains sequence without gaps", || {
                assert_that(words())
                    .contains_sequence(["one", "two"])
                    .contains_sequence(["two", "three"]);
            }),
            Case::fail(
                GROUP,
                "contains sequence rejects gaps",
                r#"Expecting actual:
  ["one", "two", "three"]
to contain sequence:
  ["one", "three"]"#,
                || {
                    assert_that(words()).contains_sequence(["one", "three"]);
                },
            ),
            Case::pass(GROUP, "contains subsequence allowing gaps", || {
                assert_that(words())
                    .contains_subsequence(["one", "two"])
                    .contains_subsequence(["one", "three"]);
            }),
            Case::fail(
                GROUP,
                "contains subsequence needs every value in order",
                r#"Expecting actual:
  ["one", "two", "three"]
to contain subsequence:
  ["one", "three", "three"]"#,
                || {
                    assert_that(words()).contains_subsequence(["one", "three", "three"]);
                },
            ),
            Case::pass(GROUP, "soft assertions on a collection", || {
                assert_that(words()).all(|it| {
                    it.contains(["one"]);
                    it.contains(["one", "two"]);
                    it.contains(["one", "three", "two"]);
                });
            }),
            Case::pass(GROUP, "different iterables", || {
                assert_that(words().into_iter().collect::<BTreeSet<_>>())
                    .contains_only(["three", "one", "two"])
                    .contains_exactly_in_any_order(["three", "two", "one"])
                    .contains(["one", "three"]);

                assert_that(words().into_iter().collect::<HashSet<_>>())
                    .contains_only(["three", "one", "two"])
                    .contains_exactly_in_any_order(["three", "two", "one"])
                    .contains(["one", "three"]);

                assert_that_iter(words().into_iter().map(String::from))
                    .contains_only(["three", "one", "two"])
                    .contains_exactly_in_any_order(["three", "two", "one"])
                    .contains(["one", "three"])
                    .contains_exactly(["one", "two", "three"]);

                assert_that(["one", "two", "three"])
                    .contains_only(["three", "one", "two"])
                    .contains_exactly_in_any_order(["three", "two", "one"])
                    .contains(["one", "three"])
                    .contains_exactly(["one", "two", "three"]);

                assert_that(VecDeque::from(words())).contains_sequence(["two", "three"]);
            }),
        ]
    }
}
