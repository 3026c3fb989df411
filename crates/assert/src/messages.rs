//! Failure message factories.
//!
//! Every function receives values already rendered by a
//! [`Representation`](crate::Representation) and lays them out as
//!
//! ```text
//! Expecting actual:
//!   <actual>
//! to contain:
//!   <values>
//! ```
//!
//! Headings start at column zero, rendered values are indented by two spaces.

use crate::AssertionError;

/// Builds a message out of headings and indented value blocks.
#[derive(Debug, Default)]
struct Layout {
    text: String,
}

impl Layout {
    fn line(mut self, line: &str) -> Self {
        if !self.text.is_empty() {
            self.text.push('\n');
        }
        self.text.push_str(line);
        self
    }

    fn value(self, value: &str) -> Self {
        self.indented(value, "  ")
    }

    fn indented(mut self, value: &str, indent: &str) -> Self {
        if value.is_empty() {
            self.text.push('\n');
            self.text.push_str(indent);
        }
        for line in value.lines() {
            self.text.push('\n');
            self.text.push_str(indent);
            self.text.push_str(line);
        }
        self
    }

    fn section(self, heading: &str, value: &str) -> Self {
        self.line(heading).value(value)
    }

    fn optional(self, heading: &str, value: Option<&str>) -> Self {
        match value {
            Some(value) => self.section(heading, value),
            None => self,
        }
    }

    fn build(self) -> AssertionError {
        AssertionError::new(self.text)
    }
}

/// The failure of one element checked by `any_satisfy` or `all_satisfy`.
#[derive(Debug)]
pub(crate) struct ElementFailure {
    pub(crate) index: usize,
    pub(crate) element: String,
    pub(crate) error: AssertionError,
}

pub(crate) fn should_be_equal(actual: &str, expected: &str) -> AssertionError {
    AssertionError::new(format!("expected: {expected}\nbut was : {actual}"))
}

pub(crate) fn should_not_be_equal(actual: &str, other: &str) -> AssertionError {
    Layout::default()
        .section("Expecting actual:", actual)
        .section("not to be equal to:", other)
        .build()
}

pub(crate) fn should_be_in(actual: &str, values: &str) -> AssertionError {
    Layout::default().section("Expecting actual:", actual).section("to be in:", values).build()
}

pub(crate) fn should_not_be_in(actual: &str, values: &str) -> AssertionError {
    Layout::default().section("Expecting actual:", actual).section("not to be in:", values).build()
}

pub(crate) fn should_contain(actual: &str, values: &str, missing: Option<&str>) -> AssertionError {
    Layout::default()
        .section("Expecting actual:", actual)
        .section("to contain:", values)
        .optional("but could not find the following element(s):", missing)
        .build()
}

pub(crate) fn should_not_contain(
    actual: &str,
    values: &str,
    found: Option<&str>,
) -> AssertionError {
    Layout::default()
        .section("Expecting actual:", actual)
        .section("not to contain:", values)
        .optional("but found the following element(s):", found)
        .build()
}

pub(crate) fn should_start_with(actual: &str, prefix: &str) -> AssertionError {
    Layout::default().section("Expecting actual:", actual).section("to start with:", prefix).build()
}

pub(crate) fn should_end_with(actual: &str, suffix: &str) -> AssertionError {
    Layout::default().section("Expecting actual:", actual).section("to end with:", suffix).build()
}

pub(crate) fn should_have_size(actual: &str, expected: usize, size: usize) -> AssertionError {
    AssertionError::new(format!("Expected size: {expected} but was: {size} in:\n{actual}"))
}

pub(crate) fn should_be_empty(actual: &str) -> AssertionError {
    AssertionError::new(format!("Expecting empty but was: {actual}"))
}

pub(crate) fn should_not_be_empty() -> AssertionError {
    AssertionError::new("Expecting actual not to be empty")
}

pub(crate) fn should_have_same_order(
    index: usize,
    actual_element: &str,
    expected_element: &str,
) -> AssertionError {
    Layout::default()
        .line(&format!(
            "Actual and expected have the same elements but not in the same order, at index {index} actual element was:"
        ))
        .value(actual_element)
        .section("whereas expected element was:", expected_element)
        .build()
}

pub(crate) fn should_contain_exactly(
    actual: &str,
    expected: &str,
    missing: Option<&str>,
    unexpected: Option<&str>,
) -> AssertionError {
    let layout = Layout::default()
        .section("Expecting actual:", actual)
        .section("to contain exactly (and in same order):", expected);
    match (missing, unexpected) {
        (Some(missing), Some(unexpected)) => layout
            .section("but some elements were not found:", missing)
            .section("and others were not expected:", unexpected),
        (Some(missing), None) => {
            layout.section("but could not find the following elements:", missing)
        }
        (None, Some(unexpected)) => {
            layout.section("but some elements were not expected:", unexpected)
        }
        (None, None) => layout,
    }
    .build()
}

pub(crate) fn should_contain_exactly_in_any_order(
    actual: &str,
    expected: &str,
    missing: Option<&str>,
    unexpected: Option<&str>,
) -> AssertionError {
    let layout = Layout::default()
        .section("Expecting actual:", actual)
        .section("to contain exactly in any order:", expected);
    match (missing, unexpected) {
        (Some(missing), Some(unexpected)) => layout
            .section("elements not found:", missing)
            .section("and elements not expected:", unexpected),
        (Some(missing), None) => {
            layout.section("but could not find the following elements:", missing)
        }
        (None, Some(unexpected)) => {
            layout.section("but the following elements were unexpected:", unexpected)
        }
        (None, None) => layout,
    }
    .build()
}

pub(crate) fn should_contain_only(
    actual: &str,
    expected: &str,
    missing: Option<&str>,
    unexpected: Option<&str>,
) -> AssertionError {
    let layout = Layout::default()
        .section("Expecting actual:", actual)
        .section("to contain only:", expected);
    match (missing, unexpected) {
        (Some(missing), Some(unexpected)) => layout
            .section("but could not find the following element(s):", missing)
            .section("and the following element(s) were unexpected:", unexpected),
        (Some(missing), None) => {
            layout.section("but could not find the following element(s):", missing)
        }
        (None, Some(unexpected)) => {
            layout.section("but the following element(s) were unexpected:", unexpected)
        }
        (None, None) => layout,
    }
    .build()
}

pub(crate) fn should_contain_any_of(actual: &str, values: &str) -> AssertionError {
    Layout::default()
        .section("Expecting actual:", actual)
        .section("to contain at least one of the following elements:", values)
        .line("but none were found")
        .build()
}

pub(crate) fn should_contain_sequence(actual: &str, sequence: &str) -> AssertionError {
    Layout::default()
        .section("Expecting actual:", actual)
        .section("to contain sequence:", sequence)
        .build()
}

pub(crate) fn should_contain_subsequence(actual: &str, subsequence: &str) -> AssertionError {
    Layout::default()
        .section("Expecting actual:", actual)
        .section("to contain subsequence:", subsequence)
        .build()
}

pub(crate) fn should_have_any_satisfying(
    actual: &str,
    failures: &[ElementFailure],
) -> AssertionError {
    let layout = Layout::default()
        .section("Expecting any element of:", actual)
        .line("to satisfy the given requirements, but none did:");
    element_failures(layout, failures).build()
}

pub(crate) fn should_have_all_satisfying(
    actual: &str,
    failures: &[ElementFailure],
) -> AssertionError {
    let layout = Layout::default()
        .section("Expecting all elements of:", actual)
        .line("to satisfy the given requirements, but these elements did not:");
    element_failures(layout, failures).build()
}

fn element_failures(mut layout: Layout, failures: &[ElementFailure]) -> Layout {
    for failure in failures {
        layout = layout
            .line(&format!("  element [{}] {}:", failure.index, failure.element))
            .indented(failure.error.message(), "    ");
    }
    layout
}

pub(crate) fn field_not_found(path: &str, element: &str) -> AssertionError {
    Layout::default()
        .line(&format!("Can't find any field or property with name '{path}' in:"))
        .value(element)
        .build()
}

pub(crate) fn field_not_extractable(path: &str, element: &str, reason: &str) -> AssertionError {
    Layout::default()
        .line(&format!("Can't extract field '{path}' from:"))
        .value(element)
        .section("because:", reason)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality() {
        let err = should_be_equal(r#""hi""#, r#""bye""#);
        assert_eq!(err.message(), "expected: \"bye\"\nbut was : \"hi\"");
    }

    #[test]
    fn contain_with_missing_elements() {
        let err =
            should_contain(r#"["one", "two", "three"]"#, r#"["absent"]"#, Some(r#"["absent"]"#));
        assert_eq!(
            err.message(),
            r#"Expecting actual:
  ["one", "two", "three"]
to contain:
  ["absent"]
but could not find the following element(s):
  ["absent"]"#
        );
    }

    #[test]
    fn same_order() {
        let err = should_have_same_order(1, r#""two""#, r#""three""#);
        assert_eq!(
            err.message(),
            r#"Actual and expected have the same elements but not in the same order, at index 1 actual element was:
  "two"
whereas expected element was:
  "three""#
        );
    }

    #[test]
    fn any_of_has_trailing_line() {
        let err = should_contain_any_of("[1]", "[2]");
        assert_eq!(
            err.message(),
            "Expecting actual:\n  [1]\nto contain at least one of the following elements:\n  [2]\nbut none were found"
        );
    }

    #[test]
    fn element_failures_are_indented() {
        let failures = [ElementFailure {
            index: 0,
            element: r#""one""#.to_string(),
            error: should_be_in(r#""one""#, r#"["x"]"#),
        }];
        let err = should_have_any_satisfying(r#"["one"]"#, &failures);
        assert_eq!(
            err.message(),
            r#"Expecting any element of:
  ["one"]
to satisfy the given requirements, but none did:
  element [0] "one":
    Expecting actual:
      "one"
    to be in:
      ["x"]"#
        );
    }

    #[test]
    fn empty_value_keeps_its_line() {
        let err = Layout::default().section("heading:", "").build();
        assert_eq!(err.message(), "heading:\n  ");
    }
}
