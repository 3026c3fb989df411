use assert_matches::assert_matches;
use plate_assert::prelude::*;
use plate_harness::{capture_failure, dishes, expect_failure, words, ExpectedFailure, HarnessError};

#[test]
fn fixtures_are_deterministic() {
    for _ in 0..3 {
        assert_eq!(dishes(), dishes());
        assert_eq!(words(), ["one", "two", "three"]);
    }
}

#[test]
fn captured_message_is_trimmed_assertion_text() {
    let failure = capture_failure(|| {
        assert_that(words()).has_size(1);
    })
    .unwrap();
    assert_eq!(
        failure.message(),
        "Expected size: 1 but was: 3 in:\n[\"one\", \"two\", \"three\"]"
    );
}

#[test]
fn passing_assertion_is_a_harness_failure() {
    let result = expect_failure("expected: \"hi\"\nbut was : \"hi\"", || {
        assert_that("hi").is_equal_to("hi");
    });
    assert_matches!(result, Err(HarnessError::NoFailure));
}

#[test]
fn different_message_is_a_harness_failure() {
    let result = expect_failure("expected: \"hello\"\nbut was : \"hi\"", || {
        assert_that("hi").is_equal_to("bye");
    });
    assert_matches!(
        result,
        Err(HarnessError::MessageMismatch { expected, actual })
            if expected.contains("hello") && actual == "expected: \"bye\"\nbut was : \"hi\""
    );
}

#[test]
fn expected_failure_pairs_operation_and_message() {
    let expected = ExpectedFailure::new("expected: \"bye\"\nbut was : \"hi\"", || {
        assert_that("hi").is_equal_to("bye");
    });
    assert_matches!(expected.verify(), Ok(()));
}

#[test]
#[should_panic(expected = "failure message mismatch")]
fn assert_error_contains_reports_mismatch() {
    plate_harness::assert_error_contains("expected: 1\nbut was : 2", || {
        assert_that(2).is_equal_to(3);
    });
}

#[test]
fn failures_after_an_unwound_soft_block_are_raised() {
    let subject = assert_that(1);
    let unwound = capture_failure(|| {
        subject.all(|_| panic!("not an assertion"));
    });
    assert_matches!(unwound, Ok(failure) if failure.message() == "not an assertion");

    let failure = capture_failure(|| {
        subject.is_equal_to(2);
    })
    .unwrap();
    assert_eq!(failure.message(), "expected: 2\nbut was : 1");
}
