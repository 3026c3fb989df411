//! Fixtures, failure capture and the case catalogue used to exercise `plate-assert`.
//!
//! - [`fixtures`] builds the deterministic sample data every case asserts against.
//! - [`capture`] runs an operation that is expected to fail and compares its failure message
//!   with an expected text, character for character.
//! - [`case`], [`result`] and [`suite`] register assertion demonstrations as named cases and
//!   run them, in parallel, with a pass/fail/skip report.
//! - [`cases`] is the catalogue itself.

#![doc(issue_tracker_base_url = "https://github.com/plate-rs/plate/issues/")]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

pub mod capture;
pub mod case;
pub mod cases;
pub mod fixtures;
pub mod result;
pub mod suite;

pub use capture::{
    assert_error_contains, capture_failure, expect_failure, CapturedFailure, ExpectedFailure,
    HarnessError,
};
pub use case::{Case, Cases, Expectation};
pub use fixtures::{dishes, words, words_with_duplicates, Dish, DishType};
pub use result::{assert_cases_pass, categorize_results, print_results, CaseResult, Outcome};
pub use suite::Suite;
