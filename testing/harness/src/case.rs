//! Test case definitions

use crate::{
    capture::{capture_failure, expect_failure, HarnessError},
    result::{CaseResult, Outcome},
};
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use std::fmt;
use tracing::debug;

/// The operation of a case: an assertion chain built on fresh fixtures.
pub type Operation = Box<dyn Fn() + Send + Sync>;

/// What running a case should produce.
pub enum Expectation {
    /// The operation completes without a failure.
    Pass(Operation),
    /// The operation fails with exactly `message`.
    Fail {
        /// Expected failure message.
        message: &'static str,
        /// The operation under test.
        operation: Operation,
    },
    /// The demonstration has no counterpart and is not run.
    Skip(&'static str),
}

impl fmt::Debug for Expectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pass(_) => f.write_str("Pass"),
            Self::Fail { message, .. } => f.debug_struct("Fail").field("message", message).finish(),
            Self::Skip(reason) => f.debug_tuple("Skip").field(reason).finish(),
        }
    }
}

/// A single named demonstration of an assertion.
#[derive(Debug)]
pub struct Case {
    /// The suite the case belongs to.
    pub group: &'static str,
    /// A description of the case.
    pub name: &'static str,
    /// How the case is verified.
    pub expectation: Expectation,
}

impl Case {
    /// A case whose operation must complete normally.
    pub fn pass(
        group: &'static str,
        name: &'static str,
        operation: impl Fn() + Send + Sync + 'static,
    ) -> Self {
        Self { group, name, expectation: Expectation::Pass(Box::new(operation)) }
    }

    /// A case whose operation must fail with exactly `message`.
    pub fn fail(
        group: &'static str,
        name: &'static str,
        message: &'static str,
        operation: impl Fn() + Send + Sync + 'static,
    ) -> Self {
        let expectation = Expectation::Fail { message, operation: Box::new(operation) };
        Self { group, name, expectation }
    }

    /// A case that is registered but never run.
    pub const fn skip(group: &'static str, name: &'static str, reason: &'static str) -> Self {
        Self { group, name, expectation: Expectation::Skip(reason) }
    }

    /// Run the case.
    pub fn run(&self) -> CaseResult {
        debug!(target: "plate::harness", group = self.group, case = self.name, "running case");
        let outcome = match &self.expectation {
            Expectation::Pass(operation) => match capture_failure(operation) {
                Err(HarnessError::NoFailure) => Outcome::Passed,
                Err(err) => Outcome::Failed(err),
                Ok(failure) => {
                    Outcome::Failed(HarnessError::UnexpectedFailure(failure.into_message()))
                }
            },
            Expectation::Fail { message, operation } => match expect_failure(message, operation) {
                Ok(()) => Outcome::Passed,
                Err(err) => Outcome::Failed(err),
            },
            Expectation::Skip(reason) => Outcome::Skipped(*reason),
        };
        CaseResult::new(self, outcome)
    }
}

/// A container for multiple test cases.
#[derive(Debug, Default)]
pub struct Cases {
    /// The contained test cases.
    pub cases: Vec<Case>,
}

impl Cases {
    /// Wraps `cases`.
    pub const fn new(cases: Vec<Case>) -> Self {
        Self { cases }
    }

    /// Keeps the cases of `group`, if given, whose name contains `filter`, if given.
    pub fn filter(mut self, group: Option<&str>, filter: Option<&str>) -> Self {
        self.cases.retain(|case| {
            group.map_or(true, |group| case.group == group) &&
                filter.map_or(true, |filter| case.name.contains(filter))
        });
        self
    }

    /// Number of contained cases.
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// Whether there are no cases.
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Run the contained test cases, in parallel.
    ///
    /// Results are returned in registration order.
    pub fn run(&self) -> Vec<CaseResult> {
        self.cases.par_iter().map(Case::run).collect()
    }
}

impl FromIterator<Case> for Cases {
    fn from_iter<I: IntoIterator<Item = Case>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn cases() -> Cases {
        Cases::new(vec![
            Case::pass("numbers", "no failure", || {}),
            Case::fail("numbers", "expected failure", "boom", || panic!("boom")),
            Case::fail("numbers", "other failure", "boom", || panic!("bang")),
            Case::pass("letters", "unexpected failure", || panic!("bang")),
            Case::skip("letters", "not applicable", "no counterpart"),
        ])
    }

    #[test]
    fn outcomes() {
        let results = cases().run();
        let outcomes: Vec<_> = results.iter().map(|result| &result.outcome).collect();
        assert_matches!(outcomes[0], Outcome::Passed);
        assert_matches!(outcomes[1], Outcome::Passed);
        assert_matches!(
            outcomes[2],
            Outcome::Failed(HarnessError::MessageMismatch { actual, .. }) if actual == "bang"
        );
        assert_matches!(
            outcomes[3],
            Outcome::Failed(HarnessError::UnexpectedFailure(message)) if message == "bang"
        );
        assert_matches!(outcomes[4], Outcome::Skipped("no counterpart"));
    }

    #[test]
    fn results_keep_registration_order() {
        let names: Vec<_> = cases().run().into_iter().map(|result| result.name).collect();
        assert_eq!(
            names,
            [
                "no failure",
                "expected failure",
                "other failure",
                "unexpected failure",
                "not applicable"
            ]
        );
    }

    #[test]
    fn filter_by_group_and_name() {
        assert_eq!(cases().filter(Some("letters"), None).len(), 2);
        assert_eq!(cases().filter(None, Some("failure")).len(), 4);
        assert_eq!(cases().filter(Some("numbers"), Some("other")).len(), 1);
        assert!(cases().filter(Some("colours"), None).is_empty());
    }
}
