//! Case results and reporting.

use crate::{capture::HarnessError, case::Case};
use tracing::{info, warn};

/// How a case ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The case behaved as expected.
    Passed,
    /// The case did not behave as expected.
    Failed(HarnessError),
    /// The case was not run, with the reason.
    Skipped(&'static str),
}

/// The result of running a single case.
#[derive(Debug, Clone)]
pub struct CaseResult {
    /// The suite of the case.
    pub group: &'static str,
    /// The name of the case.
    pub name: &'static str,
    /// How it ended.
    pub outcome: Outcome,
}

impl CaseResult {
    /// Creates the result of `case`.
    pub const fn new(case: &Case, outcome: Outcome) -> Self {
        Self { group: case.group, name: case.name, outcome }
    }

    /// Whether the case failed.
    pub const fn is_failed(&self) -> bool {
        matches!(self.outcome, Outcome::Failed(_))
    }
}

/// Panics if any of `results` failed, after printing a report.
///
/// # Panics
///
/// If at least one case failed.
pub fn assert_cases_pass(suite_name: &str, results: &[CaseResult]) {
    let (passed, failed, skipped) = categorize_results(results);

    print_results(suite_name, &passed, &failed, &skipped, false);

    if !failed.is_empty() {
        panic!("Some cases failed (see above)");
    }
}

/// Splits `results` into passed, failed and skipped cases.
pub fn categorize_results(
    results: &[CaseResult],
) -> (Vec<&CaseResult>, Vec<&CaseResult>, Vec<&CaseResult>) {
    let mut passed = Vec::new();
    let mut failed = Vec::new();
    let mut skipped = Vec::new();

    for case in results {
        match case.outcome {
            Outcome::Passed => passed.push(case),
            Outcome::Failed(_) => failed.push(case),
            Outcome::Skipped(_) => skipped.push(case),
        }
    }

    (passed, failed, skipped)
}

/// Prints a summary line followed by one line per skipped and failed case.
///
/// Passed cases are listed too if `show_passed` is set.
pub fn print_results(
    suite_name: &str,
    passed: &[&CaseResult],
    failed: &[&CaseResult],
    skipped: &[&CaseResult],
    show_passed: bool,
) {
    info!(
        target: "plate::harness",
        suite = suite_name,
        passed = passed.len(),
        failed = failed.len(),
        skipped = skipped.len(),
        "suite finished"
    );

    println!("Suite: {suite_name}");
    println!(
        "Ran {} cases ({} passed, {} failed, {} skipped)",
        passed.len() + failed.len() + skipped.len(),
        passed.len(),
        failed.len(),
        skipped.len()
    );

    if show_passed {
        for case in passed {
            println!("[+] Case {}::{} passed", case.group, case.name);
        }
    }

    for case in skipped {
        if let Outcome::Skipped(reason) = case.outcome {
            println!("[S] Case {}::{} skipped: {reason}", case.group, case.name);
        }
    }

    for case in failed {
        if let Outcome::Failed(err) = &case.outcome {
            warn!(
                target: "plate::harness",
                group = case.group,
                case = case.name,
                %err,
                "case failed"
            );
            println!("[!] Case {}::{} failed:\n{err}", case.group, case.name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(name: &'static str, outcome: Outcome) -> CaseResult {
        CaseResult { group: "test", name, outcome }
    }

    #[test]
    fn categorize() {
        let results = [
            result("a", Outcome::Passed),
            result("b", Outcome::Failed(HarnessError::NoFailure)),
            result("c", Outcome::Skipped("not applicable")),
            result("d", Outcome::Passed),
        ];
        let (passed, failed, skipped) = categorize_results(&results);
        assert_eq!(passed.iter().map(|case| case.name).collect::<Vec<_>>(), ["a", "d"]);
        assert_eq!(failed.len(), 1);
        assert!(failed[0].is_failed());
        assert_eq!(skipped[0].name, "c");
    }

    #[test]
    fn passing_and_skipped_cases_pass() {
        assert_cases_pass(
            "test",
            &[result("a", Outcome::Passed), result("b", Outcome::Skipped("not applicable"))],
        );
    }

    #[test]
    #[should_panic(expected = "Some cases failed")]
    fn failed_case_panics() {
        assert_cases_pass("test", &[result("a", Outcome::Failed(HarnessError::NoFailure))]);
    }
}
