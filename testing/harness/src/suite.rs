//! Named groups of cases.

use crate::{
    case::{Case, Cases},
    result::assert_cases_pass,
};

/// A named group of cases.
pub trait Suite {
    /// The name of the suite, used as the group of its cases.
    ///
    /// # Example
    ///
    /// - `single-element`
    /// - `iterable`
    /// - `extracting`
    fn suite_name(&self) -> &'static str;

    /// Builds the cases of the suite.
    fn cases(&self) -> Vec<Case>;

    /// Runs every case, panicking with a report if one of them failed.
    fn run(&self) {
        let results = Cases::new(self.cases()).run();

        assert_cases_pass(self.suite_name(), &results);
    }
}
