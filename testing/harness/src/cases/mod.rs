//! The catalogue of assertion demonstrations.
//!
//! Every suite pairs passing assertion chains with failing ones and the exact message they
//! fail with. Each case builds its own fixtures, so cases can run in any order and in
//! parallel.

use crate::{case::Cases, suite::Suite};

mod extracting;
mod iterable;
mod single_element;

pub use extracting::ExtractingSuite;
pub use iterable::IterableSuite;
pub use single_element::SingleElementSuite;

/// All suites of the catalogue, in report order.
pub fn suites() -> Vec<Box<dyn Suite>> {
    let suites: [Box<dyn Suite>; 3] =
        [Box::new(SingleElementSuite), Box::new(IterableSuite), Box::new(ExtractingSuite)];
    suites.into()
}

/// Every case of every suite.
pub fn catalogue() -> Cases {
    suites().iter().flat_map(|suite| suite.cases()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn case_names_are_unique_per_group() {
        let cases = catalogue();
        let keys: HashSet<_> = cases.cases.iter().map(|case| (case.group, case.name)).collect();
        assert_eq!(keys.len(), cases.len());
    }

    #[test]
    fn cases_carry_their_suite_name() {
        for suite in suites() {
            assert!(suite.cases().iter().all(|case| case.group == suite.suite_name()));
        }
    }
}
