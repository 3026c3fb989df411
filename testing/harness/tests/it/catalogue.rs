use assert_matches::assert_matches;
use plate_harness::{
    cases::{catalogue, suites, ExtractingSuite, IterableSuite, SingleElementSuite},
    categorize_results, Outcome, Suite,
};

#[test]
fn single_element_suite() {
    SingleElementSuite.run();
}

#[test]
fn iterable_suite() {
    IterableSuite.run();
}

#[test]
fn extracting_suite() {
    ExtractingSuite.run();
}

#[test]
fn whole_catalogue_passes() {
    plate_tracing::init_test_tracing();

    let results = catalogue().run();
    let (passed, failed, skipped) = categorize_results(&results);
    assert!(failed.is_empty(), "failed cases: {failed:#?}");
    assert_eq!(passed.len() + skipped.len(), results.len());
    assert_eq!(skipped.len(), 1);
    assert_matches!(skipped[0].outcome, Outcome::Skipped(_));
}

#[test]
fn every_suite_has_passing_and_failing_demonstrations() {
    use plate_harness::Expectation;

    for suite in suites() {
        let cases = suite.cases();
        assert!(
            cases.iter().any(|case| matches!(case.expectation, Expectation::Pass(_))),
            "{} has no passing case",
            suite.suite_name()
        );
        assert!(
            cases.iter().any(|case| matches!(case.expectation, Expectation::Fail { .. })),
            "{} has no failing case",
            suite.suite_name()
        );
    }
}

#[test]
fn filtered_catalogue() {
    let cases = catalogue().filter(Some("iterable"), Some("contains sequence"));
    let names: Vec<_> = cases.cases.iter().map(|case| case.name).collect();
    assert_eq!(names, ["contains sequence without gaps", "contains sequence rejects gaps"]);
}
