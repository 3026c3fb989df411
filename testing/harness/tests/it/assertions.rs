//! Assertion chains checked through the capture harness, one test per demonstration.

use plate_assert::{prelude::*, Representation};
use plate_harness::{assert_error_contains, dishes, words, words_with_duplicates, DishType};

mod single_element {
    use super::*;

    #[test]
    fn one_assertion() {
        assert_error_contains("expected: \"bye\"\nbut was : \"hi\"", || {
            assert_that("hi").is_equal_to("bye");
        });
    }

    #[test]
    fn multiple_chain_assertions() {
        let message = "Expecting actual:\n  \"hi\"\nto contain:\n  \"aye\"";
        assert_error_contains(message, || {
            assert_that("hi").is_equal_to("hi").contains("aye").has_size(1);
        });
    }

    #[test]
    fn multiple_chain_assertions_softly() {
        let message = r#"Multiple Failures (2 failures)
-- failure 1 --
Expecting actual:
  "hi"
to contain:
  "aye"
-- failure 2 --
Expected size: 1 but was: 2 in:
"hi""#;
        assert_error_contains(message, || {
            assert_that("hi").all(|it| {
                it.is_equal_to("hi");
                it.contains("aye");
                it.has_size(1);
            });
        });
    }
}

mod iterable {
    use super::*;

    #[test]
    fn contains_given_values_in_any_order() {
        plate_tracing::init_test_tracing();

        assert_that(words())
            .contains(["one"])
            .contains(["one", "two"])
            .contains(["one", "three", "two"]);

        assert_error_contains(
            r#"Expecting actual:
  ["one", "two", "three"]
to contain:
  ["absent"]
but could not find the following element(s):
  ["absent"]"#,
            || {
                assert_that(words()).contains(["absent"]);
            },
        );
    }

    #[test]
    fn contains_sequence_rejects_gaps() {
        assert_that(words())
            .contains_sequence(["one", "two"])
            .contains_sequence(["two", "three"]);

        assert_error_contains(
            r#"Expecting actual:
  ["one", "two", "three"]
to contain sequence:
  ["one", "three"]"#,
            || {
                assert_that(words()).contains_sequence(["one", "three"]);
            },
        );
    }

    #[test]
    fn contains_only_lists_unexpected_duplicates() {
        assert_error_contains(
            r#"Expecting actual:
  ["one", "two", "three", "two"]
to contain only:
  ["one", "three"]
but the following element(s) were unexpected:
  ["two", "two"]"#,
            || {
                assert_that(words_with_duplicates()).contains_only(["one", "three"]);
            },
        );
    }

    #[test]
    fn passing_containment_needs_no_capture() {
        assert_that(words()).contains(["one"]);
    }

    #[test]
    fn soft_assertions_report_nested_collections() {
        assert_error_contains(
            r#"Multiple Failures (2 failures)
-- failure 1 --
Expecting actual:
  ["one", "two", "three"]
to contain sequence:
  ["one", "three"]
-- failure 2 --
Expected size: 4 but was: 3 in:
["one", "two", "three"]"#,
            || {
                assert_that(words()).all(|it| {
                    it.contains_subsequence(["one", "three"]);
                    it.contains_sequence(["one", "three"]);
                    it.has_size(4);
                });
            },
        );
    }

    #[test]
    fn representation_elides_long_lists() {
        let message = r#"Expecting actual:
  [1, 2, ..., 9, 10]
to contain:
  [11]
but could not find the following element(s):
  [11]"#;
        assert_error_contains(message, || {
            let long: Vec<u32> = (1..=10).collect();
            assert_that(long).with_representation(Representation::new(4)).contains([11]);
        });
    }
}

mod extracting {
    use super::*;

    #[test]
    fn single_value_per_element() {
        assert_that(dishes())
            .extracting_field("name")
            .contains_exactly(["Keropok", "Prawn Mee", "Mango Pudding"]);
        assert_that(dishes())
            .extracting(|dish| dish.name.clone())
            .contains_exactly(["Keropok", "Prawn Mee", "Mango Pudding"])
            .does_not_contain(["Brinjal"]);
    }

    #[test]
    fn multiple_values_per_element() {
        assert_that(dishes()).extracting_fields(&["name", "type.course"]).contains_exactly([
            tuple!("Keropok", "Appetizer"),
            tuple!("Prawn Mee", "Main"),
            tuple!("Mango Pudding", "Dessert"),
        ]);
        assert_that(dishes())
            .extracting_pair(|dish| dish.name.clone(), |dish| dish.kind.clone())
            .contains_exactly([
                ("Keropok".to_string(), DishType::new("Appetizer", "Savoury")),
                ("Prawn Mee".to_string(), DishType::new("Main", "Savoury")),
                ("Mango Pudding".to_string(), DishType::new("Dessert", "Sweet")),
            ]);
    }

    #[test]
    fn flattening_multiple_values_per_element() {
        let ingredients = ["Fish", "Flour", "Noodle", "Prawn", "Gelatin", "Mango"];
        assert_that(dishes())
            .flat_extracting_field("ingredients")
            .contains_exactly(ingredients);
        assert_that(dishes())
            .flat_extracting(|dish| dish.ingredients.clone())
            .contains_exactly(ingredients);
    }

    #[test]
    fn missing_field_joins_soft_assertions_without_cascading() {
        assert_error_contains(
            r#"Multiple Failures (2 failures)
-- failure 1 --
Can't find any field or property with name 'price' in:
  Dish { name: "Keropok", kind: DishType { course: "Appetizer", taste: "Savoury" }, ingredients: {"Fish", "Flour"} }
-- failure 2 --
Expecting actual:
  ["Keropok", "Prawn Mee", "Mango Pudding"]
not to contain:
  ["Keropok"]
but found the following element(s):
  ["Keropok"]"#,
            || {
                assert_that(dishes()).all(|it| {
                    it.extracting_field("price").contains(["1.50"]);
                    it.extracting_field("name").does_not_contain(["Keropok"]);
                });
            },
        );
    }
}
